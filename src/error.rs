use crate::model::enums::LogicOperator;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{operator} needs at least 2 arguments, got {count}")]
    Arity { operator: LogicOperator, count: usize },
    #[error("Invalid settings: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("Simulation assertions failed: {0}")]
    Assertion(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No configuration directory available on this platform")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, Error>;

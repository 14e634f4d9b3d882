use serde::{Deserialize, Serialize};
use std::fmt;

/// Email field a text filter looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailField {
    From,
    Subject,
    To,
}

impl EmailField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::From => "from",
            Self::Subject => "subject",
            Self::To => "to",
        }
    }
}

impl fmt::Display for EmailField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Is,
    Contains,
}

impl Comparison {
    pub fn as_sieve(&self) -> &'static str {
        match self {
            Self::Is => "is",
            Self::Contains => "contains",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sieve())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicOperator {
    AllOf,
    AnyOf,
}

impl LogicOperator {
    pub fn as_sieve(&self) -> &'static str {
        match self {
            Self::AllOf => "allof",
            Self::AnyOf => "anyof",
        }
    }

    /// Infix symbol used in trace output.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::AllOf => "&",
            Self::AnyOf => "|",
        }
    }
}

impl fmt::Display for LogicOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sieve())
    }
}

/// Control signal threaded through rule evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterruptState {
    #[default]
    Continue,
    StopProcessingCurrentFile,
    StopProcessingAllFiles,
}

impl InterruptState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continue => "CONTINUE",
            Self::StopProcessingCurrentFile => "STOP_PROCESSING_CURRENT_FILE",
            Self::StopProcessingAllFiles => "STOP_PROCESSING_ALL_FILES",
        }
    }
}

impl fmt::Display for InterruptState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Rule simulation: apply rules to an email and record every step.
pub mod assertions;
pub mod engine;
pub mod state;

pub use assertions::EmailRuleSimulation;
pub use engine::{apply_rule, apply_rule_files, apply_rules_iteratively, apply_rules_to_email};
pub use state::{RuleApplicationState, RuleFileApplicationState, SimulationTrace};

//! Trace records produced while rules are applied to an email.
use serde::Serialize;
use std::fmt;

use crate::model::email::EmailState;
use crate::model::enums::InterruptState;

/// One step of a simulation: the state after an action ran, or after a rule
/// finished (`current_action == None`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleApplicationState {
    pub email_state: EmailState,
    pub interrupt_state: InterruptState,
    pub current_rule: Option<String>,
    pub current_rule_applied: bool,
    pub current_action: Option<String>,
}

impl RuleApplicationState {
    /// Fresh email state, nothing applied yet.
    pub fn initial() -> Self {
        Self::resumed(EmailState::default())
    }

    /// Carry `email_state` into a new rule file with no rule in progress.
    pub fn resumed(email_state: EmailState) -> Self {
        Self {
            email_state,
            interrupt_state: InterruptState::Continue,
            current_rule: None,
            current_rule_applied: false,
            current_action: None,
        }
    }
}

impl fmt::Display for RuleApplicationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "current_rule={} current_rule_applied={} current_action={} interrupt_state={}",
            self.current_rule.as_deref().unwrap_or("None"),
            self.current_rule_applied,
            self.current_action.as_deref().unwrap_or("None"),
            self.interrupt_state
        )
    }
}

/// Steps generated while running one rule file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleFileApplicationState {
    /// `None` only for the bootstrap record that precedes every file.
    pub file_name: Option<String>,
    pub history: Vec<RuleApplicationState>,
}

impl RuleFileApplicationState {
    pub fn initial() -> Self {
        Self {
            file_name: None,
            history: vec![RuleApplicationState::initial()],
        }
    }

    pub fn last_state(&self) -> Option<&RuleApplicationState> {
        self.history.last()
    }
}

/// Full record of running a list of rule files against one email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationTrace {
    pub files: Vec<RuleFileApplicationState>,
}

impl SimulationTrace {
    /// The last emitted step; its email state is the simulation result.
    pub fn final_state(&self) -> &RuleApplicationState {
        static INITIAL: std::sync::OnceLock<RuleApplicationState> = std::sync::OnceLock::new();
        self.files
            .iter()
            .rev()
            .find_map(RuleFileApplicationState::last_state)
            .unwrap_or_else(|| INITIAL.get_or_init(RuleApplicationState::initial))
    }

    pub fn steps(&self) -> impl Iterator<Item = &RuleApplicationState> {
        self.files.iter().flat_map(|file| file.history.iter())
    }
}

impl fmt::Display for SimulationTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, file) in self.files.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(file.file_name.as_deref().unwrap_or("None"))?;
            for step in &file.history {
                write!(f, "\n\t{step}")?;
            }
        }
        Ok(())
    }
}

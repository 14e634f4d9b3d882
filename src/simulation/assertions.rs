//! Run an account's rule files against one email and check the outcome.
use crate::error::{Error, Result};
use crate::model::email::{Email, EmailState};
use crate::model::settings::AccountSettings;
use crate::simulation::engine::apply_rule_files;
use crate::simulation::state::SimulationTrace;

/// Collects failed expectations about where an email ends up so all of them
/// can be reported at once by [`EmailRuleSimulation::finish`].
pub struct EmailRuleSimulation {
    trace: SimulationTrace,
    failures: Vec<String>,
}

impl EmailRuleSimulation {
    pub fn new(settings: &AccountSettings, email: &Email) -> Self {
        Self {
            trace: apply_rule_files(email, &settings.rule_files),
            failures: Vec::new(),
        }
    }

    pub fn trace(&self) -> &SimulationTrace {
        &self.trace
    }

    pub fn final_email_state(&self) -> &EmailState {
        &self.trace.final_state().email_state
    }

    pub fn assert_email_state(&mut self, condition: bool, failure: impl Into<String>) {
        if !condition {
            self.failures.push(failure.into());
        }
    }

    pub fn assert_is_moved_to(&mut self, folder: &str) {
        let current = self.final_email_state().current_folder.clone();
        self.assert_email_state(
            current == folder,
            format!("Email is in {current}, should be in {folder}"),
        );
    }

    pub fn assert_has_tag(&mut self, tag: &str) {
        let state = self.final_email_state();
        let condition = state.tags.contains(tag);
        let failure = format!("Email does not have tag {tag}, tags: {:?}", state.tags);
        self.assert_email_state(condition, failure);
    }

    pub fn assert_does_not_have_tag(&mut self, tag: &str) {
        let state = self.final_email_state();
        let condition = !state.tags.contains(tag);
        let failure = format!("Email has tag {tag}, tags: {:?}", state.tags);
        self.assert_email_state(condition, failure);
    }

    pub fn assert_is_read(&mut self) {
        let condition = self.final_email_state().is_read;
        self.assert_email_state(condition, "Email is unread");
    }

    pub fn assert_is_unread(&mut self) {
        let condition = !self.final_email_state().is_read;
        self.assert_email_state(condition, "Email is read");
    }

    /// `Ok` when every assertion held; otherwise all failures joined by `"; "`.
    pub fn finish(self) -> Result<()> {
        if self.failures.is_empty() {
            return Ok(());
        }
        tracing::warn!("simulation trace:\n{}", self.trace);
        Err(Error::Assertion(self.failures.join("; ")))
    }
}

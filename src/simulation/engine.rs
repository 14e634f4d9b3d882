//! Applies rules, rule lists and rule files to an email, recording every
//! intermediate state.
use crate::model::email::{Email, EmailState};
use crate::model::enums::InterruptState;
use crate::model::rule::{Rule, RuleFile};
use crate::simulation::state::{RuleApplicationState, RuleFileApplicationState, SimulationTrace};

/// Apply one rule. Emits a single "not applied" step when the filter does not
/// match; otherwise one step per attempted action plus a closing step.
pub fn apply_rule(rule: &Rule, email: &Email, email_state: EmailState) -> Vec<RuleApplicationState> {
    let current_rule = rule.to_string();
    let mut interrupt_state = InterruptState::Continue;

    if !rule.filter.evaluate(email) {
        tracing::debug!(rule = %current_rule, "rule did not apply");
        return vec![RuleApplicationState {
            email_state,
            interrupt_state,
            current_rule: Some(current_rule),
            current_rule_applied: false,
            current_action: None,
        }];
    }

    tracing::debug!(rule = %current_rule, "rule applies");
    let mut email_state = email_state;
    let mut steps = Vec::with_capacity(rule.actions.len() + 1);
    for action in &rule.actions {
        if interrupt_state != InterruptState::Continue {
            break;
        }
        if let Err(interrupt) = action.apply(&mut email_state) {
            tracing::debug!(%action, %interrupt, "rule interrupted");
            interrupt_state = interrupt.into();
        }
        steps.push(RuleApplicationState {
            email_state: email_state.clone(),
            interrupt_state,
            current_rule: Some(current_rule.clone()),
            current_rule_applied: true,
            current_action: Some(action.to_string()),
        });
    }

    steps.push(RuleApplicationState {
        email_state,
        interrupt_state,
        current_rule: Some(current_rule),
        current_rule_applied: true,
        current_action: None,
    });
    steps
}

/// Apply rules in order, starting from `start` (or the initial state). The
/// first returned step is the starting step itself. Stops as soon as a rule
/// leaves the interrupt state anything other than `Continue`.
pub fn apply_rules_iteratively(
    email: &Email,
    rules: &[Rule],
    start: Option<RuleApplicationState>,
) -> Vec<RuleApplicationState> {
    let mut history = vec![start.unwrap_or_else(RuleApplicationState::initial)];

    for rule in rules {
        let Some(current) = history.last() else {
            break;
        };
        if current.interrupt_state != InterruptState::Continue {
            tracing::debug!(interrupt = %current.interrupt_state, "skipping remaining rules");
            break;
        }
        let steps = apply_rule(rule, email, current.email_state.clone());
        history.extend(steps);
    }

    history
}

/// The state after applying `rules` to a fresh email state.
pub fn apply_rules_to_email(email: &Email, rules: &[Rule]) -> RuleApplicationState {
    apply_rules_iteratively(email, rules, None)
        .pop()
        .unwrap_or_else(RuleApplicationState::initial)
}

/// Apply each rule file in turn, carrying the email state across files.
///
/// `StopProcessingCurrentFile` only ends the file it was raised in;
/// `StopProcessingAllFiles` ends the whole run.
pub fn apply_rule_files(email: &Email, rule_files: &[RuleFile]) -> SimulationTrace {
    let bootstrap = RuleFileApplicationState::initial();
    let mut last = RuleApplicationState::initial();
    let mut files = vec![bootstrap];

    for rule_file in rule_files {
        tracing::info!(file = %rule_file.file_name, rules = rule_file.rules.len(), "applying rule file");
        // the carried start step was already emitted
        let history: Vec<RuleApplicationState> =
            apply_rules_iteratively(email, &rule_file.rules, Some(last.clone()))
                .into_iter()
                .skip(1)
                .collect();
        if let Some(step) = history.last() {
            last = step.clone();
        }
        files.push(RuleFileApplicationState {
            file_name: Some(rule_file.file_name.clone()),
            history,
        });

        if last.interrupt_state == InterruptState::StopProcessingAllFiles {
            tracing::info!(file = %rule_file.file_name, "stopping all rule files");
            break;
        }
        last = RuleApplicationState::resumed(last.email_state);
    }

    SimulationTrace { files }
}

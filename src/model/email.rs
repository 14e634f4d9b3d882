use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const INBOX: &str = "inbox";

/// The message a rule set is evaluated against. Never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
}

impl Email {
    pub fn new(
        from: impl Into<String>,
        to: impl IntoIterator<Item = impl Into<String>>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into_iter().map(Into::into).collect(),
            subject: subject.into(),
        }
    }
}

/// Simulated mailbox state of one email while rules are applied to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailState {
    /// Slash separated folder path.
    pub current_folder: String,
    pub tags: BTreeSet<String>,
    pub is_read: bool,
}

impl Default for EmailState {
    fn default() -> Self {
        Self {
            current_folder: INBOX.to_string(),
            tags: BTreeSet::new(),
            is_read: false,
        }
    }
}

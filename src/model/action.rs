//! Actions applied to the simulated [`EmailState`] when a rule matches.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::email::EmailState;
use crate::model::enums::InterruptState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    AddTag { tag: String },
    MoveToFolder { folder: String },
    MarkAsRead,
    StopProcessingCurrentFile,
    StopProcessingAllFiles,
}

/// Raised by the stop actions instead of producing a new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Interrupt {
    #[error("stop processing the current rule file")]
    StopProcessingCurrentFile,
    #[error("stop processing all rule files")]
    StopProcessingAllFiles,
}

impl From<Interrupt> for InterruptState {
    fn from(interrupt: Interrupt) -> Self {
        match interrupt {
            Interrupt::StopProcessingCurrentFile => Self::StopProcessingCurrentFile,
            Interrupt::StopProcessingAllFiles => Self::StopProcessingAllFiles,
        }
    }
}

impl Action {
    pub fn add_tag(tag: impl Into<String>) -> Self {
        Self::AddTag { tag: tag.into() }
    }

    pub fn move_to_folder(folder: impl Into<String>) -> Self {
        Self::MoveToFolder {
            folder: folder.into(),
        }
    }

    pub fn apply(&self, state: &mut EmailState) -> Result<(), Interrupt> {
        match self {
            Self::AddTag { tag } => {
                state.tags.insert(tag.clone());
            }
            Self::MoveToFolder { folder } => state.current_folder = folder.clone(),
            Self::MarkAsRead => state.is_read = true,
            Self::StopProcessingCurrentFile => return Err(Interrupt::StopProcessingCurrentFile),
            Self::StopProcessingAllFiles => return Err(Interrupt::StopProcessingAllFiles),
        }
        Ok(())
    }

    /// Whether later actions in the same rule can never run.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::StopProcessingCurrentFile | Self::StopProcessingAllFiles
        )
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddTag { tag } => write!(f, "ADD_TAG({tag})"),
            Self::MoveToFolder { folder } => write!(f, "MOVE_TO_FOLDER({folder})"),
            Self::MarkAsRead => f.write_str("MARK_AS_READ"),
            Self::StopProcessingCurrentFile => f.write_str("STOP_CURRENT_FILE"),
            Self::StopProcessingAllFiles => f.write_str("STOP_ALL_FILES"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_tag_is_idempotent() {
        let mut state = EmailState::default();
        let action = Action::add_tag("some_tag");
        action.apply(&mut state).unwrap();
        action.apply(&mut state).unwrap();
        assert_eq!(state.tags.len(), 1);
        assert!(state.tags.contains("some_tag"));
    }

    #[test]
    fn test_move_last_writer_wins() {
        let mut state = EmailState::default();
        assert_eq!(state.current_folder, "inbox");
        Action::move_to_folder("a").apply(&mut state).unwrap();
        Action::move_to_folder("b/c").apply(&mut state).unwrap();
        assert_eq!(state.current_folder, "b/c");
    }

    #[test]
    fn test_mark_as_read() {
        let mut state = EmailState::default();
        assert!(!state.is_read);
        Action::MarkAsRead.apply(&mut state).unwrap();
        assert!(state.is_read);
    }

    #[test]
    fn test_stop_actions_interrupt_without_touching_state() {
        let mut state = EmailState::default();
        assert_eq!(
            Action::StopProcessingCurrentFile.apply(&mut state),
            Err(Interrupt::StopProcessingCurrentFile)
        );
        assert_eq!(
            Action::StopProcessingAllFiles.apply(&mut state),
            Err(Interrupt::StopProcessingAllFiles)
        );
        assert_eq!(state, EmailState::default());
        assert!(Action::StopProcessingAllFiles.is_terminal());
        assert!(!Action::MarkAsRead.is_terminal());
    }

    #[test]
    fn test_deserialize() {
        let actions: Vec<Action> = serde_json::from_str(
            r#"[{"type": "add_tag", "tag": "x"}, {"type": "mark_as_read"}, {"type": "stop_processing_current_file"}]"#,
        )
        .unwrap();
        assert_eq!(
            actions,
            vec![
                Action::add_tag("x"),
                Action::MarkAsRead,
                Action::StopProcessingCurrentFile
            ]
        );
    }
}

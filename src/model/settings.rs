//! Account settings: the folder and tag inventory plus the rule files that
//! reference them.
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::action::Action;
use crate::model::rule::{Rule, RuleFile};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSettings {
    #[serde(default)]
    pub folders: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub rule_files: Vec<RuleFile>,
}

fn parent_folder(folder: &str) -> Option<&str> {
    folder
        .trim_end_matches('/')
        .rsplit_once('/')
        .map(|(parent, _)| parent)
        .filter(|parent| !parent.is_empty())
}

impl AccountSettings {
    /// Check folder nesting and every rule's actions. All problems are
    /// reported together.
    pub fn validate(&self) -> Result<()> {
        let mut errors = self.missing_parent_folders();
        for rule_file in &self.rule_files {
            for rule in &rule_file.rules {
                errors.extend(self.validate_rule(rule));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(count = errors.len(), "settings validation failed");
            Err(Error::Validation(errors))
        }
    }

    fn missing_parent_folders(&self) -> Vec<String> {
        let mut missing: Vec<&str> = Vec::new();
        for folder in &self.folders {
            if let Some(parent) = parent_folder(folder) {
                if !self.folders.iter().any(|f| f == parent) && !missing.contains(&parent) {
                    missing.push(parent);
                }
            }
        }
        missing
            .into_iter()
            .map(|parent| format!("Missing parent folder {parent}"))
            .collect()
    }

    fn validate_rule(&self, rule: &Rule) -> Vec<String> {
        let mut errors = Vec::new();
        let mut unreachable = false;
        for action in &rule.actions {
            if let Some(error) = self.validate_action(action) {
                errors.push(error);
            }
            if unreachable {
                errors.push(format!("Unreachable action {action}"));
            }
            if action.is_terminal() {
                unreachable = true;
            }
        }
        errors
            .into_iter()
            .map(|error| format!("{rule}: {error}"))
            .collect()
    }

    fn validate_action(&self, action: &Action) -> Option<String> {
        match action {
            Action::AddTag { tag } if !self.tags.contains(tag) => {
                Some(format!("Tag not found {tag}"))
            }
            Action::MoveToFolder { folder } if !self.folders.contains(folder) => {
                Some(format!("Folder not found {folder}"))
            }
            Action::AddTag { .. }
            | Action::MoveToFolder { .. }
            | Action::MarkAsRead
            | Action::StopProcessingCurrentFile
            | Action::StopProcessingAllFiles => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::filter::Filter;

    fn settings(rules: Vec<Rule>) -> AccountSettings {
        AccountSettings {
            folders: vec!["parent_1".into(), "parent_1/child_1".into()],
            tags: vec!["TAG_1".into(), "TAG_2".into()],
            rule_files: vec![RuleFile::new("rule_file_1", rules)],
        }
    }

    fn validation_errors(settings: &AccountSettings) -> Vec<String> {
        match settings.validate() {
            Err(Error::Validation(errors)) => errors,
            other => panic!("expected validation errors, got {other:?}"),
        }
    }

    #[test]
    fn test_parent_folder() {
        assert_eq!(parent_folder("a/b/c"), Some("a/b"));
        assert_eq!(parent_folder("a/b/"), Some("a"));
        assert_eq!(parent_folder("a"), None);
        assert_eq!(parent_folder("/a"), None);
    }

    #[test]
    fn test_folder_nesting_ok() {
        for folders in [
            vec![],
            vec!["parent_1"],
            vec!["parent_1", "parent_1/child_1"],
            vec!["parent_1/child_1", "parent_1"],
        ] {
            let settings = AccountSettings {
                folders: folders.into_iter().map(String::from).collect(),
                ..Default::default()
            };
            assert!(settings.validate().is_ok());
        }
    }

    #[test]
    fn test_missing_parent_folder() {
        let settings = AccountSettings {
            folders: vec!["parent_1/child_1".into(), "parent_1/child_2".into()],
            ..Default::default()
        };
        assert_eq!(
            validation_errors(&settings),
            vec!["Missing parent folder parent_1".to_string()]
        );
    }

    #[test]
    fn test_valid_rules() {
        let cases = [
            vec![],
            vec![Rule::new(Filter::True, vec![])],
            vec![Rule::new(Filter::True, vec![Action::add_tag("TAG_1")])],
            vec![Rule::new(Filter::True, vec![Action::move_to_folder("parent_1")])],
            vec![Rule::new(Filter::True, vec![Action::StopProcessingCurrentFile])],
            vec![Rule::new(Filter::True, vec![Action::StopProcessingAllFiles])],
            vec![Rule::new(Filter::True, vec![Action::MarkAsRead])],
        ];
        for rules in cases {
            assert!(settings(rules).validate().is_ok());
        }
    }

    #[test]
    fn test_unknown_tag_and_folder() {
        let errors = validation_errors(&settings(vec![Rule::new(
            Filter::True,
            vec![
                Action::add_tag("I-do-not-exist"),
                Action::move_to_folder("does_not_exist"),
            ],
        )]));
        assert_eq!(errors.len(), 2);
        assert!(errors[0].ends_with("Tag not found I-do-not-exist"));
        assert!(errors[1].ends_with("Folder not found does_not_exist"));
    }

    #[test]
    fn test_action_after_stop_is_unreachable() {
        for stop in [
            Action::StopProcessingCurrentFile,
            Action::StopProcessingAllFiles,
        ] {
            let errors = validation_errors(&settings(vec![Rule::new(
                Filter::True,
                vec![stop, Action::add_tag("TAG_1")],
            )]));
            assert_eq!(errors.len(), 1);
            assert!(errors[0].contains("Unreachable action ADD_TAG(TAG_1)"));
        }
    }

    #[test]
    fn test_errors_are_aggregated() {
        let mut settings = settings(vec![
            Rule::new(Filter::True, vec![Action::add_tag("nope")]),
            Rule::new(
                Filter::False,
                vec![Action::StopProcessingAllFiles, Action::MarkAsRead],
            ),
        ]);
        settings.folders.push("orphan/child".into());
        let errors = validation_errors(&settings);
        assert_eq!(errors.len(), 3);
        assert!(Error::Validation(errors).to_string().contains("Tag not found nope"));
    }
}

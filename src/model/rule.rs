use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::action::Action;
use crate::model::filter::Filter;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub filter: Filter,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Rule {
    pub fn new(filter: Filter, actions: Vec<Action>) -> Self {
        Self {
            filter,
            actions,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let actions = self
            .actions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "<{} filter_expr={}, actions=[{actions}]>",
            self.comment.as_deref().unwrap_or("rule"),
            self.filter
        )
    }
}

/// Named group of rules; one generated SIEVE script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleFile {
    pub file_name: String,
    pub rules: Vec<Rule>,
}

impl RuleFile {
    pub fn new(file_name: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            file_name: file_name.into(),
            rules,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let rule = Rule::new(
            Filter::True,
            vec![Action::add_tag("a"), Action::StopProcessingAllFiles],
        )
        .with_comment("rule_0");
        assert_eq!(
            rule.to_string(),
            "<rule_0 filter_expr=TRUE, actions=[ADD_TAG(a), STOP_ALL_FILES]>"
        );
        assert_eq!(
            Rule::new(Filter::False, vec![]).to_string(),
            "<rule filter_expr=FALSE, actions=[]>"
        );
    }
}

/// Text templates for every kind of SIEVE fragment the renderer produces.
///
/// Each variant carries the arguments of one template; nested fragments are
/// passed in already rendered.
use crate::error::{Error, Result};
use crate::model::enums::{Comparison, LogicOperator};
use crate::sieve::enums::SieveSection;

const INDENT: &str = "    ";

#[derive(Debug, Clone, Copy)]
pub enum Template<'a> {
    ActionTag {
        tag_name: &'a str,
    },
    ActionMoveToFolder {
        folder: &'a str,
    },
    FilterGeneric {
        text: &'a str,
        case_sensitive: bool,
        operation: Comparison,
        section: SieveSection,
    },
    FilterCombineAndOr {
        operation: LogicOperator,
        exprs: &'a [String],
    },
    FilterCombineNot {
        expr: &'a str,
    },
    EmailRule {
        comment: Option<&'a str>,
        condition: &'a str,
        actions: &'a [String],
    },
    RulesFile {
        extensions: Option<&'a str>,
        rendered_rules: &'a [String],
    },
}

impl Template<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ActionTag { .. } => "action_tag",
            Self::ActionMoveToFolder { .. } => "action_move_to_folder",
            Self::FilterGeneric { .. } => "filter_generic",
            Self::FilterCombineAndOr { .. } => "filter_combine_and_or",
            Self::FilterCombineNot { .. } => "filter_combine_not",
            Self::EmailRule { .. } => "email_rule",
            Self::RulesFile { .. } => "rules_file",
        }
    }

    pub fn render(&self) -> Result<String> {
        let out = match *self {
            Self::ActionTag { tag_name } => format!("fileinto {};", quote(tag_name)),
            Self::ActionMoveToFolder { folder } => format!("fileinto {};", quote(folder)),
            Self::FilterGeneric {
                text,
                case_sensitive,
                operation,
                section,
            } => {
                let (name, part) = section.name_and_part();
                let comparator = if case_sensitive {
                    " :comparator \"i;octet\""
                } else {
                    ""
                };
                format!(
                    "{name} :{operation}{comparator} {} {}",
                    quote(part.as_sieve()),
                    quote(text)
                )
            }
            Self::FilterCombineAndOr { operation, exprs } => {
                if exprs.len() < 2 {
                    return Err(Error::Arity {
                        operator: operation,
                        count: exprs.len(),
                    });
                }
                format!("{operation} ({})", exprs.join(", "))
            }
            Self::FilterCombineNot { expr } => format!("not {expr}"),
            Self::EmailRule {
                comment,
                condition,
                actions,
            } => {
                let mut out = String::new();
                if let Some(comment) = comment {
                    for line in comment.lines() {
                        out.push_str(&format!("# {line}\n"));
                    }
                }
                out.push_str(&format!("if {condition} {{\n"));
                for action in actions {
                    out.push_str(INDENT);
                    out.push_str(action);
                    out.push('\n');
                }
                out.push('}');
                out
            }
            Self::RulesFile {
                extensions,
                rendered_rules,
            } => {
                let blocks: Vec<&str> = extensions
                    .into_iter()
                    .chain(rendered_rules.iter().map(String::as_str))
                    .collect();
                if blocks.is_empty() {
                    String::new()
                } else {
                    format!("{}\n", blocks.join("\n\n"))
                }
            }
        };
        tracing::trace!(template = self.name(), "rendered template");
        Ok(out)
    }
}

fn escape_sieve_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

fn quote(s: &str) -> String {
    format!("\"{}\"", escape_sieve_string(s))
}

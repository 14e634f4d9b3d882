//! Boolean filter expressions over an [`Email`].
//!
//! Trees are built with the named builders ([`Filter::and`], [`Filter::or`],
//! [`Filter::negate`], [`Filter::all_of`], [`Filter::any_of`]) and are plain
//! values: a builder consumes its input and returns a new tree.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::model::email::Email;
use crate::model::enums::{Comparison, EmailField, LogicOperator};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Filter {
    True,
    False,
    Text(TextFilter),
    Not { filter: Box<Filter> },
    Combination(Combination),
}

/// Leaf predicate comparing one email field against a literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFilter {
    pub field: EmailField,
    pub comparison: Comparison,
    pub text: String,
    #[serde(default)]
    pub case_sensitive: bool,
}

/// n-ary AND/OR. Always holds at least two arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCombination")]
pub struct Combination {
    operator: LogicOperator,
    args: Vec<Filter>,
}

#[derive(Deserialize)]
struct RawCombination {
    operator: LogicOperator,
    args: Vec<Filter>,
}

impl TryFrom<RawCombination> for Combination {
    type Error = Error;

    fn try_from(raw: RawCombination) -> Result<Self> {
        Combination::new(raw.operator, raw.args)
    }
}

impl Combination {
    pub fn new(operator: LogicOperator, args: Vec<Filter>) -> Result<Self> {
        if args.len() < 2 {
            return Err(Error::Arity {
                operator,
                count: args.len(),
            });
        }
        Ok(Self { operator, args })
    }

    pub fn operator(&self) -> LogicOperator {
        self.operator
    }

    pub fn args(&self) -> &[Filter] {
        &self.args
    }

    pub fn evaluate(&self, email: &Email) -> bool {
        match self.operator {
            LogicOperator::AllOf => self.args.iter().all(|arg| arg.evaluate(email)),
            LogicOperator::AnyOf => self.args.iter().any(|arg| arg.evaluate(email)),
        }
    }
}

impl TextFilter {
    pub fn evaluate(&self, email: &Email) -> bool {
        match self.field {
            EmailField::From => self.matches(&email.from),
            EmailField::Subject => self.matches(&email.subject),
            EmailField::To => email.to.iter().any(|to| self.matches(to)),
        }
    }

    fn matches(&self, value: &str) -> bool {
        if self.case_sensitive {
            compare(self.comparison, value, &self.text)
        } else {
            compare(
                self.comparison,
                &value.to_lowercase(),
                &self.text.to_lowercase(),
            )
        }
    }
}

fn compare(comparison: Comparison, value: &str, text: &str) -> bool {
    match comparison {
        Comparison::Is => value == text,
        Comparison::Contains => value.contains(text),
    }
}

impl Filter {
    pub fn text(
        field: EmailField,
        comparison: Comparison,
        text: impl Into<String>,
        case_sensitive: bool,
    ) -> Self {
        Self::Text(TextFilter {
            field,
            comparison,
            text: text.into(),
            case_sensitive,
        })
    }

    pub fn from_is(text: impl Into<String>, case_sensitive: bool) -> Self {
        Self::text(EmailField::From, Comparison::Is, text, case_sensitive)
    }

    pub fn from_contains(text: impl Into<String>, case_sensitive: bool) -> Self {
        Self::text(EmailField::From, Comparison::Contains, text, case_sensitive)
    }

    pub fn subject_is(text: impl Into<String>, case_sensitive: bool) -> Self {
        Self::text(EmailField::Subject, Comparison::Is, text, case_sensitive)
    }

    pub fn subject_contains(text: impl Into<String>, case_sensitive: bool) -> Self {
        Self::text(EmailField::Subject, Comparison::Contains, text, case_sensitive)
    }

    /// Matches when any recipient equals `text`.
    pub fn to_is(text: impl Into<String>, case_sensitive: bool) -> Self {
        Self::text(EmailField::To, Comparison::Is, text, case_sensitive)
    }

    /// Matches when any recipient contains `text`.
    pub fn to_contains(text: impl Into<String>, case_sensitive: bool) -> Self {
        Self::text(EmailField::To, Comparison::Contains, text, case_sensitive)
    }

    pub fn all_of(args: impl IntoIterator<Item = Filter>) -> Result<Self> {
        Combination::new(LogicOperator::AllOf, args.into_iter().collect()).map(Self::Combination)
    }

    pub fn any_of(args: impl IntoIterator<Item = Filter>) -> Result<Self> {
        Combination::new(LogicOperator::AnyOf, args.into_iter().collect()).map(Self::Combination)
    }

    /// `self AND other`. Appends to `self` when it already is an AND.
    pub fn and(self, other: Filter) -> Self {
        self.combine(LogicOperator::AllOf, other)
    }

    /// `self OR other`. Appends to `self` when it already is an OR.
    pub fn or(self, other: Filter) -> Self {
        self.combine(LogicOperator::AnyOf, other)
    }

    pub fn negate(self) -> Self {
        Self::Not {
            filter: Box::new(self),
        }
    }

    fn combine(self, operator: LogicOperator, other: Filter) -> Self {
        match self {
            Self::Combination(mut combination) if combination.operator == operator => {
                combination.args.push(other);
                Self::Combination(combination)
            }
            lhs => Self::Combination(Combination {
                operator,
                args: vec![lhs, other],
            }),
        }
    }

    pub fn evaluate(&self, email: &Email) -> bool {
        match self {
            Self::True => true,
            Self::False => false,
            Self::Text(text) => text.evaluate(email),
            Self::Not { filter } => !filter.evaluate(email),
            Self::Combination(combination) => combination.evaluate(email),
        }
    }
}

impl fmt::Display for TextFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.field, self.comparison, self.text)?;
        if self.case_sensitive {
            f.write_str(" (case-sensitive)")?;
        }
        Ok(())
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => f.write_str("TRUE"),
            Self::False => f.write_str("FALSE"),
            Self::Text(text) => write!(f, "{text}"),
            Self::Not { filter } => write!(f, "~{filter}"),
            Self::Combination(combination) => {
                f.write_str("(")?;
                for (i, arg) in combination.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", combination.operator.symbol())?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}

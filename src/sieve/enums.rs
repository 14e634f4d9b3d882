use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::enums::EmailField;

/// Optional SIEVE capabilities that have to be declared with `require`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SieveExtension {
    Fileinto,
    Include,
    Environment,
    Variables,
    Relational,
    Spamtest,
    ComparatorAsciiNumeric,
    Imap4flags,
}

impl SieveExtension {
    pub fn as_sieve(&self) -> &'static str {
        match self {
            Self::Fileinto => "fileinto",
            Self::Include => "include",
            Self::Environment => "environment",
            Self::Variables => "variables",
            Self::Relational => "relational",
            Self::Spamtest => "spamtest",
            Self::ComparatorAsciiNumeric => "comparator-i;ascii-numeric",
            Self::Imap4flags => "imap4flags",
        }
    }
}

impl fmt::Display for SieveExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sieve())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SieveSectionName {
    Address,
    Header,
}

impl SieveSectionName {
    pub fn as_sieve(&self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Header => "header",
        }
    }
}

impl fmt::Display for SieveSectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sieve())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SieveSectionPart {
    From,
    Subject,
    To,
}

impl SieveSectionPart {
    pub fn as_sieve(&self) -> &'static str {
        match self {
            Self::From => "from",
            Self::Subject => "subject",
            Self::To => "to",
        }
    }
}

impl fmt::Display for SieveSectionPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sieve())
    }
}

/// Where in a SIEVE script an email field is tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SieveSection {
    AddressFrom,
    AddressTo,
    HeaderSubject,
}

impl SieveSection {
    pub fn name_and_part(&self) -> (SieveSectionName, SieveSectionPart) {
        match self {
            Self::AddressFrom => (SieveSectionName::Address, SieveSectionPart::From),
            Self::AddressTo => (SieveSectionName::Address, SieveSectionPart::To),
            Self::HeaderSubject => (SieveSectionName::Header, SieveSectionPart::Subject),
        }
    }
}

impl From<EmailField> for SieveSection {
    fn from(field: EmailField) -> Self {
        match field {
            EmailField::From => Self::AddressFrom,
            EmailField::To => Self::AddressTo,
            EmailField::Subject => Self::HeaderSubject,
        }
    }
}

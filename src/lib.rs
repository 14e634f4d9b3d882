//! Email filter rules as code.
//!
//! Rules are a boolean filter tree bound to an ordered list of actions. The
//! same rules can be run against a simulated email ([`simulation`]) or
//! compiled to a SIEVE script ([`sieve`]).

pub mod config;
pub mod error;
pub mod model;
pub mod sieve;
pub mod simulation;
pub mod store;

pub use error::{Error, Result};

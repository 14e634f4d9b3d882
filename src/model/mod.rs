pub mod action;
pub mod email;
pub mod enums;
pub mod filter;
pub mod rule;
pub mod settings;

pub use action::{Action, Interrupt};
pub use email::{Email, EmailState, INBOX};
pub use enums::{Comparison, EmailField, InterruptState, LogicOperator};
pub use filter::{Combination, Filter, TextFilter};
pub use rule::{Rule, RuleFile};
pub use settings::AccountSettings;

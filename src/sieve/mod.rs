//! SIEVE output: templates for each fragment and the renderer that walks
//! filters and actions through them.
pub mod enums;
pub mod renderer;
pub mod templates;

pub use enums::{SieveExtension, SieveSection, SieveSectionName, SieveSectionPart};
pub use renderer::{
    render_action, render_extensions, render_filter, render_rule, render_rule_file_to,
    render_rules_file, required_extensions,
};
pub use templates::Template;

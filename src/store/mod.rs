pub mod script_io;
pub mod settings_store;

pub use settings_store::{load_email, load_settings, save_settings};

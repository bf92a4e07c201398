mod config;
mod key_bindings;

pub use config::get_config_manager;
pub use key_bindings::KeyBindings;

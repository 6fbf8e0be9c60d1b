//! Config module.
//! Provides configuration types, default paths, XML loading, and root
//! validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use validate::validate_roots;
pub use xml::{
    create_template_config, ensure_default_config_exists, load_config_from_xml,
    load_config_from_xml_path,
};

/// Defaults shared across submodules.
pub const THRESHOLD_DEFAULT: u8 = 99;
pub const FOUND_DIR_DEFAULT: &str = "found";
pub const NOT_FOUND_DIR_DEFAULT: &str = "not-found";

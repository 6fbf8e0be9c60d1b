//! XML configuration support.
//! - Loads settings from config.xml (quick_xml).
//! - Creates a template if missing (unless FUZZY_SORT_CONFIG is set).
//!
//! Notes:
//! - This module only reads/writes the config file; root validation happens
//!   elsewhere.
//! - Unknown XML fields cause a hard failure (panic) to surface
//!   misconfigurations early.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel};
use super::{FOUND_DIR_DEFAULT, NOT_FOUND_DIR_DEFAULT, THRESHOLD_DEFAULT};

pub const CONFIG_ENV: &str = "FUZZY_SORT_CONFIG";

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "threshold", default, deserialize_with = "de_u8_trimmed_opt")]
    threshold: Option<u8>,
    #[serde(rename = "found_dir")]
    found_dir: Option<String>,
    #[serde(rename = "not_found_dir")]
    not_found_dir: Option<String>,
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
}

// Custom deserializer that trims surrounding whitespace for optional u8
fn de_u8_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| s.trim().parse::<u8>().ok()).filter(|t| *t <= 100))
}

/// Read config from XML. OS-aware default path used if FUZZY_SORT_CONFIG not
/// set. Returns None if the file doesn't exist or doesn't parse.
pub fn load_config_from_xml() -> Option<Config> {
    let env_set = env::var_os(CONFIG_ENV).is_some();
    let cfg_path = config_path_in_effect().ok()?;

    // If missing: create a template (only when using the default path), then
    // report "no config".
    if !cfg_path.exists() {
        if !env_set {
            let _ = create_template_config(&cfg_path);
        }
        return None;
    }

    match load_config_from_xml_path(&cfg_path) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            debug!(
                "Failed to load config.xml at {}: {}",
                cfg_path.display(),
                e
            );
            None
        }
    }
}

/// Load a Config from a specific XML file path (quick_xml).
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = match from_xml_str(&contents) {
        Ok(x) => x,
        Err(e) => {
            // Fail hard on unknown fields (serde deny_unknown_fields) so typos
            // in the config surface immediately.
            let msg = e.to_string();
            if msg.contains("unknown field") {
                panic!(
                    "Unknown field in fuzzy_sort config {}: {}. Refusing to start.",
                    path.display(),
                    msg
                );
            }
            return Err(e).with_context(|| format!("parse config xml '{}'", path.display()));
        }
    };
    Ok(xml_to_config(parsed))
}

/// The config path in effect: FUZZY_SORT_CONFIG if set, else the platform
/// default.
pub fn config_path_in_effect() -> Result<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(p));
    }
    default_config_path()
}

// Map XmlConfig -> Config
fn xml_to_config(parsed: XmlConfig) -> Config {
    let mut cfg = Config::default();

    if let Some(t) = parsed.threshold {
        cfg.threshold = t;
    }
    if let Some(s) = parsed.found_dir.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.found_dir = trimmed.to_string();
        }
    }
    if let Some(s) = parsed.not_found_dir.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.not_found_dir = trimmed.to_string();
        }
    }
    if let Some(s) = parsed.log_level.as_deref() {
        if let Ok(level) = s.trim().parse::<LogLevel>() {
            cfg.log_level = level;
        }
    }
    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }

    cfg
}

/// Create default template config file and parent directory (best-effort
/// permissions). Refuses to write through symlinked ancestors.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        return Err(anyhow::anyhow!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        ));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let _ = fs::set_permissions(parent, fs::Permissions::from_mode(0o700));
        }
    }

    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "/path/to/fuzzy_sort.log".into());

    let content = format!(
        "<!--\n  fuzzy_sort configuration (XML)\n\n  Fields:\n    threshold      -> minimum similarity score (0-100) for a match\n    found_dir      -> subtree name for matched files (created under the source root)\n    not_found_dir  -> subtree name for unmatched files\n    log_level      -> quiet | normal | info | debug\n    log_file       -> path to log file (optional; stdout/stderr still used)\n\n  Notes:\n    - CLI flags override XML values.\n-->\n<config>\n  <threshold>{}</threshold>\n  <found_dir>{}</found_dir>\n  <not_found_dir>{}</not_found_dir>\n  <log_level>normal</log_level>\n  <log_file>{}</log_file>\n</config>\n",
        THRESHOLD_DEFAULT, FOUND_DIR_DEFAULT, NOT_FOUND_DIR_DEFAULT, suggested_log
    );

    fs::write(path, content)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }

    info!("Created template config at {}", path.display());
    Ok(())
}

/// Create default config if FUZZY_SORT_CONFIG not set; return the created
/// path so the CLI can inform the user.
pub fn ensure_default_config_exists() -> Option<PathBuf> {
    if env::var_os(CONFIG_ENV).is_some() {
        return None;
    }

    let cfg_path = default_config_path().ok()?;
    if cfg_path.exists() {
        return None;
    }

    match create_template_config(&cfg_path) {
        Ok(()) => Some(cfg_path),
        Err(e) => {
            eprintln!(
                "Failed to create template config at {}: {}",
                cfg_path.display(),
                e
            );
            None
        }
    }
}

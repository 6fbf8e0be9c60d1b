//! FUZZY_SORT_CONFIG points config loading at an explicit file.

use serial_test::serial;
use std::fs;
use tempfile::tempdir;

use fuzzy_sort::config::xml::{config_path_in_effect, load_config_from_xml, CONFIG_ENV};

#[test]
#[serial]
fn env_override_is_used_for_config_path_and_values() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("config.xml");
    fs::write(&cfg, "<config>\n  <threshold>75</threshold>\n</config>\n").unwrap();

    // Set env for this process; serialize to avoid cross-test interference
    unsafe {
        std::env::set_var(CONFIG_ENV, &cfg);
    }

    let resolved = config_path_in_effect().expect("config_path_in_effect");
    assert_eq!(resolved, cfg, "env path should win over the default");

    let loaded = load_config_from_xml().expect("config should load from env path");
    assert_eq!(loaded.threshold, 75);

    unsafe {
        std::env::remove_var(CONFIG_ENV);
    }
}

#[test]
#[serial]
fn env_override_missing_file_yields_no_config_and_no_template() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("absent.xml");

    unsafe {
        std::env::set_var(CONFIG_ENV, &cfg);
    }

    assert!(load_config_from_xml().is_none());
    assert!(
        !cfg.exists(),
        "no template should be created for an explicit path"
    );

    unsafe {
        std::env::remove_var(CONFIG_ENV);
    }
}

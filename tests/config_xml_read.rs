//! Verify XML config is parsed and used without touching user state.

use std::fs;
use tempfile::tempdir;

use fuzzy_sort::{load_config_from_xml_path, LogLevel};

#[test]
fn reads_config_xml_and_applies_values() {
    let td = tempdir().expect("create tempdir");

    let cfg_path = td.path().join("config.xml");
    let log_file = td.path().join("fuzzy_sort.log");

    let xml = format!(
        r#"
<config>
  <threshold>85</threshold>
  <found_dir>sorted</found_dir>
  <not_found_dir>leftover</not_found_dir>
  <log_level>info</log_level>
  <log_file>{}</log_file>
</config>
"#,
        log_file.display()
    );
    fs::write(&cfg_path, xml).expect("write config.xml");

    let cfg = load_config_from_xml_path(&cfg_path).expect("load_config_from_xml_path");

    assert_eq!(cfg.threshold, 85, "threshold mismatch");
    assert_eq!(cfg.found_dir, "sorted", "found_dir mismatch");
    assert_eq!(cfg.not_found_dir, "leftover", "not_found_dir mismatch");
    assert_eq!(cfg.log_level, LogLevel::Info, "log_level mismatch");
    assert_eq!(
        cfg.log_file.as_deref(),
        Some(log_file.as_path()),
        "log_file mismatch"
    );
}

#[test]
fn whitespace_around_values_is_trimmed() {
    let td = tempdir().expect("create tempdir");
    let cfg_path = td.path().join("config.xml");
    let xml = r#"
<config>
  <threshold>  90  </threshold>
  <found_dir>  kept </found_dir>
  <log_level> debug </log_level>
</config>
"#;
    fs::write(&cfg_path, xml).expect("write config.xml");

    let cfg = load_config_from_xml_path(&cfg_path).expect("load");
    assert_eq!(cfg.threshold, 90);
    assert_eq!(cfg.found_dir, "kept");
    assert_eq!(cfg.log_level, LogLevel::Debug);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let td = tempdir().expect("create tempdir");
    let cfg_path = td.path().join("config.xml");
    fs::write(&cfg_path, "<config>\n  <log_level>quiet</log_level>\n</config>\n").unwrap();

    let cfg = load_config_from_xml_path(&cfg_path).expect("load");
    assert_eq!(cfg.threshold, 99);
    assert_eq!(cfg.found_dir, "found");
    assert_eq!(cfg.not_found_dir, "not-found");
    assert_eq!(cfg.log_level, LogLevel::Quiet);
}

#[test]
fn out_of_range_threshold_is_ignored() {
    let td = tempdir().expect("create tempdir");
    let cfg_path = td.path().join("config.xml");
    fs::write(&cfg_path, "<config>\n  <threshold>150</threshold>\n</config>\n").unwrap();

    let cfg = load_config_from_xml_path(&cfg_path).expect("load");
    assert_eq!(cfg.threshold, 99, "invalid threshold should keep default");
}

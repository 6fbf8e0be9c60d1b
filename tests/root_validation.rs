use fuzzy_sort::validate_roots;
use std::fs;
use tempfile::tempdir;

#[test]
fn distinct_readable_directories_validate() {
    let td = tempdir().unwrap();
    let src = td.path().join("src");
    let tgt = td.path().join("tgt");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&tgt).unwrap();
    validate_roots(&src, &tgt).expect("distinct dirs should validate");
}

#[test]
fn missing_source_is_rejected() {
    let td = tempdir().unwrap();
    let tgt = td.path().join("tgt");
    fs::create_dir_all(&tgt).unwrap();
    let err = validate_roots(&td.path().join("absent"), &tgt).unwrap_err();
    assert!(format!("{err}").contains("source root does not exist"));
}

#[test]
fn file_as_target_is_rejected() {
    let td = tempdir().unwrap();
    let src = td.path().join("src");
    fs::create_dir_all(&src).unwrap();
    let f = td.path().join("plain.txt");
    fs::write(&f, b"x").unwrap();
    let err = validate_roots(&src, &f).unwrap_err();
    assert!(format!("{err}").contains("target root is not a directory"));
}

#[test]
fn identical_roots_are_rejected() {
    let td = tempdir().unwrap();
    let src = td.path().join("both");
    fs::create_dir_all(&src).unwrap();
    let err = validate_roots(&src, &src).unwrap_err();
    assert!(format!("{err}").contains("same path"));
}

#[cfg(unix)]
#[test]
fn symlink_alias_of_source_is_rejected() {
    use std::os::unix::fs::symlink;
    let td = tempdir().unwrap();
    let src = td.path().join("src");
    fs::create_dir_all(&src).unwrap();
    let alias = td.path().join("alias");
    symlink(&src, &alias).unwrap();
    let err = validate_roots(&src, &alias).unwrap_err();
    assert!(format!("{err}").contains("same path"));
}

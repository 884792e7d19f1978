// tests/config_test.rs
use git_bump::config::{load_config, Config, CONFIG_FILE_NAME};
use git_bump::domain::{BumpKind, MalformedTagPolicy};
use serial_test::serial;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.remote, "origin");
    assert_eq!(config.bump, BumpKind::Patch);
    assert!(config.push);
    assert_eq!(config.malformed_tag_policy(), MalformedTagPolicy::Skip);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
remote = "fork"
bump = "major"
push = false
tag_filter = '^v'
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.remote, "fork");
    assert_eq!(config.bump, BumpKind::Major);
    assert!(!config.push);
    assert!(!config.strict);
    assert_eq!(config.tag_filter.as_deref(), Some("^v"));
}

#[test]
#[serial]
fn test_load_fixture() {
    let config = load_config(Some("tests/fixtures/strict_minor.toml"))
        .expect("Failed to load test config");
    assert_eq!(config.remote, "upstream");
    assert_eq!(config.bump, BumpKind::Minor);
    assert!(config.push);
    assert_eq!(config.malformed_tag_policy(), MalformedTagPolicy::Strict);
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"push = \"sometimes\"").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Invalid configuration file"));
}

#[test]
#[serial]
fn test_load_from_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "bump = \"minor\"\n").unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let config = load_config(None);
    std::env::set_current_dir(original).unwrap();

    assert_eq!(config.unwrap().bump, BumpKind::Minor);
}

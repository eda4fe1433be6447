use claims::{assert_err, assert_ok};
use std::io::Write;
use tempfile::NamedTempFile;
use ui::config::{ConfigLoadResult, ConfigValidationError, load_config_from};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn test_full_file_is_loaded() {
    let file = write_config(
        r#"
tick_interval_millis = 100

[selection]
theme = "island"
locale = "zh-CN"

[keys]
key_quit = "Q"
key_theme = "m"

[logging]
level = "debug"
file = "wedding.log"

[admin]
email = "host@unitythreads.example"
password = "marigold"
"#,
    );

    let loaded = load_config_from(Some(file.path()));
    let config = assert_ok!(loaded.as_result());

    assert_eq!(config.selection().theme(), Some("island"));
    assert_eq!(config.selection().locale(), Some("zh-CN"));
    assert_eq!(config.keys().quit(), 'Q');
    assert_eq!(config.keys().theme(), 'm');
    assert_eq!(config.keys().help(), 'h');
    assert_eq!(config.logging().level(), "debug");
    assert_eq!(config.logging().file(), Some("wedding.log"));
    assert_eq!(
        config.admin().credentials(),
        Some(("host@unitythreads.example", "marigold"))
    );
    assert_eq!(config.tick_interval().as_millis(), 100);
    assert_ok!(config.validate());
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("");

    let loaded = load_config_from(Some(file.path()));
    let config = assert_ok!(loaded.as_result());

    assert_eq!(config.selection().theme(), None);
    assert_eq!(config.logging().level(), "info");
    assert!(config.admin().credentials().is_none());
    assert_ok!(config.validate());
}

#[test]
fn test_missing_explicit_file_is_a_load_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("absent.toml");

    let loaded = load_config_from(Some(&path));
    assert!(matches!(loaded, ConfigLoadResult::LoadError(_)));
}

#[test]
fn test_wrong_type_is_a_deserialize_error() {
    let file = write_config("tick_interval_millis = \"fast\"\n");

    let loaded = load_config_from(Some(file.path()));
    assert!(matches!(loaded, ConfigLoadResult::DeserializeError(_)));
}

#[test]
fn test_conflicting_keys_fail_validation() {
    let file = write_config(
        r#"
[keys]
key_theme = "q"
"#,
    );

    let loaded = load_config_from(Some(file.path()));
    let config = assert_ok!(loaded.as_result());
    let errors = assert_err!(config.validate());

    assert_eq!(
        errors,
        vec![ConfigValidationError::DuplicateKeyBinding {
            key: 'q',
            first: "key_quit",
            second: "key_theme",
        }]
    );
    assert!(errors[0].user_message().contains("[keys]"));
}

#[test]
fn test_half_configured_admin_fails_validation() {
    let file = write_config(
        r#"
[admin]
email = "host@unitythreads.example"
"#,
    );

    let loaded = load_config_from(Some(file.path()));
    let config = assert_ok!(loaded.as_result());
    let errors = assert_err!(config.validate());

    assert_eq!(
        errors,
        vec![ConfigValidationError::IncompleteAdminCredentials {
            missing: "password"
        }]
    );
}

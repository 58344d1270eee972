use std::io::Write;

use formflow::config::{Config, ConfigError};
use formflow::form::{Country, PersonalDetails, Pricing};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("formflow/config.toml"));
}

#[test]
fn missing_file_yields_defaults() {
    let config = Config::load_from(std::path::Path::new("/nonexistent/formflow.toml"))
        .expect("missing file is not an error");
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.initial_details(), PersonalDetails::default());
}

#[test]
fn full_config_parses_boundary_strings() {
    let file = write_config(
        r#"
[ui]
tick_rate_ms = 100

[form]
name = "Ada"
email = "ada@example.com"
country = "austria"
mood = true
pricing = "plus"
skill = 7
"#,
    );

    let config = Config::load_from(file.path()).expect("valid config");
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(
        config.initial_details(),
        PersonalDetails {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            country: Some(Country::Austria),
            mood: true,
            pricing: Some(Pricing::Plus),
            skill: 7,
        }
    );
}

#[test]
fn empty_file_yields_defaults() {
    let file = write_config("");
    let config = Config::load_from(file.path()).expect("empty config is valid");
    assert_eq!(config.initial_details(), PersonalDetails::default());
}

#[test]
fn out_of_range_skill_fails_validation() {
    let file = write_config("[form]\nskill = 11\n");
    match Config::load_from(file.path()) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("form.skill"));
        }
        other => panic!("expected ValidationError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn zero_tick_rate_fails_validation() {
    let file = write_config("[ui]\ntick_rate_ms = 0\n");
    assert!(matches!(
        Config::load_from(file.path()),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn unknown_country_fails_parsing() {
    let file = write_config("[form]\ncountry = \"france\"\n");
    assert!(matches!(
        Config::load_from(file.path()),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn malformed_toml_fails_parsing() {
    let file = write_config("[form\nname=");
    assert!(matches!(
        Config::load_from(file.path()),
        Err(ConfigError::ParseError { .. })
    ));
}

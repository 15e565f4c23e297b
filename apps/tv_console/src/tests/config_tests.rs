use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file(
        &mut settings,
        "seed_defaults = false\nlog_filter = \"debug\"\n",
    )
    .expect("parse");

    assert!(!settings.seed_defaults);
    assert_eq!(settings.log_filter, "debug");
    assert!(!settings.render_json);
}

#[test]
fn unknown_file_keys_are_rejected() {
    let mut settings = Settings::default();
    assert!(apply_file(&mut settings, "ticker_seconds = 3\n").is_err());
    assert_eq!(settings, Settings::default());
}

#[test]
fn env_overrides_win_and_bad_flags_are_ignored() {
    let vars = HashMap::from([
        ("APP__SEED_DEFAULTS", "off"),
        ("APP__RENDER_JSON", "maybe"),
        ("APP__LOG_FILTER", "reminders_core=debug"),
    ]);
    let mut settings = Settings::default();
    apply_env(&mut settings, |key| vars.get(key).map(|v| v.to_string()));

    assert!(!settings.seed_defaults);
    assert!(!settings.render_json);
    assert_eq!(settings.log_filter, "reminders_core=debug");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("tv_console_missing_{suffix}.toml"));

    let settings = load_settings(&path).expect("load");
    assert!(!settings.log_filter.is_empty());
}

#[test]
fn loads_settings_from_file() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("tv_console_settings_{suffix}.toml"));
    fs::write(&path, "render_json = true\n").expect("write settings");

    let settings = load_settings(&path).expect("load");
    fs::remove_file(&path).expect("cleanup");

    if env::var("APP__RENDER_JSON").is_err() {
        assert!(settings.render_json);
    }
}

use std::collections::HashMap;
use wellbeing_companion::config::{Config, log_filter};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_cover_local_use() {
    let config = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.database_url, "sqlite://wellbeing.db");
    assert_eq!(config.user_id, "local");
}

#[test]
fn variables_override_defaults() {
    let config = Config::from_lookup(lookup(&[
        ("DATABASE_URL", "sqlite::memory:"),
        ("WELLBEING_USER", " lena "),
    ]))
    .unwrap();
    assert_eq!(config.user_id, "lena");
    assert!(config.describe().contains("sqlite::memory:"));
}

#[test]
fn bad_values_are_rejected() {
    assert!(Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/app")])).is_err());
    assert!(Config::from_lookup(lookup(&[("WELLBEING_USER", "   ")])).is_err());
}

#[test]
fn log_filter_accepts_directives() {
    assert!(log_filter(None).is_ok());
    assert!(log_filter(Some("wellbeing_companion=debug,sqlx=warn")).is_ok());
}

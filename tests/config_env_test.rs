//! Configuration loaded from the home directory and the environment
//!
//! Kept in its own test binary: it rewrites `HOME` and the override
//! variables for the whole process.

use algomatch::config::{Config, ENDPOINT_ENV, TOP_K_ENV};
use tempfile::tempdir;

/// Save under `HOME`, load back, then let the environment win
#[test]
fn test_load_from_home_with_env_overrides() {
    let home = tempdir().expect("Failed to create temp dir");
    std::env::set_var("HOME", home.path());
    std::env::remove_var(ENDPOINT_ENV);
    std::env::remove_var(TOP_K_ENV);

    let path = Config::config_path().unwrap();
    assert!(path.starts_with(home.path()));
    assert!(path.ends_with(".config/algomatch/config.json"));

    // nothing saved yet
    assert_eq!(Config::load().unwrap(), Config::default());

    let mut config = Config::default();
    config.service.base_url = "http://10.0.0.2:8000".to_string();
    config.service.top_k = 3;
    config.save().unwrap();
    assert!(path.exists());
    assert_eq!(Config::load().unwrap(), config);

    std::env::set_var(ENDPOINT_ENV, "https://match.example.org");
    std::env::set_var(TOP_K_ENV, "8");
    let loaded = Config::load().unwrap();
    assert_eq!(loaded.service.predict_url(), "https://match.example.org/predict/8/");

    // the file itself is untouched by overrides
    assert_eq!(Config::load_from(&path).unwrap(), config);

    std::env::set_var(TOP_K_ENV, "zero");
    assert!(Config::load().is_err());

    std::env::remove_var(ENDPOINT_ENV);
    std::env::remove_var(TOP_K_ENV);
}

use confluence_core::config::*;
use confluence_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = ConfluenceConfig::from_toml("").unwrap();

    // Scheduler defaults
    assert_eq!(config.scheduler.horizon_hours, 168);
    assert_eq!(config.scheduler.threshold, 3.5);

    // Fusion defaults
    assert_eq!(config.fusion.low_threshold, 0.3);
    assert_eq!(config.fusion.high_threshold, 0.7);
    assert_eq!(config.fusion.strong_connection_threshold, 0.6);
    assert!(config.fusion.parallel);

    // Improvement defaults
    assert_eq!(config.improvement.base_interval_secs, 3600.0);
    assert_eq!(config.improvement.floor_interval_secs, 300.0);
    assert_eq!(config.improvement.top_k, 10);
    assert_eq!(config.improvement.history_capacity, 256);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json);

    config.validate().unwrap();
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[scheduler]
horizon_hours = 48

[improvement]
top_k = 5
"#;
    let config = ConfluenceConfig::from_toml(toml).unwrap();
    assert_eq!(config.scheduler.horizon_hours, 48);
    assert_eq!(config.improvement.top_k, 5);
    // Non-overridden fields keep defaults
    assert_eq!(config.scheduler.threshold, 3.5);
    assert_eq!(config.improvement.floor_interval_secs, 300.0);
}

#[test]
fn config_serde_roundtrip() {
    let config = ConfluenceConfig::default();
    let toml_str = config.to_toml().unwrap();
    let roundtripped = ConfluenceConfig::from_toml(&toml_str).unwrap();
    assert_eq!(
        roundtripped.scheduler.horizon_hours,
        config.scheduler.horizon_hours
    );
    assert_eq!(roundtripped.fusion.high_threshold, config.fusion.high_threshold);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = ConfluenceConfig::from_toml("[scheduler\nthreshold = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn validate_rejects_inverted_integration_thresholds() {
    let mut config = ConfluenceConfig::default();
    config.fusion.low_threshold = 0.8;
    config.fusion.high_threshold = 0.4;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("fusion.low_threshold"));
}

#[test]
fn validate_rejects_zero_floor_interval() {
    let mut config = ConfluenceConfig::default();
    config.improvement.floor_interval_secs = 0.0;
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_base_below_floor() {
    let mut config = ConfluenceConfig::default();
    config.improvement.base_interval_secs = 60.0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("base_interval_secs"));
}

#[test]
fn validate_rejects_negative_horizon_and_zero_top_k() {
    let mut config = ConfluenceConfig::default();
    config.scheduler.horizon_hours = -1;
    assert!(config.validate().is_err());

    let mut config = ConfluenceConfig::default();
    config.improvement.top_k = 0;
    assert!(config.validate().is_err());
}

#[test]
fn intervals_convert_only_when_representable() {
    let mut config = ImprovementConfig::default();
    assert_eq!(
        config.base_interval().unwrap(),
        std::time::Duration::from_secs(3600)
    );

    for bad in [-1.0, f64::NAN, f64::INFINITY, 1e300] {
        config.base_interval_secs = bad;
        assert!(matches!(
            config.base_interval(),
            Err(ConfigError::ValidationFailed { .. })
        ));
        assert!(config.validate().is_err());
    }
}

#[test]
fn validate_caps_horizon_at_one_leap_year() {
    let mut config = ConfluenceConfig::default();
    config.scheduler.horizon_hours = 8_784;
    assert!(config.validate().is_ok());

    config.scheduler.horizon_hours = 8_785;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("scheduler.horizon_hours"));

    config.scheduler.horizon_hours = i64::MAX;
    assert!(config.validate().is_err());
}

#[test]
fn load_missing_file_is_file_not_found() {
    let err = ConfluenceConfig::load(Some(std::path::Path::new(
        "/nonexistent/confluence.toml",
    )))
    .unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn load_reads_file_then_applies_env_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("confluence.toml");
    std::fs::write(
        &path,
        "[scheduler]\nhorizon_hours = 72\n\n[improvement]\ntop_k = 4\n",
    )
    .unwrap();

    std::env::set_var("CONFLUENCE_IMPROVEMENT_TOP_K", "7");
    let config = ConfluenceConfig::load(Some(&path)).unwrap();
    std::env::remove_var("CONFLUENCE_IMPROVEMENT_TOP_K");

    assert_eq!(config.scheduler.horizon_hours, 72);
    // Environment wins over the file.
    assert_eq!(config.improvement.top_k, 7);
}

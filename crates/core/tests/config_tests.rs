// ═══════════════════════════════════════════════════════════════════
// Config Tests: DashboardSettings defaults, JSON, files, validation
// ═══════════════════════════════════════════════════════════════════

use portfolio_dashboard_core::config::{ChatFailurePolicy, DashboardSettings, SurveyWindow};
use portfolio_dashboard_core::errors::CoreError;
use portfolio_dashboard_core::models::form::Period;

#[test]
fn test_defaults() {
    let s = DashboardSettings::default();
    assert_eq!(s.backend_url, "http://127.0.0.1:8000");
    assert_eq!(s.request_timeout_secs, None);
    assert_eq!(s.chat_failure_policy, ChatFailurePolicy::Silent);
    assert!(!s.clear_chat_on_close);
    assert_eq!(s.default_symbol, "ETH");
    assert_eq!(s.default_chart_period, Period::Day);
    assert_eq!(s.default_chart_limit, "100");
    assert!(s.validate().is_ok());
}

#[test]
fn test_partial_json_falls_back_to_defaults() {
    let s = DashboardSettings::from_json_str(
        r#"{"backend_url":"http://10.0.0.5:8000","chat_failure_policy":"append_fallback"}"#,
    )
    .unwrap();
    assert_eq!(s.backend_url, "http://10.0.0.5:8000");
    assert_eq!(s.chat_failure_policy, ChatFailurePolicy::AppendFallback);
    assert_eq!(s.default_symbol, "ETH");
    assert_eq!(s.survey_window, SurveyWindow::default());
}

#[test]
fn test_period_accepts_granularity_in_config() {
    let s = DashboardSettings::from_json_str(r#"{"default_chart_period":"week"}"#).unwrap();
    assert_eq!(s.default_chart_period, Period::Week);
}

#[test]
fn test_invalid_json_is_config_error() {
    let err = DashboardSettings::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, CoreError::Config(_)));
}

#[test]
fn test_relative_backend_url_rejected() {
    let err = DashboardSettings::from_json_str(r#"{"backend_url":"/api"}"#).unwrap_err();
    assert!(matches!(err, CoreError::Config(ref m) if m.contains("backend_url")));
}

#[test]
fn test_zero_timeout_rejected() {
    let s = DashboardSettings {
        request_timeout_secs: Some(0),
        ..DashboardSettings::default()
    };
    assert!(s.validate().is_err());
}

#[test]
fn test_non_digit_default_limit_rejected() {
    let s = DashboardSettings {
        default_chart_limit: "10k".into(),
        ..DashboardSettings::default()
    };
    assert!(s.validate().is_err());
}

#[test]
fn test_blank_default_symbol_rejected() {
    let s = DashboardSettings {
        default_symbol: "  ".into(),
        ..DashboardSettings::default()
    };
    assert!(s.validate().is_err());
}

#[test]
fn test_backend_endpoint_joins_cleanly() {
    let s = DashboardSettings {
        backend_url: "http://127.0.0.1:8000/".into(),
        ..DashboardSettings::default()
    };
    assert_eq!(s.backend_endpoint("/chat"), "http://127.0.0.1:8000/chat");
    assert_eq!(s.backend_endpoint("token_price"), "http://127.0.0.1:8000/token_price");
}

#[test]
fn test_survey_window_features() {
    assert_eq!(
        SurveyWindow::default().features(),
        "width=600,height=800,noopener,noreferrer"
    );
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.json");
    let path = path.to_str().unwrap();

    let settings = DashboardSettings {
        backend_url: "https://prices.example".into(),
        request_timeout_secs: Some(15),
        clear_chat_on_close: true,
        ..DashboardSettings::default()
    };
    settings.save_to_file(path).unwrap();

    let loaded = DashboardSettings::load_from_file(path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_missing_file_is_file_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    let err = DashboardSettings::load_from_file(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, CoreError::FileIO(_)));
}

use std::collections::HashMap;

use meet::presentation::SummarySettings;

fn required_vars() -> HashMap<String, String> {
    [
        ("APP_API_TOKEN", "api-token-123"),
        ("MINIO_BUCKET", "meet-media"),
        ("MINIO_URL", "minio:9000"),
        ("MINIO_ACCESS_KEY", "meet"),
        ("MINIO_SECRET_KEY", "password"),
        ("OPENAI_API_KEY", "sk-test-key"),
        ("WEBHOOK_API_TOKEN", "webhook-token"),
        ("WEBHOOK_URL", "https://docs.example.com/api/v1.0/documents/"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn load(vars: HashMap<String, String>) -> Result<SummarySettings, meet::presentation::config::SettingsError> {
    SummarySettings::from_source(config::Environment::default().source(Some(vars)))
}

#[test]
fn given_required_vars_when_loading_then_defaults_are_applied() {
    let settings = load(required_vars()).unwrap();

    assert_eq!(settings.app_name, "Awesome API");
    assert_eq!(settings.server_port, 8000);
    assert_eq!(settings.openai_asr_model, "whisper-1");
    assert_eq!(settings.openai_llm_model, "gpt-4o");
    assert_eq!(settings.webhook_max_retries, 2);
    assert_eq!(settings.webhook_status_forcelist, vec![502, 503, 504]);
    assert_eq!(settings.webhook_backoff_factor, 0.1);
    assert_eq!(settings.celery_broker_url, "redis://redis/0");
}

#[test]
fn given_missing_webhook_url_when_loading_then_fails() {
    let mut vars = required_vars();
    vars.remove("WEBHOOK_URL");

    assert!(load(vars).is_err());
}

#[test]
fn given_comma_separated_forcelist_when_loading_then_parsed() {
    let mut vars = required_vars();
    vars.insert("WEBHOOK_STATUS_FORCELIST".to_string(), "500, 502".to_string());
    vars.insert("WEBHOOK_MAX_RETRIES".to_string(), "4".to_string());

    let settings = load(vars).unwrap();

    assert_eq!(settings.webhook_status_forcelist, vec![500, 502]);
    assert_eq!(settings.retry_policy().max_attempts(), 5);
}

#[test]
fn given_single_status_forcelist_when_loading_then_parsed() {
    let mut vars = required_vars();
    vars.insert("WEBHOOK_STATUS_FORCELIST".to_string(), "503".to_string());

    let settings = load(vars).unwrap();

    assert_eq!(settings.webhook_status_forcelist, vec![503]);
}

#[test]
fn given_settings_when_debug_formatting_then_secrets_are_masked() {
    let settings = load(required_vars()).unwrap();

    let rendered = format!("{:?}", settings);

    assert!(!rendered.contains("sk-test-key"));
    assert!(!rendered.contains("api-token-123"));
    assert!(rendered.contains("meet-media"));
}

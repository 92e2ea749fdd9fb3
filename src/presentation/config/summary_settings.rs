use std::sync::OnceLock;

use config::Config;
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::Deserialize;

use super::SettingsError;
use crate::infrastructure::webhook::RetryPolicy;

static SETTINGS: OnceLock<SummarySettings> = OnceLock::new();

/// Summary worker settings, read from the process environment and `.env`.
///
/// Keys are the upper-cased field names (`APP_API_TOKEN`, `MINIO_URL`, ...).
/// Fields without a default are required; loading fails when one is missing.
#[derive(Clone, Deserialize)]
pub struct SummarySettings {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    pub app_api_token: String,

    #[serde(default = "default_server_port")]
    pub server_port: u16,
    #[serde(default = "default_queue_capacity")]
    pub summary_queue_capacity: usize,

    // Accepted for compatibility with existing deployments; tasks run on an
    // in-process queue.
    #[serde(default = "default_redis_url")]
    pub celery_broker_url: String,
    #[serde(default = "default_redis_url")]
    pub celery_result_backend: String,

    pub minio_bucket: String,
    pub minio_url: String,
    pub minio_access_key: String,
    pub minio_secret_key: String,

    pub openai_api_key: String,
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,
    #[serde(default = "default_asr_model")]
    pub openai_asr_model: String,
    #[serde(default = "default_llm_model")]
    pub openai_llm_model: String,

    #[serde(default = "default_webhook_max_retries")]
    pub webhook_max_retries: u32,
    #[serde(
        default = "default_webhook_status_forcelist",
        deserialize_with = "deserialize_status_list"
    )]
    pub webhook_status_forcelist: Vec<u16>,
    #[serde(default = "default_webhook_backoff_factor")]
    pub webhook_backoff_factor: f64,
    pub webhook_api_token: String,
    pub webhook_url: String,
}

fn default_app_name() -> String {
    "Awesome API".to_string()
}

fn default_server_port() -> u16 {
    8000
}

fn default_queue_capacity() -> usize {
    32
}

fn default_redis_url() -> String {
    "redis://redis/0".to_string()
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_asr_model() -> String {
    "whisper-1".to_string()
}

fn default_llm_model() -> String {
    "gpt-4o".to_string()
}

fn default_webhook_max_retries() -> u32 {
    2
}

fn default_webhook_status_forcelist() -> Vec<u16> {
    vec![502, 503, 504]
}

fn default_webhook_backoff_factor() -> f64 {
    0.1
}

/// Accepts `"502,503,504"`, a single code, or a sequence of codes.
fn deserialize_status_list<'de, D>(deserializer: D) -> Result<Vec<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StatusListVisitor;

    impl<'de> Visitor<'de> for StatusListVisitor {
        type Value = Vec<u16>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a comma separated list of HTTP status codes")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| parse_status(s).map_err(E::custom))
                .collect()
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            u16::try_from(v)
                .map(|code| vec![code])
                .map_err(|_| E::custom(format!("invalid HTTP status code: {}", v)))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            u16::try_from(v)
                .map(|code| vec![code])
                .map_err(|_| E::custom(format!("invalid HTTP status code: {}", v)))
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut codes = Vec::new();
            while let Some(code) = seq.next_element::<StatusCode>()? {
                codes.push(code.0);
            }
            Ok(codes)
        }
    }

    deserializer.deserialize_any(StatusListVisitor)
}

struct StatusCode(u16);

impl<'de> Deserialize<'de> for StatusCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StatusCodeVisitor;

        impl Visitor<'_> for StatusCodeVisitor {
            type Value = StatusCode;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("an HTTP status code")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                parse_status(v.trim()).map(StatusCode).map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u16::try_from(v)
                    .map(StatusCode)
                    .map_err(|_| E::custom(format!("invalid HTTP status code: {}", v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                u16::try_from(v)
                    .map(StatusCode)
                    .map_err(|_| E::custom(format!("invalid HTTP status code: {}", v)))
            }
        }

        deserializer.deserialize_any(StatusCodeVisitor)
    }
}

fn parse_status(s: &str) -> Result<u16, String> {
    s.parse::<u16>()
        .map_err(|_| format!("invalid HTTP status code: {}", s))
}

impl SummarySettings {
    /// Reads `.env` (when present) and the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();
        Self::from_source(config::Environment::default())
    }

    pub fn from_source(env_source: config::Environment) -> Result<Self, SettingsError> {
        let configuration = Config::builder()
            .add_source(env_source.try_parsing(true))
            .build()?;

        Ok(configuration.try_deserialize()?)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.webhook_max_retries,
            backoff_factor: self.webhook_backoff_factor,
            status_forcelist: self.webhook_status_forcelist.clone(),
        }
    }
}

impl std::fmt::Debug for SummarySettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::infrastructure::observability::mask_secret;

        f.debug_struct("SummarySettings")
            .field("app_name", &self.app_name)
            .field("app_api_token", &mask_secret(&self.app_api_token))
            .field("server_port", &self.server_port)
            .field("summary_queue_capacity", &self.summary_queue_capacity)
            .field("minio_bucket", &self.minio_bucket)
            .field("minio_url", &self.minio_url)
            .field("minio_access_key", &mask_secret(&self.minio_access_key))
            .field("minio_secret_key", &mask_secret(&self.minio_secret_key))
            .field("openai_api_key", &mask_secret(&self.openai_api_key))
            .field("openai_base_url", &self.openai_base_url)
            .field("openai_asr_model", &self.openai_asr_model)
            .field("openai_llm_model", &self.openai_llm_model)
            .field("webhook_max_retries", &self.webhook_max_retries)
            .field("webhook_status_forcelist", &self.webhook_status_forcelist)
            .field("webhook_backoff_factor", &self.webhook_backoff_factor)
            .field("webhook_api_token", &mask_secret(&self.webhook_api_token))
            .field("webhook_url", &self.webhook_url)
            .finish_non_exhaustive()
    }
}

/// Loads the settings on first call and returns the cached copy afterwards.
pub fn get_settings() -> Result<&'static SummarySettings, SettingsError> {
    if let Some(settings) = SETTINGS.get() {
        return Ok(settings);
    }
    let settings = SummarySettings::from_env()?;
    Ok(SETTINGS.get_or_init(|| settings))
}

mod init_tracing;
mod request_id;
mod secret_redaction;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use secret_redaction::{mask_secret, redact_url_credentials};
pub use tracing_config::{DEFAULT_FILTER, TracingConfig};

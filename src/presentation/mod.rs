pub mod auth;
pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{Environment, Settings, SummarySettings, get_settings};
pub use router::{create_router, create_summary_router};
pub use state::{AppState, SummaryState};

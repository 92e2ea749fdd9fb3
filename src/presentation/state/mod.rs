mod app_state;
mod summary_state;

pub use app_state::AppState;
pub use summary_state::SummaryState;

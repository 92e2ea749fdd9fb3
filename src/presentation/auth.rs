use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::Response;
use subtle::ConstantTimeEq;

use super::handlers::ErrorResponse;
use super::state::SummaryState;

/// Rejects requests whose `Authorization: Bearer` token differs from the
/// configured API token.
pub async fn api_token_middleware(
    State(state): State<SummaryState>,
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, axum::Json<ErrorResponse>)> {
    let provided = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim);

    match provided {
        Some(token) if bool::from(token.as_bytes().ct_eq(state.api_token.as_bytes())) => {
            Ok(next.run(request).await)
        }
        _ => {
            tracing::warn!("Rejected request with missing or invalid API token");
            Err((
                StatusCode::UNAUTHORIZED,
                axum::Json(ErrorResponse {
                    error: "Invalid or missing API token".to_string(),
                }),
            ))
        }
    }
}

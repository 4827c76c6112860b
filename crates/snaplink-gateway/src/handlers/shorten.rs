use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::HOST;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::Value;
use snaplink_core::shortcode::MAX_LENGTH;
use snaplink_core::ShortCode;
use tracing::info;

use crate::error::{AppError, Result};
use crate::model::ShortenResponse;
use crate::state::AppState;

/// `POST /api/shorten` with body `{ "url": string }`.
///
/// The body is parsed as JSON whatever its `Content-Type` says.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ShortenResponse>> {
    let payload: Value = serde_json::from_slice(&body)?;

    let url = payload
        .get("url")
        .and_then(Value::as_str)
        .filter(|url| !url.trim().is_empty())
        .ok_or(AppError::UrlRequired)?;

    let host = headers.get(HOST).and_then(|value| value.to_str().ok());
    let base_url = state.config().public_base_url(host);

    // refuse before committing if no code could fit in a QR symbol
    let widest = ShortCode::new_unchecked("a".repeat(MAX_LENGTH)).to_url(&base_url);
    state.qr().check_capacity(&widest)?;

    let code = state.shortener().shorten(url).await?;

    let short_url = code.to_url(&base_url);
    let qr_url = state.qr().encode_data_url(&short_url)?;

    info!(code = %code, short_url = %short_url, "created short link");

    Ok(Json(ShortenResponse { short_url, qr_url }))
}

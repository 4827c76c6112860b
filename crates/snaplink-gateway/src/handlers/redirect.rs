use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use snaplink_core::ShortCode;
use tracing::{debug, error, warn};

use crate::state::AppState;

/// `GET /{short_code}`: 301 to the stored destination.
///
/// Never answers with an error. Unknown or malformed codes, destinations
/// that cannot be sent as a `Location` header and storage failures all
/// redirect to the configured fallback location.
pub async fn redirect_handler(
    State(state): State<AppState>,
    short_code: std::result::Result<Path<String>, PathRejection>,
) -> Response {
    let fallback = state.config().fallback_location.as_str();

    let code = match short_code {
        Ok(Path(raw)) => match ShortCode::new(raw) {
            Ok(code) => code,
            Err(e) => {
                debug!(error = %e, "malformed short code, redirecting to fallback");
                return moved_permanently(fallback);
            }
        },
        Err(e) => {
            debug!(error = %e, "unreadable short code path, redirecting to fallback");
            return moved_permanently(fallback);
        }
    };

    match state.shortener().resolve(&code).await {
        Ok(Some(record)) => match HeaderValue::try_from(record.destination_url.as_str()) {
            Ok(location) => {
                debug!(code = %code, url = %record.destination_url, "redirecting");
                (StatusCode::MOVED_PERMANENTLY, [(LOCATION, location)]).into_response()
            }
            Err(e) => {
                warn!(code = %code, error = %e, "destination is not a valid Location header");
                moved_permanently(fallback)
            }
        },
        Ok(None) => {
            debug!(code = %code, "short code not found, redirecting to fallback");
            moved_permanently(fallback)
        }
        Err(e) => {
            error!(code = %code, error = %e, "failed to resolve short code");
            moved_permanently(fallback)
        }
    }
}

fn moved_permanently(location: &str) -> Response {
    let location =
        HeaderValue::try_from(location).unwrap_or_else(|_| HeaderValue::from_static("/"));
    (StatusCode::MOVED_PERMANENTLY, [(LOCATION, location)]).into_response()
}

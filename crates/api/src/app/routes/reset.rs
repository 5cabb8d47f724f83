use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use crate::app::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/reset", post(reset_db))
}

/// Wipe the inventory and reload factory defaults.
///
/// Credentials come from query parameters; when either is absent there,
/// the JSON body is consulted as a fallback (the original client sent both
/// forms in the wild).
pub async fn reset_db(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ResetCredentials>,
    body: Bytes,
) -> axum::response::Response {
    let (username, password) = match credentials_from(query, &body) {
        Ok(pair) => pair,
        Err(response) => return response,
    };

    match services.reset.reset(&username, &password) {
        Ok(report) => (
            StatusCode::OK,
            Json(dto::ResetResponse {
                message: "Database reset successfully with default entries.".to_string(),
                deleted: report.deleted,
                inserted: report.inserted,
                failures: report.failures,
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::info!(error = %err, "reset request failed");
            errors::reset_error_to_response(&err)
        }
    }
}

fn credentials_from(
    query: dto::ResetCredentials,
    body: &[u8],
) -> Result<(String, String), axum::response::Response> {
    if let (Some(u), Some(p)) = (query.username.clone(), query.password.clone()) {
        return Ok((u, p));
    }

    // Fallback: parse the JSON body. An empty body is treated the same as
    // absent credentials rather than a decode error.
    let from_body: dto::ResetCredentials = if body.is_empty() {
        dto::ResetCredentials::default()
    } else {
        match serde_json::from_slice(body) {
            Ok(parsed) => parsed,
            Err(_) => {
                return Err(errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "malformed_input",
                    "Please provide both username and password in correct JSON format.",
                ));
            }
        }
    };

    let username = query.username.or(from_body.username);
    let password = query.password.or(from_body.password);

    match (username, password) {
        (Some(u), Some(p)) => Ok((u, p)),
        _ => Err(errors::json_error(
            StatusCode::BAD_REQUEST,
            "missing_credentials",
            "Please provide both username and password.",
        )),
    }
}

//! Typed-error to HTTP-response translation.
//!
//! Client-caused rejections surface as 400s whose messages name every
//! offending id; infrastructure failures surface as 500s.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::{ReconcileError, StoreError, ValidationError};
use stockroom_infra::ResetError;

pub fn validation_error_to_response(err: &ValidationError) -> axum::response::Response {
    // The validator phrases its own user-facing messages; only the status
    // and machine-readable code are decided here.
    match err {
        ValidationError::MalformedInput(message) => {
            json_error(StatusCode::BAD_REQUEST, "malformed_input", message.clone())
        }
        ValidationError::InvalidEntry(message) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_entry", message.clone())
        }
    }
}

pub fn reconcile_error_to_response(err: &ReconcileError) -> axum::response::Response {
    match err {
        ReconcileError::UnknownProductIds(ids) => json_error(
            StatusCode::BAD_REQUEST,
            "unknown_product_ids",
            format!("Product IDs not found in database: {}", ids.join(", ")),
        ),
        ReconcileError::DuplicateProductIds(ids) => json_error(
            StatusCode::BAD_REQUEST,
            "duplicate_product_ids",
            format!("Duplicate product IDs found: {}.", ids.join(", ")),
        ),
        ReconcileError::InsufficientStock(ids) => json_error(
            StatusCode::BAD_REQUEST,
            "insufficient_stock",
            format!("Not enough stock for the following IDs: {}.", ids.join(", ")),
        ),
        ReconcileError::QuantityOutOfRange(ids) => json_error(
            StatusCode::BAD_REQUEST,
            "quantity_out_of_range",
            format!("Quantity out of range for the following IDs: {}.", ids.join(", ")),
        ),
        ReconcileError::Store(e) => store_error_to_response(e),
    }
}

pub fn reset_error_to_response(err: &ResetError) -> axum::response::Response {
    match err {
        ResetError::Unauthorized => json_error(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "Invalid username or password.",
        ),
        ResetError::Seed(_) | ResetError::Store(_) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "reset_failed",
            "An error occurred while resetting the database.",
        ),
    }
}

pub fn store_error_to_response(err: &StoreError) -> axum::response::Response {
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "store_unavailable",
        err.to_string(),
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

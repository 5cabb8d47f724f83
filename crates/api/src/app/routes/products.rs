use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use stockroom_engine::validate;

use crate::app::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/products/adjust", post(adjust_products))
}

/// Validate and reconcile one adjustment batch.
///
/// The body is taken raw so the validator owns the decode step; axum's
/// `Json` extractor would accept payloads the validator must reject
/// (e.g. float quantities).
pub async fn adjust_products(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    let batch = match validate(&body) {
        Ok(batch) => batch,
        Err(err) => {
            tracing::info!(error = %err, "product request failed validation");
            return errors::validation_error_to_response(&err);
        }
    };

    match services.engine.reconcile(&batch) {
        Ok(result) => (
            StatusCode::OK,
            Json(dto::AdjustResponse::for_count(result.updated)),
        )
            .into_response(),
        Err(err) => {
            tracing::info!(error = %err, "product request rejected");
            errors::reconcile_error_to_response(&err)
        }
    }
}

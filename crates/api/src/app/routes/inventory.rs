use std::sync::Arc;

use axum::{Json, Router, extract::Extension, http::StatusCode, response::IntoResponse, routing::get};

use crate::app::AppServices;
use crate::app::errors;

pub fn router() -> Router {
    Router::new().route("/inventory", get(list_inventory))
}

/// Full inventory snapshot, as the store currently sees it.
pub async fn list_inventory(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.scan_inventory() {
        Ok(mut records) => {
            records.sort_by(|a, b| a.id.cmp(&b.id));
            (StatusCode::OK, Json(records)).into_response()
        }
        Err(err) => errors::store_error_to_response(&err),
    }
}

//! Request/response bodies for the HTTP surface.

use serde::{Deserialize, Serialize};

/// 200 body for a committed adjustment batch.
#[derive(Debug, Serialize)]
pub struct AdjustResponse {
    pub updated: usize,
    pub message: String,
}

impl AdjustResponse {
    pub fn for_count(updated: usize) -> Self {
        Self {
            updated,
            message: format!("DB successfully updated for {updated} item(s)."),
        }
    }
}

/// Reset credentials, accepted as query parameters or as a JSON body.
#[derive(Debug, Default, Deserialize)]
pub struct ResetCredentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// 200 body for a completed reset.
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub message: String,
    pub deleted: usize,
    pub inserted: usize,
    pub failures: Vec<String>,
}

//! Request validator: raw bytes in, well-typed batch out.
//!
//! Pure function over its input; no store access happens here. Duplicate
//! detection is deliberately left to the engine, which has to cross-reference
//! the store anyway.

use serde_json::Value;

use stockroom_core::{AdjustmentRequest, ReconciliationBatch, ValidationError};

/// Parse and sanitize a raw adjustment payload.
///
/// The payload must be a JSON object with a non-empty `products` array;
/// each entry must carry a non-empty string `id` and a strictly integral
/// `quantity` (numeric strings, floats and booleans are rejected).
pub fn validate(raw: &[u8]) -> Result<ReconciliationBatch, ValidationError> {
    let body: Value = serde_json::from_slice(raw).map_err(|_| {
        ValidationError::MalformedInput(
            "Please provide a list of products in correct JSON format.".to_string(),
        )
    })?;

    let products = body
        .get("products")
        .and_then(Value::as_array)
        .filter(|list| !list.is_empty())
        .ok_or_else(|| {
            ValidationError::MalformedInput(
                "Please provide a list of products, each with an id and quantity.".to_string(),
            )
        })?;

    let mut requests = Vec::with_capacity(products.len());
    for (idx, entry) in products.iter().enumerate() {
        let id = match entry.get("id").and_then(Value::as_str) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => {
                return Err(ValidationError::InvalidEntry(format!(
                    "Each product must have an 'id' and a numeric 'quantity' (entry {idx}: missing or empty id)."
                )));
            }
        };

        // `as_i64` is None for floats (even x.0), strings and booleans.
        let delta = entry.get("quantity").and_then(Value::as_i64).ok_or_else(|| {
            ValidationError::InvalidEntry(format!(
                "Each product must have an 'id' and a numeric 'quantity' (entry {idx}, id {id})."
            ))
        })?;

        requests.push(AdjustmentRequest { id, delta });
    }

    Ok(ReconciliationBatch { requests })
}

//! Caller input validation.
//!
//! Checks run in a fixed order and report the first offending field, so a
//! payload that is both missing an email and carries a bad amount always
//! fails on the email. Validation never touches the network.

use serde_json::{Map, Value};

use super::types::{InitiateRequest, VerifyRequest};
use crate::error::{AppError, AppResult};

fn payload_object(payload: &Value) -> AppResult<&Map<String, Value>> {
    payload
        .as_object()
        .filter(|fields| !fields.is_empty())
        .ok_or_else(|| AppError::invalid_argument("Request data is required"))
}

/// Validates and normalizes an initiate payload.
///
/// Order: payload presence, then `email`, then `amount`. `callback_url` and
/// `metadata` are optional and default to empty values.
pub fn initiate_request(payload: &Value) -> AppResult<InitiateRequest> {
    let data = payload_object(payload)?;

    let email = data
        .get("email")
        .and_then(Value::as_str)
        .filter(|email| !email.is_empty())
        .ok_or_else(|| AppError::invalid_argument("Email is required"))?;

    let amount = data
        .get("amount")
        .and_then(Value::as_f64)
        .filter(|amount| *amount > 0.0)
        .ok_or_else(|| AppError::invalid_argument("Valid amount is required"))?;

    let callback_url = data
        .get("callback_url")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let metadata = data
        .get("metadata")
        .filter(|metadata| !metadata.is_null())
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()));

    Ok(InitiateRequest {
        email: email.to_string(),
        amount,
        callback_url,
        metadata,
    })
}

/// Validates a verify payload: payload presence, then a non-empty `reference`.
pub fn verify_request(payload: &Value) -> AppResult<VerifyRequest> {
    let data = payload_object(payload)?;

    let reference = data
        .get("reference")
        .and_then(Value::as_str)
        .filter(|reference| !reference.is_empty())
        .ok_or_else(|| AppError::invalid_argument("Transaction reference is required"))?;

    Ok(VerifyRequest {
        reference: reference.to_string(),
    })
}

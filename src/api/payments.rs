//! HTTP handlers for the two payment operations.
//!
//! Bodies are read raw rather than through the `Json` extractor so the
//! validator, not the framework, decides how a missing or malformed payload
//! is reported.

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;

use super::AppState;
use crate::error::{AppError, AppResult};
use crate::payments;
use crate::payments::types::{InitiateResult, VerifyResult};

/// An empty body is passed through as `null` so the validator reports the
/// missing payload in its own words.
fn decode_payload(body: &Bytes) -> AppResult<Value> {
    if body.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body)
        .map_err(|_| AppError::invalid_argument("Request body must be valid JSON"))
}

pub async fn initiate_payment(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<InitiateResult>> {
    let payload = decode_payload(&body)?;
    let result = payments::initiate_payment(&state.gateway, &payload).await?;
    Ok(Json(result))
}

pub async fn verify_payment(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<VerifyResult>> {
    let payload = decode_payload(&body)?;
    let result = payments::verify_payment(&state.gateway, &payload).await?;
    Ok(Json(result))
}

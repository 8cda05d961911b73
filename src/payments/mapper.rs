//! Maps raw gateway replies onto the caller-facing result contract.
//!
//! A reply counts as successful only when the HTTP status is 200 and the
//! body's `status` field is `true`. On success, every field access degrades
//! to a default instead of failing, so a partial or malformed Paystack body
//! can never crash a request.

use serde_json::{Map, Value};

use super::gateway::GatewayReply;
use super::types::{InitiateResult, VerifyResult};
use crate::amount;
use crate::error::{AppError, AppResult};

fn is_success(reply: &GatewayReply) -> bool {
    reply.status == 200
        && reply
            .body
            .get("status")
            .and_then(Value::as_bool)
            .unwrap_or(false)
}

fn upstream_error(reply: &GatewayReply, default_message: &str) -> AppError {
    let message = reply
        .body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or(default_message);
    AppError::internal(format!("Paystack error: {message}"))
}

fn field_string(data: &Value, field: &str) -> Option<String> {
    data.get(field).and_then(Value::as_str).map(str::to_string)
}

pub fn initiate_outcome(reply: &GatewayReply) -> AppResult<InitiateResult> {
    if !is_success(reply) {
        return Err(upstream_error(reply, "Failed to initialize payment"));
    }

    let data = reply.body.get("data").cloned().unwrap_or(Value::Null);
    Ok(InitiateResult {
        success: true,
        authorization_url: field_string(&data, "authorization_url"),
        access_code: field_string(&data, "access_code"),
        reference: field_string(&data, "reference"),
    })
}

pub fn verify_outcome(reply: &GatewayReply) -> AppResult<VerifyResult> {
    if !is_success(reply) {
        return Err(upstream_error(reply, "Failed to verify payment"));
    }

    let data = reply.body.get("data").cloned().unwrap_or(Value::Null);
    let minor = data.get("amount").and_then(Value::as_f64).unwrap_or(0.0);
    let metadata = data
        .get("metadata")
        .filter(|metadata| !metadata.is_null())
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()));

    Ok(VerifyResult {
        success: true,
        status: field_string(&data, "status"),
        amount: amount::to_major_units(minor),
        reference: field_string(&data, "reference"),
        metadata,
    })
}

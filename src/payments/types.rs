//! Request and result payloads for the payment operations.

use serde::Serialize;
use serde_json::Value;

/// Currency code attached to every initiate call. The bridge only charges in
/// South African Rand.
pub const CURRENCY: &str = "ZAR";

/// Normalized initiate request produced by the validator.
#[derive(Debug, Clone, PartialEq)]
pub struct InitiateRequest {
    pub email: String,
    /// Major-unit amount (rand), strictly positive.
    pub amount: f64,
    /// Redirect target after checkout; empty when the caller omitted it.
    pub callback_url: String,
    /// Arbitrary caller metadata forwarded to Paystack verbatim.
    pub metadata: Value,
}

/// Normalized verify request produced by the validator.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyRequest {
    pub reference: String,
}

/// Caller-facing outcome of a successful initiate call.
///
/// Fields are echoed from the gateway; a field Paystack did not return
/// serializes as `null` rather than failing the whole call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InitiateResult {
    pub success: bool,
    pub authorization_url: Option<String>,
    pub access_code: Option<String>,
    pub reference: Option<String>,
}

/// Caller-facing outcome of a successful verify call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifyResult {
    pub success: bool,
    pub status: Option<String>,
    /// Major-unit amount, converted back from the gateway's minor unit.
    pub amount: f64,
    pub reference: Option<String>,
    /// Metadata stored with the transaction; `{}` when Paystack has none.
    pub metadata: Value,
}

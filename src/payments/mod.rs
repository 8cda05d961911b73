//! The two payment operations: validated, stateless bridges to Paystack.
//!
//! Each operation runs the same pipeline: validate caller input, call the
//! gateway once, map the reply. Validation failures never reach the network,
//! and a missing credential is reported before any call is attempted.
//! Initiation is not idempotent upstream (each call creates a new
//! transaction); verification of the same reference is safe to repeat.

pub mod gateway;
pub mod mapper;
pub mod types;
pub mod validate;

use serde_json::{json, Value};
use tracing::{error, info};

use crate::amount;
use crate::error::{AppError, AppResult};
use self::gateway::{GatewayError, PaystackGateway};
use self::types::{InitiateResult, VerifyResult, CURRENCY};

fn gateway_failure(context: &str, err: GatewayError) -> AppError {
    match err {
        GatewayError::MissingCredential => {
            AppError::failed_precondition("Paystack secret key not configured")
        }
        other => AppError::internal(format!("{context}: {other}")),
    }
}

/// Initializes a Paystack transaction for the caller.
///
/// The caller supplies the amount in the major unit (rand); Paystack is
/// called with the equivalent minor-unit (kobo) amount and the fixed
/// currency code.
pub async fn initiate_payment(
    gateway: &PaystackGateway,
    payload: &Value,
) -> AppResult<InitiateResult> {
    let request = validate::initiate_request(payload)?;
    info!(
        email = %request.email,
        amount = request.amount,
        "initiating Paystack payment"
    );

    let body = json!({
        "email": request.email,
        "amount": amount::to_minor_units(request.amount),
        "currency": CURRENCY,
        "callback_url": request.callback_url,
        "metadata": request.metadata,
    });

    let reply = gateway
        .initialize_transaction(&body)
        .await
        .map_err(|err| gateway_failure("Error initializing payment", err))?;

    mapper::initiate_outcome(&reply).inspect_err(|err| error!("{}", err.message))
}

/// Looks up the current state of a transaction by reference.
pub async fn verify_payment(gateway: &PaystackGateway, payload: &Value) -> AppResult<VerifyResult> {
    let request = validate::verify_request(payload)?;
    info!(reference = %request.reference, "verifying Paystack payment");

    let reply = gateway
        .verify_transaction(&request.reference)
        .await
        .map_err(|err| gateway_failure("Error verifying payment", err))?;

    mapper::verify_outcome(&reply).inspect_err(|err| error!("{}", err.message))
}

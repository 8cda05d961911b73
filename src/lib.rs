//! Stateless bridge between callers and the Paystack transaction API.
//!
//! Exposes exactly two operations, payment initiation and payment
//! verification. Each request is validated, forwarded to Paystack once, and
//! the reply is normalized into a uniform success/error contract. Nothing is
//! persisted and nothing is retried; Paystack remains the sole source of
//! truth for transaction state.

pub mod amount;
pub mod api;
pub mod config;
pub mod error;
pub mod payments;

//! # Vega Fee Calculator
//!
//! Processing-fee and contribution-limit arithmetic for the Vega donation
//! engine. Every place that needs to know "how much do we charge the donor"
//! goes through this crate: the donation contract, the fee-coverage
//! breakdown shown next to the checkbox, and the form-state reducer.
//!
//! ## Units
//!
//! - Amounts are `i128` minor currency units (cents).
//! - Processor rates are `u32` basis points (1 bps = 0.01 %).
//!
//! ## Fee Model
//!
//! The processor deducts `total × rate + fixed` from every charge. To make
//! the campaign net exactly `net`, the donor is charged
//!
//! ```text
//! total = (net + fixed) / (1 − rate)        rounded half-up to the cent
//! ```
//!
//! and the total is never allowed above the contribution limit.

#![cfg_attr(not(test), no_std)]

pub mod calculator;
pub mod coverage;
pub mod errors;
pub mod form;
pub mod model;

pub use calculator::{apply_limit, clamp_to_limit, compute_fee_for_net, net_after_fees};
pub use coverage::{describe_coverage, FeeCoverage, PartialCoverage};
pub use errors::FeeError;
pub use form::{reduce, FormEvent, FormState, MIN_PREFILL_AMOUNT, PRESET_AMOUNTS};
pub use model::{
    validate_limit, ChargeResult, DonationFrequency, FeeModel, FeeQuote, BPS_DENOMINATOR,
    DEFAULT_FIXED_FEE, DEFAULT_RATE_BPS, FEDERAL_CONTRIBUTION_LIMIT, MAX_AMOUNT, MIN_CHARGE,
};

#[cfg(test)]
mod form_test;

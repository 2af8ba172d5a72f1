//! Value types shared by the calculator, the form reducer and the
//! donation contract.

use soroban_sdk::contracttype;

use crate::errors::FeeError;

/// Basis-point denominator (100 %).
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Standard card processing rate: 2.9 %.
pub const DEFAULT_RATE_BPS: u32 = 290;

/// Standard per-charge fixed fee: $0.30.
pub const DEFAULT_FIXED_FEE: i128 = 30;

/// Federal per-election individual contribution limit: $3,500.00.
pub const FEDERAL_CONTRIBUTION_LIMIT: i128 = 350_000;

/// Smallest charge the processor accepts: $0.50.
pub const MIN_CHARGE: i128 = 50;

/// Largest fixed fee or contribution limit a configuration may carry.
/// Keeps every intermediate product of the fee formula inside `i128`.
pub const MAX_AMOUNT: i128 = 10i128.pow(24);

/// Percentage-plus-fixed processor fee.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FeeModel {
    /// Share of the total charge kept by the processor, in bps. Must be below 10 000.
    pub rate_bps: u32,
    /// Flat fee per charge in minor units. Must be non-negative.
    pub fixed: i128,
}

impl FeeModel {
    pub const fn new(rate_bps: u32, fixed: i128) -> Self {
        Self { rate_bps, fixed }
    }

    /// `0 ≤ rate < 1` and `0 ≤ fixed ≤ MAX_AMOUNT`.
    pub fn validate(&self) -> Result<(), FeeError> {
        let rate_ok = (self.rate_bps as i128) < BPS_DENOMINATOR;
        if !rate_ok || !(0..=MAX_AMOUNT).contains(&self.fixed) {
            return Err(FeeError::InvalidFeeModel);
        }
        Ok(())
    }
}

impl Default for FeeModel {
    fn default() -> Self {
        Self::new(DEFAULT_RATE_BPS, DEFAULT_FIXED_FEE)
    }
}

/// Contribution limits must be positive and at most [`MAX_AMOUNT`].
pub fn validate_limit(limit: i128) -> Result<(), FeeError> {
    if limit <= 0 || limit > MAX_AMOUNT {
        return Err(FeeError::InvalidLimit);
    }
    Ok(())
}

/// Output of the inverse fee function.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FeeQuote {
    /// Fee to add on top of the net amount.
    pub fee: i128,
    /// Amount to charge so the campaign nets the requested amount.
    pub total: i128,
}

/// What the donor is charged for a single donation.
///
/// Always satisfies `total_amount == base_amount + fee_amount`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChargeResult {
    /// Amount the donor asked to give.
    pub base_amount: i128,
    /// Processing fee the donor is covering.
    pub fee_amount: i128,
    /// Amount actually charged.
    pub total_amount: i128,
    /// `false` only when the limit forced partial fee coverage.
    pub fee_fully_covered: bool,
}

impl ChargeResult {
    /// A charge with no fee added.
    pub const fn without_fee(base_amount: i128) -> Self {
        Self {
            base_amount,
            fee_amount: 0,
            total_amount: base_amount,
            fee_fully_covered: true,
        }
    }
}

/// How often a donation repeats.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DonationFrequency {
    OneTime,
    Monthly,
}

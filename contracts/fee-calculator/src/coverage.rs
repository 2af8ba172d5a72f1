//! Fee-coverage breakdown: what the donor sees next to the
//! "cover the processing fee" option.

use crate::calculator::{apply_limit, compute_fee_for_net};
use crate::errors::FeeError;
use crate::model::FeeModel;

/// Amounts shown when the limit only allows part of the fee.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PartialCoverage {
    /// Fee actually added to the charge (`limit − base`).
    pub covered: i128,
    /// Fee that would make the campaign whole.
    pub ideal: i128,
    /// `ideal − covered`, never negative.
    pub uncovered: i128,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FeeCoverage {
    /// Donor opted out of covering the fee.
    Declined,
    /// Nothing to cover yet (no amount entered).
    NotApplicable,
    /// The whole fee is covered; 100 % of the donation reaches the campaign.
    Full(i128),
    /// Only part of the fee fits under the contribution limit.
    Partial(PartialCoverage),
    /// The base amount is already at the limit.
    Unavailable,
}

impl FeeCoverage {
    /// Fee added to the charge under this coverage.
    pub fn fee_charged(&self) -> i128 {
        match self {
            FeeCoverage::Full(fee) => *fee,
            FeeCoverage::Partial(partial) => partial.covered,
            _ => 0,
        }
    }
}

/// Describe how much of the processing fee the donor's charge covers.
pub fn describe_coverage(
    base_amount: i128,
    model: &FeeModel,
    limit: i128,
    cover_fee: bool,
) -> Result<FeeCoverage, FeeError> {
    let charge = apply_limit(base_amount, model, limit, cover_fee)?;
    let base = charge.base_amount;

    if base == limit {
        return Ok(FeeCoverage::Unavailable);
    }
    if !cover_fee {
        return Ok(FeeCoverage::Declined);
    }
    if base == 0 {
        return Ok(FeeCoverage::NotApplicable);
    }
    if charge.fee_fully_covered {
        return Ok(FeeCoverage::Full(charge.fee_amount));
    }

    let ideal = compute_fee_for_net(base, model).fee;
    Ok(FeeCoverage::Partial(PartialCoverage {
        covered: charge.fee_amount,
        ideal,
        uncovered: (ideal - charge.fee_amount).max(0),
    }))
}

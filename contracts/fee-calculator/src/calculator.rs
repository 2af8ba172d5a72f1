//! # Fee and Limit Calculation
//!
//! The single home of the fee formula. Everything here is pure integer
//! arithmetic on minor units; identical inputs always give identical
//! outputs.
//!
//! ### Inverse fee
//!
//! ```text
//! total = round_half_up((net + fixed) × 10 000 / (10 000 − rate_bps))
//! fee   = total − net
//! ```
//!
//! ### Limit application
//!
//! | Condition                         | fee            | total        | fully covered |
//! |-----------------------------------|----------------|--------------|---------------|
//! | `base > limit`                    | error          | error        | -             |
//! | `!cover_fee` or `base ≤ 0`        | 0              | base         | yes           |
//! | `base == limit`                   | 0              | limit        | yes           |
//! | required total ≤ limit            | required − base| required     | yes           |
//! | required total > limit            | limit − base   | limit        | no            |

use crate::errors::FeeError;
use crate::model::{validate_limit, ChargeResult, FeeModel, FeeQuote, BPS_DENOMINATOR};

/// `numerator / denominator` rounded half-up. Both operands must be positive.
/// Saturates instead of overflowing.
fn div_round_half_up(numerator: i128, denominator: i128) -> i128 {
    numerator.saturating_mul(2).saturating_add(denominator) / (2 * denominator)
}

/// Fee and total needed so that the campaign nets exactly `net` after the
/// processor takes its cut.
///
/// Returns a zero quote for `net ≤ 0`. Rounding to the cent can leave the
/// collected net one cent away from `net`; that is accepted as is.
/// Exact for amounts up to [`crate::model::MAX_AMOUNT`]; larger inputs saturate rather
/// than panic.
///
/// `model` must already be valid (see [`FeeModel::validate`]).
pub fn compute_fee_for_net(net: i128, model: &FeeModel) -> FeeQuote {
    debug_assert!(model.validate().is_ok(), "fee model must be validated");
    if net <= 0 {
        return FeeQuote { fee: 0, total: 0 };
    }
    let kept_bps = BPS_DENOMINATOR - model.rate_bps as i128;
    let numerator = net.saturating_add(model.fixed).saturating_mul(BPS_DENOMINATOR);
    let total = div_round_half_up(numerator, kept_bps);
    FeeQuote {
        fee: total.saturating_sub(net),
        total,
    }
}

/// Compute the charge for a donation of `base_amount` against `limit`.
///
/// Negative amounts are treated as zero. Returns
/// [`FeeError::LimitExceeded`] when the base amount alone is above the
/// limit; the fee pushing the total over the limit is not an error and
/// instead yields partial coverage.
pub fn apply_limit(
    base_amount: i128,
    model: &FeeModel,
    limit: i128,
    cover_fee: bool,
) -> Result<ChargeResult, FeeError> {
    model.validate()?;
    validate_limit(limit)?;

    let base = base_amount.max(0);
    if base > limit {
        return Err(FeeError::LimitExceeded);
    }
    // At the limit there is no room for any fee.
    if !cover_fee || base == 0 || base == limit {
        return Ok(ChargeResult::without_fee(base));
    }

    let required = compute_fee_for_net(base, model).total;
    if required <= limit {
        return Ok(ChargeResult {
            base_amount: base,
            fee_amount: required - base,
            total_amount: required,
            fee_fully_covered: true,
        });
    }

    Ok(ChargeResult {
        base_amount: base,
        fee_amount: limit - base,
        total_amount: limit,
        fee_fully_covered: false,
    })
}

/// Amount the campaign receives from a charge of `total` after the
/// processor's deduction. Never negative.
pub fn net_after_fees(total: i128, model: &FeeModel) -> i128 {
    debug_assert!(model.validate().is_ok(), "fee model must be validated");
    if total <= 0 {
        return 0;
    }
    let percentage =
        div_round_half_up(total.saturating_mul(model.rate_bps as i128), BPS_DENOMINATOR);
    total.saturating_sub(percentage).saturating_sub(model.fixed).max(0)
}

/// The clamp a caller applies after [`FeeError::LimitExceeded`].
pub fn clamp_to_limit(base_amount: i128, limit: i128) -> i128 {
    base_amount.max(0).min(limit.max(0))
}

//! # Donation Form State
//!
//! The donation form is modelled as an immutable [`FormState`] value and a
//! pure [`reduce`] function. Each user action is a [`FormEvent`]; reducing
//! it produces the next state with the charge and fee coverage already
//! recomputed, so a renderer never has to re-derive either.
//!
//! ## Amount selection
//!
//! - A preset and a custom amount are mutually exclusive; choosing one
//!   clears the other.
//! - Custom amounts above the contribution limit are clamped to the limit
//!   and flagged with `amount_clamped`.
//! - Prefill values arrive in minor units; anything under $1.00 is ignored.
//!
//! ## Fee option
//!
//! Once the amount reaches the limit the fee option becomes unavailable
//! and `cover_fee` is switched off. It stays off until the donor turns it
//! back on.

use crate::calculator::{apply_limit, clamp_to_limit};
use crate::coverage::{describe_coverage, FeeCoverage};
use crate::errors::FeeError;
use crate::model::{ChargeResult, DonationFrequency, FeeModel};

/// Preset buttons: $25, $50, $100, $250, $500, $1,000, $3,500.
pub const PRESET_AMOUNTS: [i128; 7] = [2_500, 5_000, 10_000, 25_000, 50_000, 100_000, 350_000];

/// Smallest prefill amount accepted ($1.00).
pub const MIN_PREFILL_AMOUNT: i128 = 100;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormEvent {
    PresetSelected(i128),
    CustomAmountEntered(i128),
    CoverFeeToggled(bool),
    FrequencyChanged(DonationFrequency),
    /// Amount supplied from outside the form (e.g. a link), in minor units.
    Prefilled(i128),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormState {
    pub selected_preset: Option<i128>,
    pub custom_amount: i128,
    pub cover_fee: bool,
    pub fee_option_available: bool,
    pub frequency: DonationFrequency,
    /// Set when the last custom amount was above the limit and got clamped.
    pub amount_clamped: bool,
    pub charge: ChargeResult,
    pub coverage: FeeCoverage,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            selected_preset: None,
            custom_amount: 0,
            cover_fee: true,
            fee_option_available: true,
            frequency: DonationFrequency::OneTime,
            amount_clamped: false,
            charge: ChargeResult::without_fee(0),
            coverage: FeeCoverage::NotApplicable,
        }
    }

    /// The preset if one is selected, otherwise the custom amount.
    pub fn base_amount(&self) -> i128 {
        self.selected_preset.unwrap_or(self.custom_amount)
    }

    /// A donation can be submitted once the charge clears the processor minimum.
    pub fn is_submittable(&self, min_charge: i128) -> bool {
        self.charge.total_amount >= min_charge
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply `event` to `state` and recompute the derived fields.
///
/// Errors only when the fee model or limit is invalid, or when a selected
/// preset is itself above the limit.
pub fn reduce(
    state: &FormState,
    event: FormEvent,
    model: &FeeModel,
    limit: i128,
) -> Result<FormState, FeeError> {
    let mut next = state.clone();

    match event {
        FormEvent::PresetSelected(amount) => select_preset(&mut next, amount),
        FormEvent::CustomAmountEntered(amount) => enter_custom(&mut next, amount, limit),
        FormEvent::CoverFeeToggled(cover_fee) => {
            if state.fee_option_available {
                next.cover_fee = cover_fee;
            }
        }
        FormEvent::FrequencyChanged(frequency) => next.frequency = frequency,
        FormEvent::Prefilled(amount) => {
            if amount < MIN_PREFILL_AMOUNT {
                return Ok(next);
            }
            if PRESET_AMOUNTS.contains(&amount) {
                select_preset(&mut next, amount);
            } else {
                enter_custom(&mut next, amount, limit);
            }
        }
    }

    recompute(next, model, limit)
}

fn select_preset(state: &mut FormState, amount: i128) {
    state.selected_preset = Some(amount.max(0));
    state.custom_amount = 0;
    state.amount_clamped = false;
}

fn enter_custom(state: &mut FormState, amount: i128, limit: i128) {
    state.selected_preset = None;
    state.amount_clamped = amount > limit;
    state.custom_amount = clamp_to_limit(amount, limit);
}

fn recompute(mut state: FormState, model: &FeeModel, limit: i128) -> Result<FormState, FeeError> {
    let base = state.base_amount();
    state.fee_option_available = base < limit;
    if !state.fee_option_available {
        state.cover_fee = false;
    }
    state.charge = apply_limit(base, model, limit, state.cover_fee)?;
    state.coverage = describe_coverage(base, model, limit, state.cover_fee)?;
    Ok(state)
}

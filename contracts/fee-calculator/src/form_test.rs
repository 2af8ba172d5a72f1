//! Tests for the donation form reducer.

use super::*;

const LIMIT: i128 = FEDERAL_CONTRIBUTION_LIMIT;

fn step(state: &FormState, event: FormEvent) -> FormState {
    reduce(state, event, &FeeModel::default(), LIMIT).unwrap()
}

fn run(events: &[FormEvent]) -> FormState {
    events
        .iter()
        .fold(FormState::new(), |state, event| step(&state, *event))
}

#[test]
fn test_initial_state() {
    let state = FormState::new();
    assert_eq!(state.base_amount(), 0);
    assert!(state.cover_fee);
    assert!(state.fee_option_available);
    assert_eq!(state.frequency, DonationFrequency::OneTime);
    assert_eq!(state.charge, ChargeResult::without_fee(0));
    assert!(!state.is_submittable(MIN_CHARGE));
}

#[test]
fn test_preset_selection_computes_charge() {
    let state = run(&[FormEvent::PresetSelected(10_000)]);
    assert_eq!(state.selected_preset, Some(10_000));
    assert_eq!(state.charge.total_amount, 10_330);
    assert_eq!(state.coverage, FeeCoverage::Full(330));
    assert!(state.is_submittable(MIN_CHARGE));
}

#[test]
fn test_custom_amount_clears_preset() {
    let state = run(&[
        FormEvent::PresetSelected(5_000),
        FormEvent::CustomAmountEntered(7_500),
    ]);
    assert_eq!(state.selected_preset, None);
    assert_eq!(state.custom_amount, 7_500);
    assert_eq!(state.base_amount(), 7_500);
}

#[test]
fn test_preset_clears_custom_amount() {
    let state = run(&[
        FormEvent::CustomAmountEntered(7_500),
        FormEvent::PresetSelected(2_500),
    ]);
    assert_eq!(state.custom_amount, 0);
    assert_eq!(state.base_amount(), 2_500);
}

#[test]
fn test_custom_amount_above_limit_is_clamped() {
    let state = run(&[FormEvent::CustomAmountEntered(500_000)]);
    assert!(state.amount_clamped);
    assert_eq!(state.custom_amount, LIMIT);
    assert_eq!(state.charge.total_amount, LIMIT);
    assert_eq!(state.charge.fee_amount, 0);

    let state = step(&state, FormEvent::CustomAmountEntered(1_000));
    assert!(!state.amount_clamped);
}

#[test]
fn test_negative_custom_amount_treated_as_zero() {
    let state = run(&[FormEvent::CustomAmountEntered(-300)]);
    assert_eq!(state.custom_amount, 0);
    assert_eq!(state.charge.total_amount, 0);
    assert_eq!(state.coverage, FeeCoverage::NotApplicable);
}

#[test]
fn test_fee_option_disabled_at_limit() {
    let state = run(&[FormEvent::PresetSelected(350_000)]);
    assert!(!state.fee_option_available);
    assert!(!state.cover_fee);
    assert_eq!(state.coverage, FeeCoverage::Unavailable);

    // Toggling while unavailable has no effect.
    let state = step(&state, FormEvent::CoverFeeToggled(true));
    assert!(!state.cover_fee);
    assert_eq!(state.charge.total_amount, LIMIT);
}

#[test]
fn test_fee_option_stays_off_after_leaving_limit() {
    let state = run(&[
        FormEvent::PresetSelected(350_000),
        FormEvent::PresetSelected(10_000),
    ]);
    assert!(state.fee_option_available);
    assert!(!state.cover_fee);
    assert_eq!(state.charge.total_amount, 10_000);

    let state = step(&state, FormEvent::CoverFeeToggled(true));
    assert!(state.cover_fee);
    assert_eq!(state.charge.total_amount, 10_330);
}

#[test]
fn test_toggle_cover_fee_off() {
    let state = run(&[
        FormEvent::PresetSelected(10_000),
        FormEvent::CoverFeeToggled(false),
    ]);
    assert_eq!(state.charge.total_amount, 10_000);
    assert_eq!(state.coverage, FeeCoverage::Declined);
}

#[test]
fn test_partial_coverage_near_limit() {
    let state = run(&[FormEvent::CustomAmountEntered(345_000)]);
    assert!(state.fee_option_available);
    assert!(!state.charge.fee_fully_covered);
    assert_eq!(state.charge.total_amount, LIMIT);
    match state.coverage {
        FeeCoverage::Partial(partial) => {
            assert_eq!(partial.covered, 5_000);
            assert_eq!(partial.uncovered, 5_335);
        }
        other => panic!("expected partial coverage, got {other:?}"),
    }
}

#[test]
fn test_frequency_change_keeps_charge() {
    let state = run(&[
        FormEvent::PresetSelected(2_500),
        FormEvent::FrequencyChanged(DonationFrequency::Monthly),
    ]);
    assert_eq!(state.frequency, DonationFrequency::Monthly);
    assert_eq!(state.base_amount(), 2_500);
}

#[test]
fn test_prefill_matching_preset() {
    let state = run(&[FormEvent::Prefilled(25_000)]);
    assert_eq!(state.selected_preset, Some(25_000));
    assert_eq!(state.custom_amount, 0);
}

#[test]
fn test_prefill_custom_amount() {
    let state = run(&[FormEvent::Prefilled(4_250)]);
    assert_eq!(state.selected_preset, None);
    assert_eq!(state.custom_amount, 4_250);
}

#[test]
fn test_prefill_below_minimum_ignored() {
    let before = run(&[FormEvent::PresetSelected(5_000)]);
    let after = step(&before, FormEvent::Prefilled(MIN_PREFILL_AMOUNT - 1));
    assert_eq!(before, after);
}

#[test]
fn test_preset_above_lower_limit_surfaces_error() {
    let result = reduce(
        &FormState::new(),
        FormEvent::PresetSelected(350_000),
        &FeeModel::default(),
        100_000,
    );
    assert_eq!(result, Err(FeeError::LimitExceeded));
}

#[test]
fn test_reduce_does_not_mutate_input() {
    let state = run(&[FormEvent::PresetSelected(5_000)]);
    let snapshot = state.clone();
    let _ = step(&state, FormEvent::CustomAmountEntered(9_000));
    assert_eq!(state, snapshot);
}

#[test]
fn test_presets_are_within_limit() {
    for amount in PRESET_AMOUNTS {
        assert!(amount <= LIMIT);
        let state = run(&[FormEvent::PresetSelected(amount)]);
        assert!(state.charge.total_amount <= LIMIT);
    }
}

//! Per-donor, per-election contribution ledger and campaign totals.
//!
//! The contribution limit caps the sum of every charge a donor makes in one
//! election, so each new charge is computed against the remaining headroom
//! rather than the full limit.

use soroban_sdk::{Address, Env, String};

use crate::campaign::{load_record, store_record, DataKey};

/// Total charged to `donor` for `election` so far.
pub fn get_contributed(env: &Env, donor: &Address, election: &String) -> i128 {
    load_record(env, &DataKey::Contributed(donor.clone(), election.clone())).unwrap_or(0)
}

/// `limit − contributed`, never negative.
pub fn remaining(env: &Env, donor: &Address, election: &String, limit: i128) -> i128 {
    (limit - get_contributed(env, donor, election)).max(0)
}

/// Add a collected charge to the donor's election total and the campaign
/// totals. Returns the donor's new election total.
pub fn record(env: &Env, donor: &Address, election: &String, amount: i128) -> i128 {
    let key = DataKey::Contributed(donor.clone(), election.clone());
    let total = get_contributed(env, donor, election) + amount;
    store_record(env, &key, &total);

    let raised = get_total_raised(env) + amount;
    env.storage().instance().set(&DataKey::TotalRaised, &raised);

    let count = get_donation_count(env) + 1;
    env.storage().instance().set(&DataKey::DonationCount, &count);

    total
}

pub fn get_total_raised(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalRaised)
        .unwrap_or(0)
}

pub fn get_donation_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::DonationCount)
        .unwrap_or(0)
}

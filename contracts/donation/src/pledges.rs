//! # Monthly Pledges
//!
//! A pledge charges its first installment when created and one more every
//! `installment_interval` seconds after that. Later installments are
//! pulled with `transfer_from`, so the donor must keep an allowance for the
//! contract on the campaign token.
//!
//! A pledge ends when the donor cancels it, or when an installment can no
//! longer reach the minimum charge: the donor's remaining headroom for the
//! election is too small, or the minimum was raised above the pledge.

use soroban_sdk::{contracttype, Address, Env, String};

use crate::campaign::{load_record, store_record, DataKey};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Pledge {
    pub id: u64,
    pub donor: Address,
    pub election: String,
    /// Amount the campaign should net each month.
    pub base_amount: i128,
    pub cover_fee: bool,
    /// Ledger timestamp from which the next installment can be collected.
    pub next_due: u64,
    /// Installments collected so far, including the first.
    pub installments: u32,
    pub active: bool,
}

pub fn get_pledge(env: &Env, id: u64) -> Option<Pledge> {
    load_record(env, &DataKey::Pledge(id))
}

pub fn set_pledge(env: &Env, pledge: &Pledge) {
    store_record(env, &DataKey::Pledge(pledge.id), pledge);
}

/// Reserve the next pledge id.
pub fn next_pledge_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::NextPledgeId)
        .unwrap_or(1);
    env.storage().instance().set(&DataKey::NextPledgeId, &(id + 1));
    id
}

pub fn get_active_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ActivePledges)
        .unwrap_or(0)
}

pub fn increment_active(env: &Env) {
    let count = get_active_count(env) + 1;
    env.storage().instance().set(&DataKey::ActivePledges, &count);
}

pub fn decrement_active(env: &Env) {
    let count = get_active_count(env).saturating_sub(1);
    env.storage().instance().set(&DataKey::ActivePledges, &count);
}

/// Mark `pledge` inactive and store it.
pub fn close(env: &Env, pledge: &mut Pledge) {
    pledge.active = false;
    set_pledge(env, pledge);
    decrement_active(env);
}

//! # Structured Event Emissions for Donations
//!
//! Every state change in the donation contract publishes an event so
//! off-chain indexers (receipts, compliance reports, dashboards) can follow
//! the campaign without reading contract storage.
//!
//! ## Event Types
//!
//! | Event            | Topic      | Description                                |
//! |------------------|------------|--------------------------------------------|
//! | DonationReceived | `don_rcv`  | A one-time donation or installment charged |
//! | PledgeCreated    | `plg_new`  | Monthly pledge started                     |
//! | PledgeCancelled  | `plg_cncl` | Donor cancelled a pledge                   |
//! | PledgeCompleted  | `plg_done` | Pledge closed, no installment can be paid  |
//! | ConfigChanged    | `cfg_chg`  | Campaign configuration updated             |
//! | Paused           | `paused`   | Donations halted                           |
//! | Unpaused         | `unpaus`   | Donations resumed                          |
//!
//! Donor compliance fields (name, address, employer) are never included.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};
use vega_fee_calculator::{ChargeResult, DonationFrequency, FeeModel};

use crate::campaign::CampaignConfig;
use crate::pledges::Pledge;

// ════════════════════════════════════════════════════════════════════
//  Event Topics
// ════════════════════════════════════════════════════════════════════

/// Topic for a charged one-time donation or pledge installment.
pub const TOPIC_DONATION_RECEIVED: Symbol = symbol_short!("don_rcv");
/// Topic for a new monthly pledge.
pub const TOPIC_PLEDGE_CREATED: Symbol = symbol_short!("plg_new");
/// Topic for a pledge cancelled by its donor.
pub const TOPIC_PLEDGE_CANCELLED: Symbol = symbol_short!("plg_cncl");
/// Topic for a pledge closed because no further installment can be paid.
pub const TOPIC_PLEDGE_COMPLETED: Symbol = symbol_short!("plg_done");
/// Topic for campaign configuration changes.
pub const TOPIC_CONFIG_CHANGED: Symbol = symbol_short!("cfg_chg");
/// Topic for the contract being paused.
pub const TOPIC_PAUSED: Symbol = symbol_short!("paused");
/// Topic for the contract being unpaused.
pub const TOPIC_UNPAUSED: Symbol = symbol_short!("unpaus");

// ════════════════════════════════════════════════════════════════════
//  Event Data Structures
// ════════════════════════════════════════════════════════════════════

#[contracttype]
#[derive(Clone, Debug)]
pub struct DonationReceivedEvent {
    pub donation_id: u64,
    pub donor: Address,
    pub election: String,
    pub base_amount: i128,
    pub fee_amount: i128,
    pub total_amount: i128,
    /// `false` when the contribution limit cut the covered fee short.
    pub fee_fully_covered: bool,
    pub frequency: DonationFrequency,
    /// Set for pledge installments.
    pub pledge_id: Option<u64>,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PledgeEvent {
    pub pledge_id: u64,
    pub donor: Address,
    pub election: String,
    pub base_amount: i128,
    pub installments: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ConfigChangedEvent {
    pub treasury: Address,
    pub fee_model: FeeModel,
    pub contribution_limit: i128,
    pub min_charge: i128,
    pub installment_interval: u64,
    pub changed_by: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PauseChangedEvent {
    pub changed_by: Address,
}

// ════════════════════════════════════════════════════════════════════
//  Event Emission Functions
// ════════════════════════════════════════════════════════════════════

/// Emit a donation received event, keyed by donor.
pub fn emit_donation_received(
    env: &Env,
    donation_id: u64,
    donor: &Address,
    election: &String,
    charge: &ChargeResult,
    frequency: DonationFrequency,
    pledge_id: Option<u64>,
) {
    let event = DonationReceivedEvent {
        donation_id,
        donor: donor.clone(),
        election: election.clone(),
        base_amount: charge.base_amount,
        fee_amount: charge.fee_amount,
        total_amount: charge.total_amount,
        fee_fully_covered: charge.fee_fully_covered,
        frequency,
        pledge_id,
    };
    env.events()
        .publish((TOPIC_DONATION_RECEIVED, donor.clone()), event);
}

fn pledge_event(pledge: &Pledge) -> PledgeEvent {
    PledgeEvent {
        pledge_id: pledge.id,
        donor: pledge.donor.clone(),
        election: pledge.election.clone(),
        base_amount: pledge.base_amount,
        installments: pledge.installments,
    }
}

pub fn emit_pledge_created(env: &Env, pledge: &Pledge) {
    env.events()
        .publish((TOPIC_PLEDGE_CREATED, pledge.donor.clone()), pledge_event(pledge));
}

pub fn emit_pledge_cancelled(env: &Env, pledge: &Pledge) {
    env.events()
        .publish((TOPIC_PLEDGE_CANCELLED, pledge.donor.clone()), pledge_event(pledge));
}

/// Emitted when a pledge stops because no installment can reach the minimum charge.
pub fn emit_pledge_completed(env: &Env, pledge: &Pledge) {
    env.events()
        .publish((TOPIC_PLEDGE_COMPLETED, pledge.donor.clone()), pledge_event(pledge));
}

pub fn emit_config_changed(env: &Env, config: &CampaignConfig, changed_by: &Address) {
    let event = ConfigChangedEvent {
        treasury: config.treasury.clone(),
        fee_model: config.fee_model,
        contribution_limit: config.contribution_limit,
        min_charge: config.min_charge,
        installment_interval: config.installment_interval,
        changed_by: changed_by.clone(),
    };
    env.events().publish((TOPIC_CONFIG_CHANGED,), event);
}

pub fn emit_paused(env: &Env, changed_by: &Address) {
    let event = PauseChangedEvent {
        changed_by: changed_by.clone(),
    };
    env.events().publish((TOPIC_PAUSED,), event);
}

pub fn emit_unpaused(env: &Env, changed_by: &Address) {
    let event = PauseChangedEvent {
        changed_by: changed_by.clone(),
    };
    env.events().publish((TOPIC_UNPAUSED,), event);
}

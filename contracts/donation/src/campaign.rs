//! # Campaign Configuration and Storage
//!
//! Holds the unified storage key enum, the on-chain [`CampaignConfig`],
//! admin helpers and the pause switch.
//!
//! ## Defaults
//!
//! | Setting              | Default             |
//! |----------------------|---------------------|
//! | Fee model            | 290 bps + 30        |
//! | Contribution limit   | 350 000 (per election) |
//! | Minimum charge       | 50                  |
//! | Installment interval | 30 days             |

use soroban_sdk::{contracttype, Address, Env, IntoVal, String, TryFromVal, Val};
use vega_fee_calculator::{
    validate_limit, FeeModel, FEDERAL_CONTRIBUTION_LIMIT, MIN_CHARGE,
};

use crate::errors::DonationError;

/// Seconds between monthly pledge installments.
pub const DEFAULT_INSTALLMENT_INTERVAL: u64 = 30 * 24 * 60 * 60;

/// Ledgers per day at a 5 s close time.
const DAY_IN_LEDGERS: u32 = 17_280;

/// Persistent records are topped up once their TTL falls below this.
pub const RECORD_TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;

/// TTL a persistent record is extended to on every write.
pub const RECORD_TTL_EXTEND_TO: u32 = 120 * DAY_IN_LEDGERS;

// ════════════════════════════════════════════════════════════════════
//  Storage types
// ════════════════════════════════════════════════════════════════════

/// Unified storage key enum for the contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // Instance storage holds campaign-wide values only. Records keyed by
    // id or address live in persistent storage, see `load_record`.

    // ── Campaign ────────────────────────────────────────────────
    Admin,
    /// Active `CampaignConfig`.
    Config,
    Paused,

    // ── Donations ───────────────────────────────────────────────
    NextDonationId,
    /// `DonationRecord` by id.
    Donation(u64),
    DonationCount,
    /// Sum of every charge collected, in minor units.
    TotalRaised,
    /// Total charged to a donor for an election: (donor, election).
    Contributed(Address, String),
    /// Latest compliance record submitted by a donor.
    DonorProfile(Address),

    // ── Pledges ─────────────────────────────────────────────────
    NextPledgeId,
    /// `Pledge` by id.
    Pledge(u64),
    ActivePledges,
}

/// On-chain campaign configuration.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignConfig {
    /// Token donations are paid in.
    pub token: Address,
    /// Campaign account receiving every charge.
    pub treasury: Address,
    /// Processor fee used when a donor covers the fee.
    pub fee_model: FeeModel,
    /// Ceiling on total charges per donor per election.
    pub contribution_limit: i128,
    /// Smallest charge accepted.
    pub min_charge: i128,
    /// Seconds between pledge installments.
    pub installment_interval: u64,
}

impl CampaignConfig {
    pub fn with_defaults(token: Address, treasury: Address) -> Self {
        Self {
            token,
            treasury,
            fee_model: FeeModel::default(),
            contribution_limit: FEDERAL_CONTRIBUTION_LIMIT,
            min_charge: MIN_CHARGE,
            installment_interval: DEFAULT_INSTALLMENT_INTERVAL,
        }
    }

    pub fn validate(&self) -> Result<(), DonationError> {
        self.fee_model.validate()?;
        validate_limit(self.contribution_limit)?;
        if self.min_charge <= 0 || self.min_charge > self.contribution_limit {
            return Err(DonationError::InvalidMinimumCharge);
        }
        if self.installment_interval == 0 {
            return Err(DonationError::InvalidInterval);
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════
//  Persistent records
// ════════════════════════════════════════════════════════════════════

/// Read a per-donor or per-id record.
pub fn load_record<V: TryFromVal<Env, Val>>(env: &Env, key: &DataKey) -> Option<V> {
    env.storage().persistent().get(key)
}

/// Write a per-donor or per-id record and extend its TTL.
pub fn store_record<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    let storage = env.storage().persistent();
    storage.set(key, value);
    storage.extend_ttl(key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND_TO);
}

// ════════════════════════════════════════════════════════════════════
//  Admin helpers
// ════════════════════════════════════════════════════════════════════

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Result<Address, DonationError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(DonationError::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

/// Read + require_auth in one step.
pub fn require_admin(env: &Env) -> Result<Address, DonationError> {
    let admin = get_admin(env)?;
    admin.require_auth();
    Ok(admin)
}

// ════════════════════════════════════════════════════════════════════
//  Config helpers
// ════════════════════════════════════════════════════════════════════

pub fn get_config(env: &Env) -> Result<CampaignConfig, DonationError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(DonationError::NotInitialized)
}

/// Validate and store `config`.
pub fn set_config(env: &Env, config: &CampaignConfig) -> Result<(), DonationError> {
    config.validate()?;
    env.storage().instance().set(&DataKey::Config, config);
    Ok(())
}

// ════════════════════════════════════════════════════════════════════
//  Pause
// ════════════════════════════════════════════════════════════════════

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn require_not_paused(env: &Env) -> Result<(), DonationError> {
    if is_paused(env) {
        return Err(DonationError::Paused);
    }
    Ok(())
}

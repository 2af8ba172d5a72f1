#![no_std]

//! # Vega Campaign Donation Contract
//!
//! Accepts donations to a political campaign in a Soroban token and routes
//! them to the campaign treasury.
//!
//! ## Charging
//!
//! Each charge is priced by `vega-fee-calculator`:
//!
//! 1. The donor's headroom is `contribution_limit − already given` for the
//!    election.
//! 2. If the donor covers the processing fee, the charge is grossed up so
//!    the campaign nets the requested amount, capped at the headroom.
//! 3. A base amount above the headroom is refused with
//!    [`DonationError::LimitExceeded`]; clients clamp and resubmit.
//!
//! ## Donation Types
//!
//! - **One-time**: [`DonationContract::donate`] transfers the charge directly.
//! - **Monthly**: [`DonationContract::create_pledge`] charges the first
//!   installment; [`DonationContract::collect_installment`] pulls each later
//!   one from the donor's allowance once it is due.
//!
//! ## Compliance
//!
//! Every donation carries a [`DonorInfo`] record. It is validated, kept as
//! the donor's latest profile, and never emitted in events.

use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env, String};
use vega_fee_calculator::{apply_limit, clamp_to_limit, ChargeResult, DonationFrequency, FeeModel};

pub mod campaign;
pub mod contributions;
pub mod donor;
pub mod errors;
pub mod events;
pub mod pledges;

pub use campaign::{CampaignConfig, DataKey, DEFAULT_INSTALLMENT_INTERVAL};
pub use donor::DonorInfo;
pub use errors::DonationError;
pub use pledges::Pledge;

#[cfg(test)]
mod testutils;

/// A collected charge.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct DonationRecord {
    pub id: u64,
    pub donor: Address,
    pub election: String,
    pub charge: ChargeResult,
    pub frequency: DonationFrequency,
    /// Pledge this installment belongs to, if any.
    pub pledge_id: Option<u64>,
    pub timestamp: u64,
}

/// Campaign-wide counters.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignStatus {
    pub paused: bool,
    pub donation_count: u64,
    pub total_raised: i128,
    pub active_pledges: u64,
}

/// How a charge reaches the treasury.
enum Payment {
    /// Donor authorizes this call; plain transfer.
    Direct,
    /// Pulled from the donor's allowance to this contract.
    Allowance,
}

#[contract]
pub struct DonationContract;

#[contractimpl]
impl DonationContract {
    // ── Initialization ──────────────────────────────────────────────

    /// One-time setup with default fee model and limits.
    ///
    /// * `admin`    – Address allowed to change configuration.
    /// * `token`    – Token donations are paid in.
    /// * `treasury` – Campaign account receiving donations.
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        treasury: Address,
    ) -> Result<(), DonationError> {
        if campaign::is_initialized(&env) {
            panic!("already initialized");
        }
        admin.require_auth();
        campaign::set_admin(&env, &admin);

        let config = CampaignConfig::with_defaults(token, treasury);
        campaign::set_config(&env, &config)?;
        events::emit_config_changed(&env, &config, &admin);
        Ok(())
    }

    // ── Admin: Configuration ────────────────────────────────────────

    /// Replace the processor fee model.
    pub fn configure_fees(env: Env, fee_model: FeeModel) -> Result<(), DonationError> {
        Self::update_config(&env, |config| config.fee_model = fee_model)
    }

    /// Set the per-donor, per-election contribution limit.
    pub fn set_contribution_limit(env: Env, limit: i128) -> Result<(), DonationError> {
        Self::update_config(&env, |config| config.contribution_limit = limit)
    }

    /// Set the smallest charge accepted. Must be positive and within the limit.
    pub fn set_min_charge(env: Env, min_charge: i128) -> Result<(), DonationError> {
        Self::update_config(&env, |config| config.min_charge = min_charge)
    }

    /// Set the number of seconds between pledge installments.
    pub fn set_installment_interval(env: Env, seconds: u64) -> Result<(), DonationError> {
        Self::update_config(&env, |config| config.installment_interval = seconds)
    }

    pub fn set_treasury(env: Env, treasury: Address) -> Result<(), DonationError> {
        Self::update_config(&env, |config| config.treasury = treasury)
    }

    /// Halt donations, pledge creation and installment collection.
    pub fn pause(env: Env) -> Result<(), DonationError> {
        let admin = campaign::require_admin(&env)?;
        campaign::set_paused(&env, true);
        events::emit_paused(&env, &admin);
        Ok(())
    }

    pub fn unpause(env: Env) -> Result<(), DonationError> {
        let admin = campaign::require_admin(&env)?;
        campaign::set_paused(&env, false);
        events::emit_unpaused(&env, &admin);
        Ok(())
    }

    // ── Donations ───────────────────────────────────────────────────

    /// Price a donation without charging it.
    ///
    /// The limit applied is the donor's remaining headroom for `election`.
    pub fn quote(
        env: Env,
        donor: Address,
        election: String,
        base_amount: i128,
        cover_fee: bool,
    ) -> Result<ChargeResult, DonationError> {
        let config = campaign::get_config(&env)?;
        let headroom = contributions::remaining(&env, &donor, &election, config.contribution_limit);
        if headroom == 0 {
            return Err(DonationError::ContributionLimitReached);
        }
        Ok(apply_limit(base_amount, &config.fee_model, headroom, cover_fee)?)
    }

    /// Charge a one-time donation and send it to the treasury.
    ///
    /// # Errors
    /// - `Paused`, `NotInitialized`
    /// - Donor field errors from [`donor::validate`]
    /// - `ContributionLimitReached` when the donor has no headroom left
    /// - `LimitExceeded` when `base_amount` is above the headroom
    /// - `BelowMinimumCharge`
    pub fn donate(
        env: Env,
        donor: Address,
        election: String,
        base_amount: i128,
        cover_fee: bool,
        donor_info: DonorInfo,
    ) -> Result<DonationRecord, DonationError> {
        campaign::require_not_paused(&env)?;
        donor.require_auth();
        donor::validate(&donor_info)?;

        let config = campaign::get_config(&env)?;
        let charge = Self::price(&env, &config, &donor, &election, base_amount, cover_fee)?;

        donor::set_profile(&env, &donor, &donor_info);
        Ok(Self::collect(
            &env,
            &config,
            &donor,
            &election,
            &charge,
            DonationFrequency::OneTime,
            None,
            Payment::Direct,
        ))
    }

    // ── Monthly pledges ─────────────────────────────────────────────

    /// Start a monthly pledge and charge its first installment.
    ///
    /// Later installments are pulled with `transfer_from`; the donor must
    /// approve this contract as a spender on the campaign token.
    pub fn create_pledge(
        env: Env,
        donor: Address,
        election: String,
        base_amount: i128,
        cover_fee: bool,
        donor_info: DonorInfo,
    ) -> Result<Pledge, DonationError> {
        campaign::require_not_paused(&env)?;
        donor.require_auth();
        donor::validate(&donor_info)?;

        let config = campaign::get_config(&env)?;
        let charge = Self::price(&env, &config, &donor, &election, base_amount, cover_fee)?;
        donor::set_profile(&env, &donor, &donor_info);

        let id = pledges::next_pledge_id(&env);
        Self::collect(
            &env,
            &config,
            &donor,
            &election,
            &charge,
            DonationFrequency::Monthly,
            Some(id),
            Payment::Direct,
        );

        let pledge = Pledge {
            id,
            donor,
            election,
            base_amount: charge.base_amount,
            cover_fee,
            next_due: env
                .ledger()
                .timestamp()
                .saturating_add(config.installment_interval),
            installments: 1,
            active: true,
        };
        pledges::set_pledge(&env, &pledge);
        pledges::increment_active(&env);
        events::emit_pledge_created(&env, &pledge);
        Ok(pledge)
    }

    /// Collect a due installment. Callable by anyone.
    ///
    /// The installment is re-priced against the donor's remaining headroom,
    /// clamping the base amount when the headroom is smaller. Returns `None`
    /// and closes the pledge once the installment can no longer reach the
    /// minimum charge, either because the headroom is exhausted or because
    /// the minimum was raised above the pledged amount.
    pub fn collect_installment(
        env: Env,
        pledge_id: u64,
    ) -> Result<Option<DonationRecord>, DonationError> {
        campaign::require_not_paused(&env)?;
        let mut pledge = pledges::get_pledge(&env, pledge_id).ok_or(DonationError::PledgeNotFound)?;
        if !pledge.active {
            return Err(DonationError::PledgeInactive);
        }
        if env.ledger().timestamp() < pledge.next_due {
            return Err(DonationError::PledgeNotDue);
        }

        let config = campaign::get_config(&env)?;
        let headroom = contributions::remaining(
            &env,
            &pledge.donor,
            &pledge.election,
            config.contribution_limit,
        );
        if headroom < config.min_charge {
            pledges::close(&env, &mut pledge);
            events::emit_pledge_completed(&env, &pledge);
            return Ok(None);
        }

        let base = clamp_to_limit(pledge.base_amount, headroom);
        let charge = apply_limit(base, &config.fee_model, headroom, pledge.cover_fee)?;
        // The minimum charge was raised above what this pledge can ever pay.
        if charge.total_amount < config.min_charge {
            pledges::close(&env, &mut pledge);
            events::emit_pledge_completed(&env, &pledge);
            return Ok(None);
        }

        let record = Self::collect(
            &env,
            &config,
            &pledge.donor,
            &pledge.election,
            &charge,
            DonationFrequency::Monthly,
            Some(pledge.id),
            Payment::Allowance,
        );

        pledge.installments += 1;
        pledge.next_due = pledge.next_due.saturating_add(config.installment_interval);
        pledges::set_pledge(&env, &pledge);
        Ok(Some(record))
    }

    /// Stop a pledge. Only the pledging donor may cancel.
    pub fn cancel_pledge(env: Env, donor: Address, pledge_id: u64) -> Result<(), DonationError> {
        donor.require_auth();
        let mut pledge = pledges::get_pledge(&env, pledge_id).ok_or(DonationError::PledgeNotFound)?;
        if pledge.donor != donor {
            return Err(DonationError::NotPledgeOwner);
        }
        if !pledge.active {
            return Err(DonationError::PledgeInactive);
        }
        pledges::close(&env, &mut pledge);
        events::emit_pledge_cancelled(&env, &pledge);
        Ok(())
    }

    // ── Read-only Queries ───────────────────────────────────────────

    pub fn get_admin(env: Env) -> Result<Address, DonationError> {
        campaign::get_admin(&env)
    }

    pub fn get_config(env: Env) -> Result<CampaignConfig, DonationError> {
        campaign::get_config(&env)
    }

    pub fn get_donation(env: Env, id: u64) -> Option<DonationRecord> {
        campaign::load_record(&env, &DataKey::Donation(id))
    }

    pub fn get_pledge(env: Env, id: u64) -> Option<Pledge> {
        pledges::get_pledge(&env, id)
    }

    /// Total charged to `donor` for `election`.
    pub fn get_contributed(env: Env, donor: Address, election: String) -> i128 {
        contributions::get_contributed(&env, &donor, &election)
    }

    /// How much more `donor` may be charged for `election`.
    pub fn get_remaining(env: Env, donor: Address, election: String) -> Result<i128, DonationError> {
        let config = campaign::get_config(&env)?;
        Ok(contributions::remaining(&env, &donor, &election, config.contribution_limit))
    }

    pub fn get_donor_profile(env: Env, donor: Address) -> Option<DonorInfo> {
        donor::get_profile(&env, &donor)
    }

    pub fn get_status(env: Env) -> CampaignStatus {
        CampaignStatus {
            paused: campaign::is_paused(&env),
            donation_count: contributions::get_donation_count(&env),
            total_raised: contributions::get_total_raised(&env),
            active_pledges: pledges::get_active_count(&env),
        }
    }
}

// ── Internal Helpers ────────────────────────────────────────────────

impl DonationContract {
    fn update_config(
        env: &Env,
        apply: impl FnOnce(&mut CampaignConfig),
    ) -> Result<(), DonationError> {
        let admin = campaign::require_admin(env)?;
        let mut config = campaign::get_config(env)?;
        apply(&mut config);
        campaign::set_config(env, &config)?;
        events::emit_config_changed(env, &config, &admin);
        Ok(())
    }

    /// Price a new donation against the donor's headroom and the minimum charge.
    fn price(
        env: &Env,
        config: &CampaignConfig,
        donor: &Address,
        election: &String,
        base_amount: i128,
        cover_fee: bool,
    ) -> Result<ChargeResult, DonationError> {
        let headroom = contributions::remaining(env, donor, election, config.contribution_limit);
        if headroom == 0 {
            return Err(DonationError::ContributionLimitReached);
        }
        let charge = apply_limit(base_amount, &config.fee_model, headroom, cover_fee)?;
        if charge.total_amount < config.min_charge {
            return Err(DonationError::BelowMinimumCharge);
        }
        Ok(charge)
    }

    /// Move the charge to the treasury and record it.
    #[allow(clippy::too_many_arguments)]
    fn collect(
        env: &Env,
        config: &CampaignConfig,
        donor: &Address,
        election: &String,
        charge: &ChargeResult,
        frequency: DonationFrequency,
        pledge_id: Option<u64>,
        payment: Payment,
    ) -> DonationRecord {
        let client = token::Client::new(env, &config.token);
        match payment {
            Payment::Direct => client.transfer(donor, &config.treasury, &charge.total_amount),
            Payment::Allowance => client.transfer_from(
                &env.current_contract_address(),
                donor,
                &config.treasury,
                &charge.total_amount,
            ),
        }
        contributions::record(env, donor, election, charge.total_amount);

        let id: u64 = env
            .storage()
            .instance()
            .get(&DataKey::NextDonationId)
            .unwrap_or(1);
        env.storage()
            .instance()
            .set(&DataKey::NextDonationId, &(id + 1));

        let record = DonationRecord {
            id,
            donor: donor.clone(),
            election: election.clone(),
            charge: *charge,
            frequency,
            pledge_id,
            timestamp: env.ledger().timestamp(),
        };
        campaign::store_record(env, &DataKey::Donation(id), &record);
        events::emit_donation_received(env, id, donor, election, charge, frequency, pledge_id);
        record
    }
}

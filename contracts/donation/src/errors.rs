use soroban_sdk::contracterror;
use vega_fee_calculator::FeeError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DonationError {
    // ── Deployment ──────────────────────────────────────────────
    NotInitialized = 1,
    Paused = 2,

    // ── Amounts and limits ──────────────────────────────────────
    /// Requested base amount is above the donor's remaining headroom.
    /// Clients clamp to `get_remaining` and resubmit.
    LimitExceeded = 3,
    /// Donor has already given the full limit for this election.
    ContributionLimitReached = 4,
    BelowMinimumCharge = 5,

    // ── Configuration ───────────────────────────────────────────
    InvalidFeeModel = 6,
    InvalidLimit = 7,
    InvalidMinimumCharge = 8,
    InvalidInterval = 9,

    // ── Donor compliance fields ─────────────────────────────────
    MissingDonorField = 10,
    DonorFieldTooLong = 11,
    InvalidEmail = 12,
    InvalidPhone = 13,
    InvalidZip = 14,

    // ── Pledges ─────────────────────────────────────────────────
    PledgeNotFound = 15,
    PledgeInactive = 16,
    PledgeNotDue = 17,
    NotPledgeOwner = 18,
}

impl From<FeeError> for DonationError {
    fn from(err: FeeError) -> Self {
        match err {
            FeeError::LimitExceeded => DonationError::LimitExceeded,
            FeeError::InvalidFeeModel => DonationError::InvalidFeeModel,
            FeeError::InvalidLimit => DonationError::InvalidLimit,
        }
    }
}

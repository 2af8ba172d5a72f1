use soroban_sdk::contracterror;

/// Failures the fee calculator can report.
///
/// A negative or missing donation amount is deliberately absent: it is
/// treated as zero rather than rejected.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FeeError {
    /// The requested base amount alone is above the contribution limit.
    /// The caller clamps to the limit and recomputes.
    LimitExceeded = 1,
    /// Rate is 100 % or more, or the fixed fee is negative or above `MAX_AMOUNT`.
    InvalidFeeModel = 2,
    /// Contribution limit is zero, negative or above `MAX_AMOUNT`.
    InvalidLimit = 3,
}

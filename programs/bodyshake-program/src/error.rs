use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // Validation errors
    #[msg("Member name is too long")]
    NameTooLong,
    #[msg("Phone number is too long")]
    PhoneTooLong,
    #[msg("Email address is too long")]
    EmailTooLong,
    #[msg("Address is too long")]
    AddressTooLong,
    #[msg("Gender is too long")]
    GenderTooLong,
    #[msg("Image URL is too long")]
    UrlTooLong,
    #[msg("Invalid or out-of-order date")]
    InvalidDate,
    #[msg("Subscription length in days is out of range")]
    InvalidTotalDays,

    // Authorization errors
    #[msg("Unauthorized authority")]
    UnauthorizedAuthority,
    #[msg("Unauthorized member")]
    UnauthorizedMember,

    // Subscription errors
    #[msg("Member has no subscription record")]
    NoSubscription,

    // Operations errors
    #[msg("Gym operations are paused")]
    GymPaused,
    #[msg("Reconciliation account pair is invalid")]
    InvalidReconcileAccount,

    // Math errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Arithmetic underflow")]
    ArithmeticUnderflow,
}

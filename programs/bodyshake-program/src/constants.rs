use anchor_lang::prelude::*;

#[constant]
pub const SECONDS_PER_DAY: i64 = 86_400;

// Global seeds
pub const GYM_STATE_SEED: &str = "gym_state";

// Member related seeds
pub const MEMBER_SEED: &str = "member";
pub const SUBSCRIPTION_SEED: &str = "subscription";

// Maximum string lengths
pub const MAX_NAME_LENGTH: usize = 64;
pub const MAX_PHONE_LENGTH: usize = 20;
pub const MAX_EMAIL_LENGTH: usize = 64;
pub const MAX_ADDRESS_LENGTH: usize = 128;
pub const MAX_GENDER_LENGTH: usize = 16;
pub const MAX_URL_LENGTH: usize = 200;

// Subscription terms
pub const MIN_SUBSCRIPTION_DAYS: u64 = 1;
pub const MAX_SUBSCRIPTION_DAYS: u64 = 365;

// Memberships within this many remaining days are reported as expiring soon
pub const EXPIRING_SOON_WINDOW_DAYS: u64 = 7;

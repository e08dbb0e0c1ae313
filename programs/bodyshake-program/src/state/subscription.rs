//! Subscription record plus the day-accounting rules.
//!
//! Every instruction that touches active days, pause state, or membership
//! status goes through the methods here; none of them re-derive date math on
//! their own. All methods take "today" as an explicit timestamp so they stay
//! pure and unit-testable.

use anchor_lang::prelude::*;

use crate::constants::{
    EXPIRING_SOON_WINDOW_DAYS, MAX_SUBSCRIPTION_DAYS, MIN_SUBSCRIPTION_DAYS, SECONDS_PER_DAY,
};
use crate::error::ErrorCode;

#[account]
#[derive(InitSpace)]
pub struct Subscription {
    pub member: Pubkey, // owning member wallet
    pub index: u64,     // renewals append; highest index is the current term
    pub payment_date: i64,
    pub created_at: i64,
    pub total_days: u64,
    pub active_days: u64,
    pub inactive_days: u64,
    // Presence of inactive_start_date is the sole pause discriminator
    pub inactive_start_date: Option<i64>,
    pub days_remaining: Option<u64>, // balance frozen at pause, cleared on resume
    pub expiration_date: i64,
    pub last_active_date: Option<i64>,
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MembershipStatus {
    NoSubscription,
    Paused,
    Expired,
    ExpiringSoon,
    Active,
}

impl MembershipStatus {
    pub fn of(subscription: Option<&Subscription>, today: i64) -> Self {
        match subscription {
            Some(subscription) => subscription.classify(today),
            None => MembershipStatus::NoSubscription,
        }
    }
}

/// Whole days between two timestamps, floored, never negative.
fn days_between(from: i64, to: i64) -> u64 {
    if to <= from {
        0
    } else {
        ((to - from) / SECONDS_PER_DAY) as u64
    }
}

impl Subscription {
    /// Build a new term. When the member is active the consumed days are
    /// seeded from the time already elapsed since the payment date, so a
    /// back-dated term starts with the right balance.
    pub fn new_term(
        member: Pubkey,
        index: u64,
        payment_date: i64,
        total_days: u64,
        member_active: bool,
        today: i64,
        bump: u8,
    ) -> Result<Self> {
        require!(payment_date > 0 && today > 0, ErrorCode::InvalidDate);
        require!(
            (MIN_SUBSCRIPTION_DAYS..=MAX_SUBSCRIPTION_DAYS).contains(&total_days),
            ErrorCode::InvalidTotalDays
        );

        let term_seconds = (total_days as i64)
            .checked_mul(SECONDS_PER_DAY)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        let expiration_date = payment_date
            .checked_add(term_seconds)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        let active_days = if member_active {
            days_between(payment_date, today).min(total_days)
        } else {
            0
        };

        Ok(Self {
            member,
            index,
            payment_date,
            created_at: today,
            total_days,
            active_days,
            inactive_days: 0,
            inactive_start_date: None,
            days_remaining: None,
            expiration_date,
            last_active_date: member_active.then_some(today),
            bump,
        })
    }

    pub fn is_paused(&self) -> bool {
        self.inactive_start_date.is_some()
    }

    /// Calendar days consumed since the term began, capped at the
    /// entitlement. Resume extends total_days by exactly the paused span, so
    /// this single formula is valid at every point in the lifecycle.
    pub fn accrued_days(&self, today: i64) -> u64 {
        days_between(self.payment_date, today).min(self.total_days)
    }

    /// Advance active_days to today's accrual. Persists only a strictly
    /// greater value: a stale tick can never roll back a fresh pause, and
    /// re-running with the same date is a no-op. Returns whether it advanced.
    pub fn tick(&mut self, today: i64) -> Result<bool> {
        if self.is_paused() {
            return Ok(false);
        }
        let accrued = self.accrued_days(today);
        if accrued <= self.active_days {
            return Ok(false);
        }
        self.active_days = accrued;
        self.last_active_date = Some(today);
        Ok(true)
    }

    /// Freeze the entitlement balance. Pausing an already-paused term is a
    /// no-op. Returns whether state changed.
    pub fn pause(&mut self, today: i64) -> Result<bool> {
        if self.is_paused() {
            return Ok(false);
        }
        self.tick(today)?;
        if self.active_days > self.total_days {
            msg!(
                "Subscription #{} of member {}: active_days {} exceeds total_days {}, clamping frozen balance",
                self.index,
                self.member,
                self.active_days,
                self.total_days
            );
        }
        self.days_remaining = Some(self.total_days.saturating_sub(self.active_days));
        self.inactive_start_date = Some(today);
        Ok(true)
    }

    /// Unfreeze: the paused span is added to inactive_days and to the term
    /// itself (total_days and expiration_date), restoring exactly the frozen
    /// balance. Resuming a term that was never paused is a no-op. Returns
    /// whether state changed.
    pub fn resume(&mut self, today: i64) -> Result<bool> {
        let Some(paused_since) = self.inactive_start_date else {
            return Ok(false);
        };
        require!(today >= paused_since, ErrorCode::InvalidDate);

        let paused_days = days_between(paused_since, today);
        self.inactive_days = self
            .inactive_days
            .checked_add(paused_days)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        self.total_days = self
            .total_days
            .checked_add(paused_days)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        let paused_seconds = (paused_days as i64)
            .checked_mul(SECONDS_PER_DAY)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        self.expiration_date = self
            .expiration_date
            .checked_add(paused_seconds)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        self.days_remaining = None;
        self.inactive_start_date = None;
        self.last_active_date = Some(today);
        Ok(true)
    }

    /// Days of entitlement left as shown to members: the frozen balance
    /// while paused, otherwise the lesser of the calendar window and the
    /// unconsumed balance, floored at zero.
    pub fn remaining_days(&self, today: i64) -> u64 {
        if let Some(frozen) = self.days_remaining {
            return frozen;
        }
        let calendar_left = days_between(today, self.expiration_date);
        let consumed = self.accrued_days(today).max(self.active_days);
        let entitlement_left = self.total_days.saturating_sub(consumed);
        calendar_left.min(entitlement_left)
    }

    /// Status classification shared by every display surface.
    pub fn classify(&self, today: i64) -> MembershipStatus {
        if self.is_paused() || self.days_remaining.is_some() {
            return MembershipStatus::Paused;
        }
        let consumed = self.accrued_days(today).max(self.active_days);
        if today >= self.expiration_date || consumed >= self.total_days {
            return MembershipStatus::Expired;
        }
        if self.remaining_days(today) <= EXPIRING_SOON_WINDOW_DAYS {
            return MembershipStatus::ExpiringSoon;
        }
        MembershipStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPOCH: i64 = 1_700_000_000;

    fn day(n: i64) -> i64 {
        EPOCH + n * SECONDS_PER_DAY
    }

    /// A term paid at EPOCH for a member active from creation.
    fn term(total_days: u64) -> Subscription {
        Subscription::new_term(Pubkey::new_unique(), 0, EPOCH, total_days, true, EPOCH, 255)
            .unwrap()
    }

    #[test]
    fn tick_accrues_whole_days_since_payment() {
        let mut sub = term(30);
        assert!(sub.tick(day(9)).unwrap());
        assert_eq!(sub.active_days, 9);
        assert_eq!(sub.last_active_date, Some(day(9)));
    }

    #[test]
    fn tick_is_idempotent_for_the_same_day() {
        let mut sub = term(30);
        assert!(sub.tick(day(9)).unwrap());
        assert!(!sub.tick(day(9)).unwrap());
        assert_eq!(sub.active_days, 9);
    }

    #[test]
    fn tick_floors_partial_days() {
        let mut sub = term(30);
        sub.tick(day(9) + SECONDS_PER_DAY / 2).unwrap();
        assert_eq!(sub.active_days, 9);
    }

    #[test]
    fn tick_clamps_at_the_entitlement() {
        let mut sub = term(30);
        sub.tick(day(45)).unwrap();
        assert_eq!(sub.active_days, 30);
    }

    #[test]
    fn stale_tick_never_regresses() {
        let mut sub = term(30);
        sub.tick(day(20)).unwrap();
        assert!(!sub.tick(day(9)).unwrap());
        assert_eq!(sub.active_days, 20);
    }

    #[test]
    fn tick_is_a_noop_while_paused() {
        let mut sub = term(30);
        sub.pause(day(9)).unwrap();
        assert!(!sub.tick(day(15)).unwrap());
        assert_eq!(sub.active_days, 9);
    }

    #[test]
    fn pause_freezes_the_balance() {
        let mut sub = term(30);
        sub.tick(day(9)).unwrap();
        assert!(sub.pause(day(9)).unwrap());
        assert_eq!(sub.active_days, 9);
        assert_eq!(sub.days_remaining, Some(21));
        assert_eq!(sub.inactive_start_date, Some(day(9)));
        assert_eq!(sub.classify(day(12)), MembershipStatus::Paused);
        assert_eq!(sub.remaining_days(day(12)), 21);
    }

    #[test]
    fn pause_catches_up_accrual_first() {
        let mut sub = term(30);
        assert!(sub.pause(day(9)).unwrap());
        assert_eq!(sub.active_days, 9);
        assert_eq!(sub.days_remaining, Some(21));
    }

    #[test]
    fn pause_is_idempotent() {
        let mut sub = term(30);
        sub.pause(day(9)).unwrap();
        assert!(!sub.pause(day(14)).unwrap());
        assert_eq!(sub.inactive_start_date, Some(day(9)));
        assert_eq!(sub.days_remaining, Some(21));
    }

    #[test]
    fn resume_extends_the_term_by_the_paused_span() {
        let mut sub = term(30);
        sub.pause(day(9)).unwrap();
        assert!(sub.resume(day(14)).unwrap());
        assert_eq!(sub.inactive_days, 5);
        assert_eq!(sub.total_days, 35);
        assert_eq!(sub.expiration_date, day(35));
        assert_eq!(sub.days_remaining, None);
        assert_eq!(sub.inactive_start_date, None);
        // the frozen 21-day balance is restored from the resume date
        assert_eq!(sub.remaining_days(day(14)), 21);
        assert_eq!(sub.classify(day(14)), MembershipStatus::Active);
    }

    #[test]
    fn pause_resume_at_one_instant_is_a_noop() {
        let mut sub = term(30);
        sub.tick(day(9)).unwrap();
        sub.pause(day(9)).unwrap();
        sub.resume(day(9)).unwrap();
        assert_eq!(sub.active_days, 9);
        assert_eq!(sub.total_days, 30);
        assert_eq!(sub.expiration_date, day(30));
        assert_eq!(sub.inactive_days, 0);
        assert_eq!(sub.days_remaining, None);
        assert_eq!(sub.inactive_start_date, None);
    }

    #[test]
    fn resume_without_pause_is_a_noop() {
        let mut sub = term(30);
        assert!(!sub.resume(day(5)).unwrap());
        assert_eq!(sub.total_days, 30);
    }

    #[test]
    fn resume_before_the_pause_date_fails() {
        let mut sub = term(30);
        sub.pause(day(9)).unwrap();
        assert!(sub.resume(day(8)).is_err());
    }

    #[test]
    fn accrual_stays_calendar_consistent_across_pause_cycles() {
        let mut sub = term(30);
        sub.pause(day(9)).unwrap();
        sub.resume(day(14)).unwrap();
        // 19 calendar days since payment against a term extended to 35
        sub.tick(day(19)).unwrap();
        assert_eq!(sub.active_days, 19);
        assert_eq!(sub.remaining_days(day(19)), 16);
        sub.pause(day(19)).unwrap();
        // frozen balance matches the calendar window (day 35 - day 19)
        assert_eq!(sub.days_remaining, Some(16));
    }

    #[test]
    fn classify_expired_on_the_calendar() {
        let sub = term(30);
        assert_eq!(sub.classify(day(30)), MembershipStatus::Expired);
        assert_eq!(sub.classify(day(31)), MembershipStatus::Expired);
    }

    #[test]
    fn classify_expired_when_the_entitlement_is_consumed() {
        // expiration pushed far out: consumption alone must expire the term
        let mut sub = term(10);
        sub.active_days = 10;
        sub.expiration_date = day(100);
        assert_eq!(sub.classify(day(2)), MembershipStatus::Expired);
    }

    #[test]
    fn classify_never_active_once_consumed() {
        let mut sub = term(30);
        sub.tick(day(45)).unwrap();
        assert_eq!(sub.active_days, 30);
        assert_ne!(sub.classify(day(45)), MembershipStatus::Active);
    }

    #[test]
    fn classify_expiring_soon_with_six_days_left() {
        let mut sub = term(30);
        sub.tick(day(24)).unwrap();
        assert_eq!(sub.remaining_days(day(24)), 6);
        assert_eq!(sub.classify(day(24)), MembershipStatus::ExpiringSoon);
    }

    #[test]
    fn classify_active_mid_term() {
        let mut sub = term(30);
        sub.tick(day(9)).unwrap();
        assert_eq!(sub.classify(day(9)), MembershipStatus::Active);
        assert_eq!(sub.remaining_days(day(9)), 21);
        assert_eq!(sub.expiration_date, day(30));
    }

    #[test]
    fn remaining_days_never_goes_negative() {
        let sub = term(30);
        assert_eq!(sub.remaining_days(day(40)), 0);
    }

    #[test]
    fn remaining_days_takes_the_lesser_of_calendar_and_balance() {
        let mut sub = term(30);
        sub.tick(day(9)).unwrap();
        // calendar window widened out of band; the balance still caps it
        sub.expiration_date = day(40);
        assert_eq!(sub.remaining_days(day(10)), 20);
    }

    #[test]
    fn missing_subscription_classifies_as_none() {
        assert_eq!(
            MembershipStatus::of(None, day(0)),
            MembershipStatus::NoSubscription
        );
        let sub = term(30);
        assert_eq!(
            MembershipStatus::of(Some(&sub), day(9)),
            MembershipStatus::Active
        );
    }

    #[test]
    fn new_term_seeds_elapsed_days_for_an_active_member() {
        let sub =
            Subscription::new_term(Pubkey::new_unique(), 0, EPOCH, 30, true, day(9), 255).unwrap();
        assert_eq!(sub.active_days, 9);
        assert_eq!(sub.expiration_date, day(30));
        assert_eq!(sub.last_active_date, Some(day(9)));
    }

    #[test]
    fn new_term_does_not_seed_for_an_inactive_member() {
        let sub =
            Subscription::new_term(Pubkey::new_unique(), 0, EPOCH, 30, false, day(9), 255).unwrap();
        assert_eq!(sub.active_days, 0);
        assert_eq!(sub.last_active_date, None);
    }

    #[test]
    fn new_term_seed_clamps_at_the_entitlement() {
        let sub =
            Subscription::new_term(Pubkey::new_unique(), 0, EPOCH, 30, true, day(45), 255).unwrap();
        assert_eq!(sub.active_days, 30);
    }

    #[test]
    fn new_term_rejects_bad_inputs() {
        let member = Pubkey::new_unique();
        assert!(Subscription::new_term(member, 0, 0, 30, true, day(0), 255).is_err());
        assert!(Subscription::new_term(member, 0, EPOCH, 0, true, day(0), 255).is_err());
        assert!(Subscription::new_term(member, 0, EPOCH, 366, true, day(0), 255).is_err());
    }

    #[test]
    fn pause_clamps_an_overconsumed_balance() {
        // corrupted row: consumption beyond the entitlement must not panic
        let mut sub = term(30);
        sub.active_days = 35;
        sub.pause(day(40)).unwrap();
        assert_eq!(sub.days_remaining, Some(0));
    }
}

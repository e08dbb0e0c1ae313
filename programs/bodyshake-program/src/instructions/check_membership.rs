use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(member_wallet: Pubkey)]
pub struct CheckMembership<'info> {
    pub requester: Signer<'info>,

    #[account(
        seeds = [MEMBER_SEED.as_bytes(), member_wallet.as_ref()],
        bump = member_account.bump,
        constraint = member_account.wallet == member_wallet @ ErrorCode::UnauthorizedMember
    )]
    pub member_account: Account<'info, Member>,

    /// Latest subscription (optional - absent if the member never had one)
    #[account(
        seeds = [
            SUBSCRIPTION_SEED.as_bytes(),
            member_wallet.as_ref(),
            &member_account.subscription_count.saturating_sub(1).to_le_bytes(),
        ],
        bump = subscription.bump,
        constraint = subscription.member == member_wallet @ ErrorCode::UnauthorizedMember
    )]
    pub subscription: Option<Account<'info, Subscription>>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct MembershipReport {
    pub status: MembershipStatus,
    pub remaining_days: u64,
    pub active_days: u64,
    pub total_days: u64,
    pub expiration_date: i64,
}

impl<'info> CheckMembership<'info> {
    /// The one classification read behind every display surface (dashboard
    /// rows, member profile, status toggle).
    pub fn check_membership(&self, member_wallet: Pubkey) -> Result<MembershipReport> {
        let today = Clock::get()?.unix_timestamp;

        let report = match self.subscription.as_deref() {
            Some(subscription) => MembershipReport {
                status: subscription.classify(today),
                remaining_days: subscription.remaining_days(today),
                active_days: subscription.active_days,
                total_days: subscription.total_days,
                expiration_date: subscription.expiration_date,
            },
            None => MembershipReport {
                status: MembershipStatus::NoSubscription,
                remaining_days: 0,
                active_days: 0,
                total_days: 0,
                expiration_date: 0,
            },
        };

        msg!(
            "Member {} '{}' ({}): {:?}, {} days remaining",
            member_wallet,
            self.member_account.name,
            if self.member_account.status { "active" } else { "inactive" },
            report.status,
            report.remaining_days
        );

        Ok(report)
    }
}

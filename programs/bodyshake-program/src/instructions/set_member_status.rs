use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(member_wallet: Pubkey)]
pub struct SetMemberStatus<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [GYM_STATE_SEED.as_bytes()],
        bump = gym_state.bump,
        constraint = gym_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub gym_state: Account<'info, GymState>,

    #[account(
        mut,
        seeds = [MEMBER_SEED.as_bytes(), member_wallet.as_ref()],
        bump = member_account.bump,
        constraint = member_account.wallet == member_wallet @ ErrorCode::UnauthorizedMember
    )]
    pub member_account: Account<'info, Member>,

    /// Latest subscription, if the member has any. Must ride along whenever
    /// subscription records exist so the status flip and the day accounting
    /// commit or roll back as one transaction.
    #[account(
        mut,
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

impl<'info> SetMemberStatus<'info> {
    pub fn set_member_status(&mut self, member_wallet: Pubkey, new_status: bool) -> Result<()> {
        require!(!self.gym_state.is_paused, ErrorCode::GymPaused);

        if self.member_account.status == new_status {
            msg!(
                "Member {} already {}",
                member_wallet,
                if new_status { "active" } else { "inactive" }
            );
            return Ok(());
        }

        require!(
            self.member_account.subscription_count == 0 || self.subscription.is_some(),
            ErrorCode::NoSubscription
        );

        let today = Clock::get()?.unix_timestamp;

        match self.subscription.as_deref_mut() {
            Some(subscription) => {
                if new_status {
                    if subscription.resume(today)? {
                        msg!(
                            "Member {} resumed: term extended to {} days, expires at {}",
                            member_wallet,
                            subscription.total_days,
                            subscription.expiration_date
                        );
                    } else {
                        msg!(
                            "Member {} reactivated; subscription was not paused",
                            member_wallet
                        );
                    }
                } else if subscription.pause(today)? {
                    msg!(
                        "Member {} paused with {} days frozen",
                        member_wallet,
                        subscription.days_remaining.unwrap_or(0)
                    );
                }
            }
            // A member with no subscription records may flip freely; there
            // is nothing to account for.
            None => msg!("Member {} has no subscriptions; status flip only", member_wallet),
        }

        self.member_account.status = new_status;
        msg!(
            "Member {} is now {}",
            member_wallet,
            if new_status { "active" } else { "inactive" }
        );

        Ok(())
    }
}

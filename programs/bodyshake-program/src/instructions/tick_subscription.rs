use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

/// Single-subscription accrual, the on-read counterpart of the batch crank.
/// Anyone may invoke it: the update is idempotent and only ever advances
/// active_days, so a stale crank cannot clobber a fresh pause.
#[derive(Accounts)]
#[instruction(member_wallet: Pubkey, index: u64)]
pub struct TickSubscription<'info> {
    pub cranker: Signer<'info>,

    #[account(
        seeds = [MEMBER_SEED.as_bytes(), member_wallet.as_ref()],
        bump = member_account.bump,
        constraint = member_account.wallet == member_wallet @ ErrorCode::UnauthorizedMember
    )]
    pub member_account: Account<'info, Member>,

    #[account(
        mut,
        seeds = [
            SUBSCRIPTION_SEED.as_bytes(),
            member_wallet.as_ref(),
            &index.to_le_bytes(),
        ],
        bump = subscription.bump,
        constraint = subscription.member == member_wallet @ ErrorCode::UnauthorizedMember
    )]
    pub subscription: Account<'info, Subscription>,
}

impl<'info> TickSubscription<'info> {
    pub fn tick_subscription(&mut self, member_wallet: Pubkey, index: u64) -> Result<bool> {
        if !self.member_account.status {
            msg!("Member {} is inactive; no accrual", member_wallet);
            return Ok(false);
        }

        let today = Clock::get()?.unix_timestamp;
        let advanced = self.subscription.tick(today)?;

        if advanced {
            msg!(
                "Subscription #{} of member {}: active_days advanced to {} ({} remaining)",
                index,
                member_wallet,
                self.subscription.active_days,
                self.subscription.remaining_days(today)
            );
        }

        Ok(advanced)
    }
}

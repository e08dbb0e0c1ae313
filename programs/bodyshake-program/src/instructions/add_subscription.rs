use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(member_wallet: Pubkey)]
pub struct AddSubscription<'info> {
    #[account(mut)]
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

    // Renewals append: the next index is the current subscription count
    #[account(
        init,
        payer = authority,
        space = 8 + Subscription::INIT_SPACE,
        seeds = [
            SUBSCRIPTION_SEED.as_bytes(),
            member_wallet.as_ref(),
            &member_account.subscription_count.to_le_bytes(),
        ],
        bump
    )]
    pub subscription: Account<'info, Subscription>,

    pub system_program: Program<'info, System>,
}

impl<'info> AddSubscription<'info> {
    pub fn add_subscription(
        &mut self,
        member_wallet: Pubkey,
        payment_date: i64,
        total_days: u64,
        activate: bool,
        bumps: &AddSubscriptionBumps,
    ) -> Result<()> {
        require!(!self.gym_state.is_paused, ErrorCode::GymPaused);

        let today = Clock::get()?.unix_timestamp;
        let member = &mut self.member_account;
        let treat_as_active = activate || member.status;

        let term = Subscription::new_term(
            member_wallet,
            member.subscription_count,
            payment_date,
            total_days,
            treat_as_active,
            today,
            bumps.subscription,
        )?;
        let seeded_days = term.active_days;
        self.subscription.set_inner(term);

        member.subscription_count = member
            .subscription_count
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        if activate && !member.status {
            member.status = true;
            msg!("Member {} reactivated with the new subscription", member_wallet);
        }

        msg!(
            "Subscription #{} added for member {}: {} days from timestamp {}, {} already consumed, expires at {}",
            self.subscription.index,
            member_wallet,
            total_days,
            payment_date,
            seeded_days,
            self.subscription.expiration_date
        );

        Ok(())
    }
}

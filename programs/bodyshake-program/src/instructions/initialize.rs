use crate::{constants::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + GymState::INIT_SPACE,
        seeds = [GYM_STATE_SEED.as_bytes()],
        bump
    )]
    pub gym_state: Account<'info, GymState>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize_gym_state(&mut self, bumps: &InitializeBumps) -> Result<()> {
        let gym_state = &mut self.gym_state;

        gym_state.authority = self.authority.key();
        gym_state.is_paused = false;
        gym_state.member_count = 0;
        gym_state.next_member_id = 1;
        gym_state.last_reconciled_at = 0;
        gym_state.bump = bumps.gym_state;

        msg!("Gym state initialized by authority {}", self.authority.key());

        Ok(())
    }
}

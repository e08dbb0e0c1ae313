use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SetOperationsPaused<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GYM_STATE_SEED.as_bytes()],
        bump = gym_state.bump,
        constraint = gym_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub gym_state: Account<'info, GymState>,
}

impl<'info> SetOperationsPaused<'info> {
    pub fn set_operations_paused(&mut self, paused: bool) -> Result<()> {
        self.gym_state.is_paused = paused;

        msg!(
            "Gym operations {}",
            if paused { "paused" } else { "resumed" }
        );

        Ok(())
    }
}

use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct GymState {
    pub authority: Pubkey,
    pub is_paused: bool,
    pub member_count: u64,
    // Sequential human-facing member number, assigned at registration
    pub next_member_id: u64,
    pub last_reconciled_at: i64, // Timestamp of last accrual reconciliation
    pub bump: u8,
}

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("GymMeJ5CfimYDv4WSqtyPx1Uc36apP1dzTMpGrobYCnc");

#[program]
pub mod bodyshake_program {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        ctx.accounts.initialize_gym_state(&ctx.bumps)
    }

    pub fn set_operations_paused(ctx: Context<SetOperationsPaused>, paused: bool) -> Result<()> {
        ctx.accounts.set_operations_paused(paused)
    }

    pub fn register_member(
        ctx: Context<RegisterMember>,
        name: String,
        phone: String,
        email: Option<String>,
        address: Option<String>,
        gender: Option<String>,
    ) -> Result<()> {
        ctx.accounts
            .register_member(name, phone, email, address, gender, &ctx.bumps)
    }

    pub fn update_member(
        ctx: Context<UpdateMember>,
        member_wallet: Pubkey,
        name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
        address: Option<String>,
        gender: Option<String>,
        image_url: Option<String>,
    ) -> Result<()> {
        ctx.accounts
            .update_member(member_wallet, name, phone, email, address, gender, image_url)
    }

    pub fn add_subscription(
        ctx: Context<AddSubscription>,
        member_wallet: Pubkey,
        payment_date: i64,
        total_days: u64,
        activate: bool,
    ) -> Result<()> {
        ctx.accounts
            .add_subscription(member_wallet, payment_date, total_days, activate, &ctx.bumps)
    }

    pub fn set_member_status(
        ctx: Context<SetMemberStatus>,
        member_wallet: Pubkey,
        new_status: bool,
    ) -> Result<()> {
        ctx.accounts.set_member_status(member_wallet, new_status)
    }

    pub fn tick_subscription(
        ctx: Context<TickSubscription>,
        member_wallet: Pubkey,
        index: u64,
    ) -> Result<bool> {
        ctx.accounts.tick_subscription(member_wallet, index)
    }

    pub fn reconcile_subscriptions<'info>(
        ctx: Context<'_, '_, '_, 'info, ReconcileSubscriptions<'info>>,
    ) -> Result<ReconciliationReport> {
        ReconcileSubscriptions::reconcile_subscriptions(ctx)
    }

    pub fn check_membership(
        ctx: Context<CheckMembership>,
        member_wallet: Pubkey,
    ) -> Result<MembershipReport> {
        ctx.accounts.check_membership(member_wallet)
    }
}

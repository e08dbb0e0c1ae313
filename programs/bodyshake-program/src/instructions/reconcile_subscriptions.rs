use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

/// Daily batch crank: advances accrual on every active, un-paused
/// subscription so stored balances stay current between member visits.
/// Accounts arrive as (member, subscription) pairs in remaining_accounts;
/// a failure on one pair is counted and does not abort the rest.
#[derive(Accounts)]
pub struct ReconcileSubscriptions<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GYM_STATE_SEED.as_bytes()],
        bump = gym_state.bump,
        constraint = gym_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub gym_state: Account<'info, GymState>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Default)]
pub struct ReconciliationReport {
    pub scanned: u64,
    pub updated: u64,
    pub skipped: u64,
    pub failed: u64,
}

impl<'info> ReconcileSubscriptions<'info> {
    pub fn reconcile_subscriptions(
        ctx: Context<'_, '_, '_, 'info, ReconcileSubscriptions<'info>>,
    ) -> Result<ReconciliationReport> {
        require!(!ctx.accounts.gym_state.is_paused, ErrorCode::GymPaused);

        let today = Clock::get()?.unix_timestamp;
        let mut report = ReconciliationReport::default();

        msg!("Starting accrual reconciliation at timestamp {}", today);

        for pair in ctx.remaining_accounts.chunks(2) {
            let [member_info, subscription_info] = pair else {
                msg!(
                    "reconcile: dangling account {} without a subscription; ignoring",
                    pair[0].key()
                );
                report.failed += 1;
                continue;
            };
            report.scanned += 1;

            match Self::tick_pair(member_info, subscription_info, today) {
                Ok(true) => report.updated += 1,
                Ok(false) => report.skipped += 1,
                Err(err) => {
                    report.failed += 1;
                    msg!(
                        "reconcile: subscription {} failed: {}",
                        subscription_info.key(),
                        err
                    );
                }
            }
        }

        ctx.accounts.gym_state.last_reconciled_at = today;

        msg!(
            "Reconciliation finished: {} scanned, {} updated, {} skipped, {} failed",
            report.scanned,
            report.updated,
            report.skipped,
            report.failed
        );

        Ok(report)
    }

    /// Tick one (member, subscription) pair, writing the subscription back
    /// only when accrual actually advanced. Returns whether it advanced.
    fn tick_pair(
        member_info: &AccountInfo<'info>,
        subscription_info: &AccountInfo<'info>,
        today: i64,
    ) -> Result<bool> {
        require_keys_eq!(
            *member_info.owner,
            crate::ID,
            ErrorCode::InvalidReconcileAccount
        );
        require_keys_eq!(
            *subscription_info.owner,
            crate::ID,
            ErrorCode::InvalidReconcileAccount
        );

        let member = {
            let data = member_info.try_borrow_data()?;
            let mut slice: &[u8] = &data;
            Member::try_deserialize(&mut slice)?
        };
        if !member.status {
            return Ok(false);
        }

        let mut subscription = {
            let data = subscription_info.try_borrow_data()?;
            let mut slice: &[u8] = &data;
            Subscription::try_deserialize(&mut slice)?
        };
        require_keys_eq!(
            subscription.member,
            member.wallet,
            ErrorCode::InvalidReconcileAccount
        );
        if subscription.is_paused() {
            return Ok(false);
        }

        let advanced = subscription.tick(today)?;
        if advanced {
            let mut data = subscription_info.try_borrow_mut_data()?;
            let mut slice: &mut [u8] = &mut data;
            subscription.try_serialize(&mut slice)?;
        }

        Ok(advanced)
    }
}

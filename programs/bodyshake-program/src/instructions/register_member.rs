use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{mint_to, Mint, MintTo, Token, TokenAccount},
};

#[derive(Accounts)]
pub struct RegisterMember<'info> {
    #[account(mut)]
    pub member: Signer<'info>,

    #[account(
        mut,
        seeds = [GYM_STATE_SEED.as_bytes()],
        bump = gym_state.bump
    )]
    pub gym_state: Account<'info, GymState>,

    #[account(
        init,
        payer = member,
        space = 8 + Member::INIT_SPACE,
        seeds = [MEMBER_SEED.as_bytes(), member.key().as_ref()],
        bump
    )]
    pub member_account: Account<'info, Member>,

    // Membership card NFT
    #[account(
        init,
        payer = member,
        mint::decimals = 0,
        mint::authority = member,
        mint::freeze_authority = member,
    )]
    pub membership_card_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = member,
        associated_token::mint = membership_card_mint,
        associated_token::authority = member,
    )]
    pub membership_card_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> RegisterMember<'info> {
    pub fn register_member(
        &mut self,
        name: String,
        phone: String,
        email: Option<String>,
        address: Option<String>,
        gender: Option<String>,
        bumps: &RegisterMemberBumps,
    ) -> Result<()> {
        require!(!self.gym_state.is_paused, ErrorCode::GymPaused);
        require!(name.len() <= MAX_NAME_LENGTH, ErrorCode::NameTooLong);
        require!(phone.len() <= MAX_PHONE_LENGTH, ErrorCode::PhoneTooLong);
        if let Some(email) = &email {
            require!(email.len() <= MAX_EMAIL_LENGTH, ErrorCode::EmailTooLong);
        }
        if let Some(address) = &address {
            require!(address.len() <= MAX_ADDRESS_LENGTH, ErrorCode::AddressTooLong);
        }
        if let Some(gender) = &gender {
            require!(gender.len() <= MAX_GENDER_LENGTH, ErrorCode::GenderTooLong);
        }

        let gym_state = &mut self.gym_state;
        let member_id = gym_state.next_member_id;
        gym_state.next_member_id = member_id
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        gym_state.member_count = gym_state
            .member_count
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        let now = Clock::get()?.unix_timestamp;
        self.member_account.set_inner(Member {
            wallet: self.member.key(),
            member_id,
            name: name.clone(),
            phone: phone.clone(),
            email: email.clone(),
            address,
            gender,
            image_url: None,
            status: true,
            subscription_count: 0,
            created_at: now,
            bump: bumps.member_account,
        });

        // Mint the membership card NFT
        let cpi_accounts = MintTo {
            mint: self.membership_card_mint.to_account_info(),
            to: self.membership_card_token_account.to_account_info(),
            authority: self.member.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
        mint_to(cpi_ctx, 1)?;

        // Registration record picked up by the off-chain admin notifier
        msg!(
            "New member registration: #{} '{}' (phone: {})",
            member_id,
            name,
            phone
        );
        if let Some(email) = &email {
            msg!("Contact email: {}", email);
        }
        msg!(
            "Membership card minted: {}",
            self.membership_card_mint.key()
        );

        Ok(())
    }
}

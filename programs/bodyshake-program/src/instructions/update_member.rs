use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(member_wallet: Pubkey)]
pub struct UpdateMember<'info> {
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
}

impl<'info> UpdateMember<'info> {
    /// Edit identity fields; `None` leaves a field unchanged. The active
    /// flag is not editable here — status changes go through
    /// `set_member_status` so the day accounting cannot be skipped.
    pub fn update_member(
        &mut self,
        member_wallet: Pubkey,
        name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
        address: Option<String>,
        gender: Option<String>,
        image_url: Option<String>,
    ) -> Result<()> {
        require!(!self.gym_state.is_paused, ErrorCode::GymPaused);

        let member = &mut self.member_account;

        if let Some(name) = name {
            require!(name.len() <= MAX_NAME_LENGTH, ErrorCode::NameTooLong);
            member.name = name;
        }
        if let Some(phone) = phone {
            require!(phone.len() <= MAX_PHONE_LENGTH, ErrorCode::PhoneTooLong);
            member.phone = phone;
        }
        if let Some(email) = email {
            require!(email.len() <= MAX_EMAIL_LENGTH, ErrorCode::EmailTooLong);
            member.email = Some(email);
        }
        if let Some(address) = address {
            require!(address.len() <= MAX_ADDRESS_LENGTH, ErrorCode::AddressTooLong);
            member.address = Some(address);
        }
        if let Some(gender) = gender {
            require!(gender.len() <= MAX_GENDER_LENGTH, ErrorCode::GenderTooLong);
            member.gender = Some(gender);
        }
        if let Some(image_url) = image_url {
            require!(image_url.len() <= MAX_URL_LENGTH, ErrorCode::UrlTooLong);
            member.image_url = Some(image_url);
        }

        msg!("Member {} profile updated", member_wallet);

        Ok(())
    }
}

use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Member {
    pub wallet: Pubkey,
    pub member_id: u64,
    #[max_len(64)]
    pub name: String,
    #[max_len(20)]
    pub phone: String,
    #[max_len(64)]
    pub email: Option<String>,
    #[max_len(128)]
    pub address: Option<String>,
    #[max_len(16)]
    pub gender: Option<String>,
    #[max_len(200)]
    pub image_url: Option<String>,
    pub status: bool, // active / inactive
    pub subscription_count: u64,
    pub created_at: i64,
    pub bump: u8,
}

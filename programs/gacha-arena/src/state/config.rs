use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct GameConfig {
    /// Admin who can pause the arena and grant coins.
    pub admin: Pubkey,
    /// When set, all coin-moving player actions are rejected.
    pub paused: bool,
    /// Running count of created players.
    pub total_players: u64,
    /// Running count of settled bets.
    pub total_bets: u64,
    /// Cumulative wagered coins.
    pub total_wagered: u64,
    /// Running count of PvP battles started.
    pub total_battles: u64,
    /// Running count of gacha boxes opened.
    pub total_boxes: u64,
    /// PDA bump seed.
    pub bump: u8,
}

impl GameConfig {
    pub const SEED: &'static [u8] = b"config";
}

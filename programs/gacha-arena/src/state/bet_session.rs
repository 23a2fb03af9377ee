use anchor_lang::prelude::*;

/// Which side of the pending matchup the player backs.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum FighterPick {
    First,
    Second,
}

/// Per-player pending bet. Replaced wholesale whenever a new preview is
/// opened and closed on resolution or cancellation.
#[account]
#[derive(InitSpace)]
pub struct BetSession {
    /// Wallet this session belongs to.
    pub player: Pubkey,
    /// Roster index of the first fighter.
    pub fighter_a: u16,
    /// Roster index of the second fighter.
    pub fighter_b: u16,
    /// Seasonally boosted power of the first fighter.
    pub power_a: u16,
    /// Seasonally boosted power of the second fighter.
    pub power_b: u16,
    /// Held stake, 0 until a wager is placed.
    pub wager: u64,
    /// Coins credited on a correct pick.
    pub payout_on_win: u64,
    /// Unix timestamp the preview was opened.
    pub opened_at: i64,
    /// PDA bump seed.
    pub bump: u8,
}

impl BetSession {
    pub const SEED: &'static [u8] = b"bet";

    pub fn has_wager(&self) -> bool {
        self.wager > 0
    }
}

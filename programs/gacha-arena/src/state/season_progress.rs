use anchor_lang::prelude::*;

use crate::season::Theme;

/// Per-player progress within the active season. One account per player;
/// counters reset when a new month's theme becomes active.
#[account]
#[derive(InitSpace)]
pub struct SeasonProgress {
    /// Wallet this progress belongs to.
    pub player: Pubkey,
    /// Theme the counters refer to.
    pub theme: Theme,
    /// Bets won this season.
    pub wins: u32,
    /// Bets settled this season.
    pub bets: u32,
    /// Collection size snapshot taken at the latest update.
    pub characters_collected: u32,
    /// PDA bump seed.
    pub bump: u8,
}

impl SeasonProgress {
    pub const SEED: &'static [u8] = b"season";

    /// Resets the counters when the active theme has moved on.
    pub fn roll_over(&mut self, active: Theme) {
        if self.theme != active {
            self.theme = active;
            self.wins = 0;
            self.bets = 0;
            self.characters_collected = 0;
        }
    }

    /// Season wins, counting only if the counters are for `active`.
    pub fn wins_for(&self, active: Theme) -> u32 {
        if self.theme == active {
            self.wins
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_reset_when_the_theme_moves_on() {
        let mut p = SeasonProgress {
            player: Pubkey::default(),
            theme: Theme::Dragons,
            wins: 12,
            bets: 30,
            characters_collected: 8,
            bump: 255,
        };
        p.roll_over(Theme::Dragons);
        assert_eq!(p.wins, 12);
        assert_eq!(p.wins_for(Theme::Dragons), 12);
        assert_eq!(p.wins_for(Theme::Blossom), 0);

        p.roll_over(Theme::Blossom);
        assert_eq!(p.theme, Theme::Blossom);
        assert_eq!(p.wins, 0);
        assert_eq!(p.bets, 0);
        assert_eq!(p.characters_collected, 0);
    }
}

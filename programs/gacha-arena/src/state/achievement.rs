use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum Achievement {
    /// Win a first bet.
    FirstBlood,
    /// Win 10 PvP battles.
    PvpMaster,
    /// Hold 5000 coins.
    RichMan,
    /// Own 20 unique fighters.
    Collector,
    /// Win 30 bets within one season.
    SeasonalChampion,
    /// Own 5 legendary fighters.
    LegendaryHunter,
}

impl Achievement {
    pub fn from_index(index: u8) -> Option<Achievement> {
        match index {
            0 => Some(Achievement::FirstBlood),
            1 => Some(Achievement::PvpMaster),
            2 => Some(Achievement::RichMan),
            3 => Some(Achievement::Collector),
            4 => Some(Achievement::SeasonalChampion),
            5 => Some(Achievement::LegendaryHunter),
            _ => None,
        }
    }

    pub fn reward(&self) -> u64 {
        match self {
            Achievement::FirstBlood => 100,
            Achievement::PvpMaster => 500,
            Achievement::RichMan => 1000,
            Achievement::Collector => 300,
            Achievement::SeasonalChampion => 1000,
            Achievement::LegendaryHunter => 2000,
        }
    }
}

/// Unlock record, one PDA per player and achievement. PDA uniqueness makes
/// every achievement a once-only unlock.
#[account]
#[derive(InitSpace)]
pub struct AchievementUnlock {
    /// Wallet that unlocked the achievement.
    pub player: Pubkey,
    /// Which achievement was unlocked.
    pub achievement: Achievement,
    /// Unix timestamp of the unlock.
    pub unlocked_at: i64,
    /// The coin reward was paid out (always set at unlock).
    pub reward_claimed: bool,
    /// PDA bump seed.
    pub bump: u8,
}

impl AchievementUnlock {
    pub const SEED: &'static [u8] = b"achievement";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip_covers_all_achievements() {
        for index in 0..6u8 {
            let a = Achievement::from_index(index).unwrap();
            assert!(a.reward() > 0);
        }
        assert!(Achievement::from_index(6).is_none());
        assert!(Achievement::from_index(u8::MAX).is_none());
    }
}

//! Game tunables. Numbers marked "product" are balance knobs inherited from
//! the live game, not derived values.

/// Starting balance for a freshly created player.
pub const STARTING_BALANCE: u64 = 100;

/// Minimum balance required to open a bet preview.
pub const MIN_BET_BALANCE: u64 = 10;

/// Allowed wager amounts and their payout multipliers in hundredths.
/// Bigger stakes pay strictly better: 10→x1.5 up to 100→x3.0 (product).
pub const WAGER_TIERS: [(u64, u64); 4] = [(10, 150), (25, 200), (50, 250), (100, 300)];

/// Seasonal power boost, numerator/denominator: +15%.
pub const SEASON_POWER_NUM: u64 = 115;
pub const SEASON_POWER_DEN: u64 = 100;

/// Chance (percent) that a won bet also drops the losing fighter into the
/// winner's collection (product).
pub const CONSOLATION_DROP_PCT: u64 = 30;

/// Gacha rarity weight multiplier for season-boosted boxes: x1.3 applied
/// as integer 13/10, matching the live truncation behavior.
pub const SEASON_WEIGHT_NUM: u64 = 13;
pub const SEASON_WEIGHT_DEN: u64 = 10;

/// Weight amplification for active-theme fighters inside theme-boosted
/// boxes. Must stay an exact 3:1 ratio (product).
pub const THEME_FIGHTER_WEIGHT: u64 = 3;

/// PvP stake per player and the flat winner prize (product: the prize is
/// deliberately not proportional to the stake).
pub const PVP_STAKE: u64 = 50;
pub const PVP_PRIZE: u64 = 100;

/// Fighters dealt to each PvP side and the team size picked from them.
pub const HAND_SIZE: usize = 5;
pub const TEAM_SIZE: u32 = 3;

/// A challenge nobody accepted expires after this many seconds.
pub const CHALLENGE_TTL_SECS: i64 = 300;

/// Daily reward: cooldown and inclusive coin range.
pub const DAILY_COOLDOWN_SECS: i64 = 86_400;
pub const DAILY_REWARD_MIN: u64 = 50;
pub const DAILY_REWARD_MAX: u64 = 150;

/// Referral payouts: flat reward to the referrer, welcome bonus to the
/// newcomer, and milestone bonuses at referral counts.
pub const REFERRAL_REWARD: u64 = 100;
pub const REFERRAL_WELCOME_BONUS: u64 = 50;
pub const REFERRAL_MILESTONES: [(u32, u64); 3] = [(3, 300), (5, 600), (10, 1500)];

/// Score grants per activity.
pub const SCORE_BET_WIN: u64 = 1;
pub const SCORE_DAILY: u64 = 3;
pub const SCORE_PVP_WIN: u64 = 5;
pub const SCORE_PVP_LOSS: u64 = 2;

/// Display name limit in bytes.
pub const MAX_NAME_LEN: usize = 24;

/// Looks up the payout (in coins) for a wager amount, or None if the
/// amount is not one of the allowed tiers.
pub fn wager_payout(amount: u64) -> Option<u64> {
    WAGER_TIERS
        .iter()
        .find(|&&(tier, _)| tier == amount)
        .map(|&(tier, mult)| tier * mult / 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payout_table_matches_multipliers() {
        // floor(amount * multiplier) for x1.5 / x2.0 / x2.5 / x3.0
        assert_eq!(wager_payout(10), Some(15));
        assert_eq!(wager_payout(25), Some(50));
        assert_eq!(wager_payout(50), Some(125));
        assert_eq!(wager_payout(100), Some(300));
    }

    #[test]
    fn off_tier_amounts_are_rejected() {
        assert_eq!(wager_payout(0), None);
        assert_eq!(wager_payout(11), None);
        assert_eq!(wager_payout(99), None);
        assert_eq!(wager_payout(1000), None);
    }
}

use anchor_lang::prelude::*;

use crate::constants::MAX_NAME_LEN;
use crate::errors::ArenaError;

#[account]
#[derive(InitSpace)]
pub struct Player {
    /// Wallet that owns this player.
    pub authority: Pubkey,
    /// Display name, last-seen wins.
    #[max_len(MAX_NAME_LEN)]
    pub display_name: String,
    /// Coin balance. Only moved through `credit` / `try_debit`.
    pub balance: u64,
    /// Lifetime score points.
    pub score: u64,
    /// Settled bets and battles combined.
    pub games_played: u32,
    /// Bets won.
    pub bet_wins: u32,
    /// Bets settled (won or lost).
    pub bets_placed: u32,
    /// PvP battles won.
    pub pvp_wins: u32,
    /// PvP battles lost.
    pub pvp_losses: u32,
    /// Players referred by this one.
    pub referrals: u32,
    /// Who referred this player, if anyone.
    pub referred_by: Option<Pubkey>,
    /// Unix timestamp of account creation.
    pub joined_at: i64,
    /// Unix timestamp of the latest action.
    pub last_active_at: i64,
    /// Unix timestamp of the latest daily reward claim (0 = never).
    pub last_daily_at: i64,
    /// PDA bump seed.
    pub bump: u8,
}

impl Player {
    pub const SEED: &'static [u8] = b"player";

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(ArenaError::MathOverflow)?;
        Ok(())
    }

    /// Refuses (and leaves the balance untouched) when the balance cannot
    /// cover the debit. Keeps the balance ≥ 0 invariant.
    pub fn try_debit(&mut self, amount: u64) -> Result<()> {
        require!(self.balance >= amount, ArenaError::InsufficientFunds);
        self.balance -= amount;
        Ok(())
    }

    pub fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    pub fn touch(&mut self, now: i64) {
        self.last_active_at = now;
    }
}

/// Holds the same stake from both players, or from neither. The up-front
/// check means a shortfall on either side leaves both balances untouched.
pub fn try_debit_both(a: &mut Player, b: &mut Player, amount: u64) -> Result<()> {
    require!(
        a.balance >= amount && b.balance >= amount,
        ArenaError::InsufficientFunds
    );
    a.try_debit(amount)?;
    b.try_debit(amount)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{test_seed, SeedStream};

    fn player(balance: u64) -> Player {
        Player {
            authority: Pubkey::default(),
            display_name: "tester".to_string(),
            balance,
            score: 0,
            games_played: 0,
            bet_wins: 0,
            bets_placed: 0,
            pvp_wins: 0,
            pvp_losses: 0,
            referrals: 0,
            referred_by: None,
            joined_at: 0,
            last_active_at: 0,
            last_daily_at: 0,
            bump: 255,
        }
    }

    #[test]
    fn overdraft_is_refused_without_mutation() {
        let mut p = player(30);
        assert!(p.try_debit(31).is_err());
        assert_eq!(p.balance, 30);
        assert!(p.try_debit(30).is_ok());
        assert_eq!(p.balance, 0);
        assert!(p.try_debit(1).is_err());
        assert_eq!(p.balance, 0);
    }

    #[test]
    fn debit_then_credit_round_trips() {
        let mut p = player(100);
        p.try_debit(37).unwrap();
        p.credit(37).unwrap();
        assert_eq!(p.balance, 100);
    }

    #[test]
    fn bet_flow_balance_math() {
        use crate::constants::wager_payout;

        // Win: 100 - 25 held, then floor(25 * 2.0) credited = 125.
        let mut p = player(100);
        p.try_debit(25).unwrap();
        p.credit(wager_payout(25).unwrap()).unwrap();
        assert_eq!(p.balance, 125);

        // Loss: the held stake is simply gone, 100 - 25 = 75.
        let mut p = player(100);
        p.try_debit(25).unwrap();
        assert_eq!(p.balance, 75);
    }

    #[test]
    fn stake_hold_is_both_or_neither() {
        let mut a = player(200);
        let mut b = player(49);
        assert!(try_debit_both(&mut a, &mut b, 50).is_err());
        assert_eq!(a.balance, 200);
        assert_eq!(b.balance, 49);

        let mut c = player(50);
        let mut d = player(50);
        try_debit_both(&mut c, &mut d, 50).unwrap();
        assert_eq!(c.balance, 0);
        assert_eq!(d.balance, 0);
    }

    #[test]
    fn random_interleaving_never_goes_negative() {
        let mut s = SeedStream::new(test_seed(20));
        let mut p = player(100);
        let mut model: i128 = 100;
        for _ in 0..10_000 {
            let amount = s.below(75) + 1;
            if s.chance(50) {
                p.credit(amount).unwrap();
                model += amount as i128;
            } else if p.try_debit(amount).is_ok() {
                model -= amount as i128;
            }
            assert!(model >= 0);
            assert_eq!(p.balance as i128, model);
        }
    }
}

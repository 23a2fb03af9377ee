use anchor_lang::prelude::*;

use crate::catalog;
use crate::constants::{HAND_SIZE, TEAM_SIZE};
use crate::errors::ArenaError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace)]
pub enum BattleStatus {
    /// Both sides are picking 3 of their 5 dealt fighters.
    Drafting,
    /// Outcome resolved, prize paid; account awaits closing.
    Settled,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    One,
    Two,
}

/// A PvP battle between two players who both put up the stake when the
/// challenge was accepted. Holds both drafts; selections are bitmasks over
/// the dealt hands.
#[account]
#[derive(InitSpace)]
pub struct Battle {
    /// Challenge creator.
    pub player_one: Pubkey,
    /// Challenge acceptor.
    pub player_two: Pubkey,
    /// Stake already debited from each side.
    pub stake: u64,
    /// Five fighters dealt to the creator.
    pub dealt_one: [u16; 5],
    /// Five fighters dealt to the acceptor.
    pub dealt_two: [u16; 5],
    /// Bitmask of creator selections over `dealt_one`.
    pub picks_one: u8,
    /// Bitmask of acceptor selections over `dealt_two`.
    pub picks_two: u8,
    /// Creator confirmed their team.
    pub ready_one: bool,
    /// Acceptor confirmed their team.
    pub ready_two: bool,
    /// Drafting or Settled.
    pub status: BattleStatus,
    /// Winner, set on settlement.
    pub winner: Option<Pubkey>,
    /// Unix timestamp the battle opened.
    pub started_at: i64,
    /// Unix timestamp of settlement (0 until then).
    pub settled_at: i64,
    /// PDA bump seed.
    pub bump: u8,
}

impl Battle {
    pub const SEED: &'static [u8] = b"battle";

    pub fn side_of(&self, key: &Pubkey) -> Option<Side> {
        if *key == self.player_one {
            Some(Side::One)
        } else if *key == self.player_two {
            Some(Side::Two)
        } else {
            None
        }
    }

    pub fn dealt(&self, side: Side) -> &[u16; 5] {
        match side {
            Side::One => &self.dealt_one,
            Side::Two => &self.dealt_two,
        }
    }

    pub fn picks(&self, side: Side) -> u8 {
        match side {
            Side::One => self.picks_one,
            Side::Two => self.picks_two,
        }
    }

    pub fn ready(&self, side: Side) -> bool {
        match side {
            Side::One => self.ready_one,
            Side::Two => self.ready_two,
        }
    }

    pub fn picked_count(&self, side: Side) -> u32 {
        self.picks(side).count_ones()
    }

    /// Toggles the dealt slot in or out of the team. Returns whether the
    /// slot is selected afterwards. A fourth selection is refused.
    pub fn toggle_pick(&mut self, side: Side, slot: usize) -> Result<bool> {
        require!(slot < HAND_SIZE, ArenaError::InvalidSelection);
        require!(!self.ready(side), ArenaError::TeamAlreadyReady);

        let bit = 1u8 << slot;
        let picks = match side {
            Side::One => &mut self.picks_one,
            Side::Two => &mut self.picks_two,
        };
        if *picks & bit != 0 {
            *picks &= !bit;
            Ok(false)
        } else {
            require!(picks.count_ones() < TEAM_SIZE, ArenaError::TeamFull);
            *picks |= bit;
            Ok(true)
        }
    }

    /// Roster indexes of the picked team members.
    pub fn team(&self, side: Side) -> Vec<u16> {
        let picks = self.picks(side);
        self.dealt(side)
            .iter()
            .enumerate()
            .filter(|(slot, _)| picks & (1 << slot) != 0)
            .map(|(_, &id)| id)
            .collect()
    }

    /// Sum of the picked team's base power.
    pub fn team_power(&self, side: Side) -> u32 {
        self.team(side)
            .iter()
            .map(|&id| catalog::get(id).power as u32)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn battle() -> Battle {
        Battle {
            player_one: Pubkey::new_from_array([1; 32]),
            player_two: Pubkey::new_from_array([2; 32]),
            stake: 50,
            dealt_one: [0, 1, 2, 3, 4],
            dealt_two: [5, 6, 7, 8, 9],
            picks_one: 0,
            picks_two: 0,
            ready_one: false,
            ready_two: false,
            status: BattleStatus::Drafting,
            winner: None,
            started_at: 0,
            settled_at: 0,
            bump: 255,
        }
    }

    #[test]
    fn side_lookup_matches_participants() {
        let b = battle();
        assert_eq!(b.side_of(&b.player_one), Some(Side::One));
        assert_eq!(b.side_of(&b.player_two), Some(Side::Two));
        assert_eq!(b.side_of(&Pubkey::new_from_array([9; 32])), None);
    }

    #[test]
    fn toggling_selects_and_deselects() {
        let mut b = battle();
        assert!(b.toggle_pick(Side::One, 2).unwrap());
        assert_eq!(b.picked_count(Side::One), 1);
        assert!(!b.toggle_pick(Side::One, 2).unwrap());
        assert_eq!(b.picked_count(Side::One), 0);
    }

    #[test]
    fn fourth_selection_is_refused() {
        let mut b = battle();
        for slot in 0..3 {
            assert!(b.toggle_pick(Side::Two, slot).unwrap());
        }
        assert!(b.toggle_pick(Side::Two, 3).is_err());
        assert_eq!(b.picked_count(Side::Two), 3);
        // Deselecting one frees a slot again.
        b.toggle_pick(Side::Two, 0).unwrap();
        assert!(b.toggle_pick(Side::Two, 3).unwrap());
    }

    #[test]
    fn out_of_range_slot_is_refused() {
        let mut b = battle();
        assert!(b.toggle_pick(Side::One, 5).is_err());
    }

    #[test]
    fn team_power_sums_picked_base_power() {
        let mut b = battle();
        for slot in [0, 1, 4] {
            b.toggle_pick(Side::One, slot).unwrap();
        }
        let expected: u32 = [0u16, 1, 4]
            .iter()
            .map(|&id| catalog::get(id).power as u32)
            .sum();
        assert_eq!(b.team_power(Side::One), expected);
        assert_eq!(b.team(Side::One), vec![0, 1, 4]);
    }
}

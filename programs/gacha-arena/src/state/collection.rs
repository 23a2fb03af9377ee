use anchor_lang::prelude::*;

use crate::catalog::{self, Rarity};
use crate::errors::ArenaError;

/// Upper bound on roster entries a collection can hold. Sized above the
/// catalog so every fighter can be owned at once.
pub const MAX_COLLECTION_ENTRIES: usize = 96;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace)]
pub struct OwnedFighter {
    /// Roster index.
    pub fighter: u16,
    /// Unix timestamp the fighter was obtained.
    pub obtained_at: i64,
    /// Times fielded in a PvP team.
    pub times_used: u16,
    /// PvP battles won with this fighter on the team.
    pub wins_with: u16,
}

/// Per-player fighter collection. Ownership is boolean; duplicate draws
/// are reported, never stacked.
#[account]
#[derive(InitSpace)]
pub struct Collection {
    /// Wallet this collection belongs to.
    pub player: Pubkey,
    #[max_len(MAX_COLLECTION_ENTRIES)]
    pub entries: Vec<OwnedFighter>,
    /// PDA bump seed.
    pub bump: u8,
}

impl Collection {
    pub const SEED: &'static [u8] = b"collection";

    pub fn owns(&self, fighter: u16) -> bool {
        self.entries.iter().any(|e| e.fighter == fighter)
    }

    /// Adds the fighter if not yet owned. Returns false for a duplicate.
    pub fn grant(&mut self, fighter: u16, now: i64) -> Result<bool> {
        if self.owns(fighter) {
            return Ok(false);
        }
        require!(
            self.entries.len() < MAX_COLLECTION_ENTRIES,
            ArenaError::RosterFull
        );
        self.entries.push(OwnedFighter {
            fighter,
            obtained_at: now,
            times_used: 0,
            wins_with: 0,
        });
        Ok(true)
    }

    pub fn entry_mut(&mut self, fighter: u16) -> Option<&mut OwnedFighter> {
        self.entries.iter_mut().find(|e| e.fighter == fighter)
    }

    pub fn unique_count(&self) -> u32 {
        self.entries.len() as u32
    }

    pub fn rarity_count(&self, rarity: Rarity) -> u32 {
        self.entries
            .iter()
            .filter(|e| catalog::get(e.fighter).rarity == rarity)
            .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection() -> Collection {
        Collection {
            player: Pubkey::default(),
            entries: Vec::new(),
            bump: 255,
        }
    }

    #[test]
    fn duplicate_grant_does_not_stack() {
        let mut c = collection();
        assert!(c.grant(7, 1).unwrap());
        assert!(!c.grant(7, 2).unwrap());
        assert_eq!(c.entries.len(), 1);
        assert_eq!(c.entries[0].obtained_at, 1);
    }

    #[test]
    fn rarity_counts_follow_the_catalog() {
        let mut c = collection();
        let legendary = catalog::ROSTER
            .iter()
            .position(|f| f.rarity == Rarity::Legendary)
            .unwrap() as u16;
        let common = catalog::ROSTER
            .iter()
            .position(|f| f.rarity == Rarity::Common)
            .unwrap() as u16;
        c.grant(legendary, 0).unwrap();
        c.grant(common, 0).unwrap();
        assert_eq!(c.rarity_count(Rarity::Legendary), 1);
        assert_eq!(c.rarity_count(Rarity::Common), 1);
        assert_eq!(c.unique_count(), 2);
    }
}

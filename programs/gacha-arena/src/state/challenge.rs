use anchor_lang::prelude::*;

use crate::constants::MAX_NAME_LEN;

/// An open PvP invitation. Seeded by creator, so each player can have at
/// most one outstanding challenge; the account is closed on accept,
/// decline, cancel or expiry.
#[account]
#[derive(InitSpace)]
pub struct Challenge {
    /// Wallet that issued the challenge.
    pub creator: Pubkey,
    /// Creator display name snapshot.
    #[max_len(MAX_NAME_LEN)]
    pub creator_name: String,
    /// Stake each side must put up on accept.
    pub stake: u64,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Deadline after which anyone may expire the challenge.
    pub expires_at: i64,
    /// PDA bump seed.
    pub bump: u8,
}

impl Challenge {
    pub const SEED: &'static [u8] = b"challenge";

    pub fn expired(&self, now: i64) -> bool {
        now > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CHALLENGE_TTL_SECS;

    #[test]
    fn expiry_is_exclusive_of_the_deadline() {
        let c = Challenge {
            creator: Pubkey::default(),
            creator_name: "creator".to_string(),
            stake: 50,
            created_at: 1_000,
            expires_at: 1_000 + CHALLENGE_TTL_SECS,
            bump: 255,
        };
        assert!(!c.expired(1_000));
        assert!(!c.expired(1_000 + CHALLENGE_TTL_SECS));
        assert!(c.expired(1_001 + CHALLENGE_TTL_SECS));
    }
}

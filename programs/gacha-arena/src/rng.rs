//! Seed derivation and a deterministic random stream.
//!
//! Seeds mix the most recent slot hash with the clock and the acting
//! player's key through blake3. Draw logic consumes the seed through
//! `SeedStream`, which re-hashes with a counter per draw, so everything
//! downstream of the seed is pure and testable.

use anchor_lang::prelude::*;

use crate::errors::ArenaError;

/// Derives a 32-byte seed from the SlotHashes sysvar.
/// `domain` separates draws made by different instructions in one slot.
pub fn derive_seed(
    slot_hashes: &AccountInfo,
    clock: &Clock,
    player: &Pubkey,
    domain: &[u8],
) -> Result<[u8; 32]> {
    let data = slot_hashes.data.borrow();
    require!(data.len() >= 48, ArenaError::RandomnessUnavailable);
    let count = u64::from_le_bytes(data[0..8].try_into().unwrap());
    require!(count > 0, ArenaError::RandomnessUnavailable);

    // Entries are (slot: u64, hash: [u8; 32]), newest first.
    let newest_slot = u64::from_le_bytes(data[8..16].try_into().unwrap());
    let newest_hash: [u8; 32] = data[16..48].try_into().unwrap();

    let mut hasher = blake3::Hasher::new();
    hasher.update(domain);
    hasher.update(player.as_ref());
    hasher.update(&newest_hash);
    hasher.update(&newest_slot.to_le_bytes());
    hasher.update(&clock.unix_timestamp.to_le_bytes());
    Ok(*hasher.finalize().as_bytes())
}

/// Counter-mode stream over a fixed seed.
pub struct SeedStream {
    seed: [u8; 32],
    counter: u64,
}

impl SeedStream {
    pub fn new(seed: [u8; 32]) -> Self {
        Self { seed, counter: 0 }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.seed);
        hasher.update(&self.counter.to_le_bytes());
        self.counter += 1;
        let digest = hasher.finalize();
        u64::from_le_bytes(digest.as_bytes()[0..8].try_into().unwrap())
    }

    /// Uniform draw in `0..n`. `n` must be non-zero.
    pub fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    /// True with `pct` percent probability.
    pub fn chance(&mut self, pct: u64) -> bool {
        self.below(100) < pct
    }

    /// Draws `k` distinct elements from `pool` by partial Fisher-Yates.
    /// `k` must not exceed the pool size.
    pub fn sample_distinct(&mut self, pool: &[u16], k: usize) -> Vec<u16> {
        let mut pool = pool.to_vec();
        for i in 0..k {
            let j = i + self.below((pool.len() - i) as u64) as usize;
            pool.swap(i, j);
        }
        pool.truncate(k);
        pool
    }
}

#[cfg(test)]
pub(crate) fn test_seed(tag: u64) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(b"gacha-arena-test");
    hasher.update(&tag.to_le_bytes());
    *hasher.finalize().as_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_is_deterministic() {
        let mut a = SeedStream::new(test_seed(1));
        let mut b = SeedStream::new(test_seed(1));
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
        let mut c = SeedStream::new(test_seed(2));
        assert_ne!(SeedStream::new(test_seed(1)).next_u64(), c.next_u64());
    }

    #[test]
    fn below_stays_in_range() {
        let mut s = SeedStream::new(test_seed(3));
        for n in [1u64, 2, 7, 100, 12345] {
            for _ in 0..200 {
                assert!(s.below(n) < n);
            }
        }
    }

    #[test]
    fn coin_is_roughly_fair() {
        let mut s = SeedStream::new(test_seed(4));
        let heads = (0..100_000).filter(|_| s.chance(50)).count();
        assert!((49_000..=51_000).contains(&heads), "heads = {heads}");
    }

    #[test]
    fn sample_distinct_draws_distinct_pool_members() {
        let pool: Vec<u16> = (0..20).collect();
        let mut s = SeedStream::new(test_seed(5));
        for _ in 0..100 {
            let hand = s.sample_distinct(&pool, 5);
            assert_eq!(hand.len(), 5);
            for (i, x) in hand.iter().enumerate() {
                assert!(pool.contains(x));
                assert!(!hand[i + 1..].contains(x));
            }
        }
    }
}

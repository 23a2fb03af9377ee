//! Random draws over the catalog: bet matchups, gacha pulls, PvP hands and
//! outcome rolls. All functions are pure given a `SeedStream`.

use anchor_lang::prelude::*;

use crate::catalog::{self, Rarity};
use crate::constants::{
    HAND_SIZE, SEASON_WEIGHT_DEN, SEASON_WEIGHT_NUM, THEME_FIGHTER_WEIGHT,
};
use crate::errors::ArenaError;
use crate::rng::SeedStream;
use crate::season::Theme;

/// Weighted rarity pick from an item's pool. With `season_boost`, every
/// weight is scaled by 13/10; scaling all weights keeps the ratios, the
/// truncation matches the live game.
pub fn draw_rarity(stream: &mut SeedStream, pool: &[Rarity], season_boost: bool) -> Rarity {
    let weight = |r: &Rarity| {
        let w = r.weight();
        if season_boost {
            w * SEASON_WEIGHT_NUM / SEASON_WEIGHT_DEN
        } else {
            w
        }
    };
    let total: u64 = pool.iter().map(weight).sum();
    let mut roll = stream.below(total);
    for rarity in pool {
        let w = weight(rarity);
        if roll < w {
            return *rarity;
        }
        roll -= w;
    }
    // Unreachable: roll < total and the weights sum to total.
    pool[pool.len() - 1]
}

/// Uniform fighter pick within a rarity among this season's available
/// fighters. With `theme_boost`, fighters tagged for the active theme
/// carry exactly 3x the weight of untagged ones.
pub fn draw_fighter(
    stream: &mut SeedStream,
    rarity: Rarity,
    theme: Theme,
    theme_boost: bool,
) -> Result<u16> {
    let candidates: Vec<u16> = catalog::available_ids(theme)
        .into_iter()
        .filter(|&id| catalog::get(id).rarity == rarity)
        .collect();
    require!(!candidates.is_empty(), ArenaError::RosterTooSmall);

    let weight = |id: u16| {
        if theme_boost && catalog::get(id).boost.contains(&theme) {
            THEME_FIGHTER_WEIGHT
        } else {
            1
        }
    };
    let total: u64 = candidates.iter().map(|&id| weight(id)).sum();
    let mut roll = stream.below(total);
    for &id in &candidates {
        let w = weight(id);
        if roll < w {
            return Ok(id);
        }
        roll -= w;
    }
    Ok(candidates[candidates.len() - 1])
}

/// Two distinct fighters for a bet matchup.
pub fn draw_matchup(stream: &mut SeedStream, theme: Theme) -> Result<(u16, u16)> {
    let ids = catalog::available_ids(theme);
    require!(ids.len() >= 2, ArenaError::RosterTooSmall);
    let pair = stream.sample_distinct(&ids, 2);
    Ok((pair[0], pair[1]))
}

/// Deals five fighters to each PvP side. Hands are disjoint whenever the
/// available pool holds ten fighters; with a smaller pool the second hand
/// is an independent redraw and may overlap the first.
pub fn deal_hands(stream: &mut SeedStream, theme: Theme) -> Result<([u16; 5], [u16; 5])> {
    let ids = catalog::available_ids(theme);
    require!(ids.len() >= HAND_SIZE, ArenaError::RosterTooSmall);

    let first = stream.sample_distinct(&ids, HAND_SIZE);
    let rest: Vec<u16> = ids.iter().copied().filter(|id| !first.contains(id)).collect();
    let second = if rest.len() >= HAND_SIZE {
        stream.sample_distinct(&rest, HAND_SIZE)
    } else {
        stream.sample_distinct(&ids, HAND_SIZE)
    };

    Ok((first.try_into().unwrap(), second.try_into().unwrap()))
}

/// Bet outcome: side A wins with probability power_a / (power_a + power_b),
/// so an underdog still wins in proportion to its strength.
pub fn first_side_wins(stream: &mut SeedStream, power_a: u16, power_b: u16) -> bool {
    let total = power_a as u64 + power_b as u64;
    stream.below(total) < power_a as u64
}

/// Team battle outcome: the strictly higher sum wins, an exact tie is a
/// fair coin flip.
pub fn first_team_wins(stream: &mut SeedStream, sum_one: u32, sum_two: u32) -> bool {
    if sum_one != sum_two {
        sum_one > sum_two
    } else {
        stream.chance(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::test_seed;

    #[test]
    fn proportional_odds_converge_on_power_share() {
        // 60 vs 40 power should win side A ~60% of trials.
        let mut s = SeedStream::new(test_seed(10));
        let wins = (0..100_000).filter(|_| first_side_wins(&mut s, 60, 40)).count();
        let share = wins as f64 / 100_000.0;
        assert!((0.59..=0.61).contains(&share), "share = {share}");
    }

    #[test]
    fn underdog_still_wins_sometimes() {
        let mut s = SeedStream::new(test_seed(11));
        let wins = (0..100_000).filter(|_| first_side_wins(&mut s, 5, 95)).count();
        let share = wins as f64 / 100_000.0;
        assert!((0.04..=0.06).contains(&share), "share = {share}");
    }

    #[test]
    fn rarity_frequencies_match_weights() {
        let pool = [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary];
        let mut s = SeedStream::new(test_seed(12));
        let mut counts = [0u32; 4];
        for _ in 0..100_000 {
            match draw_rarity(&mut s, &pool, false) {
                Rarity::Common => counts[0] += 1,
                Rarity::Rare => counts[1] += 1,
                Rarity::Epic => counts[2] += 1,
                Rarity::Legendary => counts[3] += 1,
            }
        }
        for (count, expected) in counts.iter().zip([0.50, 0.30, 0.15, 0.05]) {
            let freq = *count as f64 / 100_000.0;
            assert!((freq - expected).abs() < 0.01, "freq {freq} vs {expected}");
        }
    }

    #[test]
    fn season_boost_preserves_rarity_ratios() {
        // Scaling every weight by 1.3 must not change relative odds.
        let pool = [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary];
        let mut s = SeedStream::new(test_seed(13));
        let legendaries = (0..100_000)
            .filter(|_| draw_rarity(&mut s, &pool, true) == Rarity::Legendary)
            .count();
        let freq = legendaries as f64 / 100_000.0;
        assert!((freq - 0.05).abs() < 0.01, "freq = {freq}");
    }

    #[test]
    fn theme_boost_amplifies_tagged_fighters_three_to_one() {
        let tagged: Vec<u16> = catalog::available_ids(Theme::Dragons)
            .into_iter()
            .filter(|&id| {
                let f = catalog::get(id);
                f.rarity == Rarity::Legendary && f.boost.contains(&Theme::Dragons)
            })
            .collect();
        let untagged: Vec<u16> = catalog::available_ids(Theme::Dragons)
            .into_iter()
            .filter(|&id| {
                let f = catalog::get(id);
                f.rarity == Rarity::Legendary && !f.boost.contains(&Theme::Dragons)
            })
            .collect();
        assert!(!tagged.is_empty() && !untagged.is_empty());

        let mut s = SeedStream::new(test_seed(14));
        let mut tagged_hits = 0u32;
        let mut untagged_hits = 0u32;
        for _ in 0..200_000 {
            let id = draw_fighter(&mut s, Rarity::Legendary, Theme::Dragons, true).unwrap();
            if tagged.contains(&id) {
                tagged_hits += 1;
            } else {
                untagged_hits += 1;
            }
        }
        let per_tagged = tagged_hits as f64 / tagged.len() as f64;
        let per_untagged = untagged_hits as f64 / untagged.len() as f64;
        let ratio = per_tagged / per_untagged;
        assert!((2.8..=3.2).contains(&ratio), "ratio = {ratio}");
    }

    #[test]
    fn matchup_fighters_are_distinct_and_available() {
        let mut s = SeedStream::new(test_seed(15));
        for _ in 0..500 {
            let (a, b) = draw_matchup(&mut s, Theme::Water).unwrap();
            assert_ne!(a, b);
            assert!(catalog::get(a).available(Theme::Water));
            assert!(catalog::get(b).available(Theme::Water));
        }
    }

    #[test]
    fn dealt_hands_are_disjoint_with_full_roster() {
        let mut s = SeedStream::new(test_seed(16));
        for _ in 0..200 {
            let (one, two) = deal_hands(&mut s, Theme::Dragons).unwrap();
            for id in one {
                assert!(!two.contains(&id));
            }
        }
    }

    #[test]
    fn team_resolution_is_deterministic_without_a_tie() {
        let mut s = SeedStream::new(test_seed(17));
        for _ in 0..1_000 {
            assert!(first_team_wins(&mut s, 210, 195));
            assert!(!first_team_wins(&mut s, 195, 210));
        }
    }

    #[test]
    fn tied_teams_split_evenly() {
        let mut s = SeedStream::new(test_seed(18));
        let wins = (0..100_000).filter(|_| first_team_wins(&mut s, 200, 200)).count();
        let share = wins as f64 / 100_000.0;
        assert!((0.49..=0.51).contains(&share), "share = {share}");
    }
}

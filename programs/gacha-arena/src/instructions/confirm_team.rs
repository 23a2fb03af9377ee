use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::slot_hashes;

use crate::constants::{PVP_PRIZE, SCORE_PVP_LOSS, SCORE_PVP_WIN, TEAM_SIZE};
use crate::draws::first_team_wins;
use crate::errors::ArenaError;
use crate::events::{BattleSettled, TeamConfirmed};
use crate::rng::{derive_seed, SeedStream};
use crate::state::{Battle, BattleStatus, Collection, Player, Side};

#[derive(Accounts)]
pub struct ConfirmTeam<'info> {
    #[account(
        mut,
        seeds = [Battle::SEED, battle.player_one.as_ref(), battle.player_two.as_ref()],
        bump = battle.bump,
        constraint = battle.status == BattleStatus::Drafting @ ArenaError::BattleNotDrafting,
    )]
    pub battle: Account<'info, Battle>,

    #[account(
        mut,
        seeds = [Player::SEED, battle.player_one.as_ref()],
        bump = player_one.bump,
    )]
    pub player_one: Account<'info, Player>,

    #[account(
        mut,
        seeds = [Player::SEED, battle.player_two.as_ref()],
        bump = player_two.bump,
    )]
    pub player_two: Account<'info, Player>,

    #[account(
        mut,
        seeds = [Collection::SEED, battle.player_one.as_ref()],
        bump = collection_one.bump,
    )]
    pub collection_one: Account<'info, Collection>,

    #[account(
        mut,
        seeds = [Collection::SEED, battle.player_two.as_ref()],
        bump = collection_two.bump,
    )]
    pub collection_two: Account<'info, Collection>,

    pub participant: Signer<'info>,

    /// CHECK: address constrained to the SlotHashes sysvar.
    #[account(address = slot_hashes::ID)]
    pub slot_hashes: UncheckedAccount<'info>,
}

/// Locks the signer's team. The second confirmation resolves the battle in
/// the same transaction.
pub fn handler(ctx: Context<ConfirmTeam>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let participant = ctx.accounts.participant.key();

    let battle = &mut ctx.accounts.battle;
    let side = battle
        .side_of(&participant)
        .ok_or(ArenaError::NotAParticipant)?;

    require!(!battle.ready(side), ArenaError::TeamAlreadyReady);
    require!(
        battle.picked_count(side) == TEAM_SIZE,
        ArenaError::TeamIncomplete
    );

    match side {
        Side::One => battle.ready_one = true,
        Side::Two => battle.ready_two = true,
    }

    emit!(TeamConfirmed {
        battle: battle.key(),
        player: participant,
        team_power: battle.team_power(side),
    });

    if !(battle.ready_one && battle.ready_two) {
        return Ok(());
    }

    // Both sides locked in: resolve now.
    let power_one = battle.team_power(Side::One);
    let power_two = battle.team_power(Side::Two);

    let seed = derive_seed(
        &ctx.accounts.slot_hashes.to_account_info(),
        &clock,
        &participant,
        b"battle",
    )?;
    let mut stream = SeedStream::new(seed);
    let one_wins = first_team_wins(&mut stream, power_one, power_two);

    let (winner_side, winner_key) = if one_wins {
        (Side::One, battle.player_one)
    } else {
        (Side::Two, battle.player_two)
    };

    {
        let (winner, loser) = if one_wins {
            (&mut ctx.accounts.player_one, &mut ctx.accounts.player_two)
        } else {
            (&mut ctx.accounts.player_two, &mut ctx.accounts.player_one)
        };
        winner.credit(PVP_PRIZE)?;
        winner.pvp_wins = winner.pvp_wins.saturating_add(1);
        winner.add_score(SCORE_PVP_WIN);
        loser.pvp_losses = loser.pvp_losses.saturating_add(1);
        loser.add_score(SCORE_PVP_LOSS);
        winner.games_played = winner.games_played.saturating_add(1);
        loser.games_played = loser.games_played.saturating_add(1);
        winner.touch(now);
        loser.touch(now);
    }

    // Usage stats for fielded fighters the players actually own.
    for (side, collection) in [
        (Side::One, &mut ctx.accounts.collection_one),
        (Side::Two, &mut ctx.accounts.collection_two),
    ] {
        let won = side == winner_side;
        for id in battle.team(side) {
            if let Some(entry) = collection.entry_mut(id) {
                entry.times_used = entry.times_used.saturating_add(1);
                if won {
                    entry.wins_with = entry.wins_with.saturating_add(1);
                }
            }
        }
    }

    battle.status = BattleStatus::Settled;
    battle.winner = Some(winner_key);
    battle.settled_at = now;

    emit!(BattleSettled {
        player_one: battle.player_one,
        player_two: battle.player_two,
        power_one,
        power_two,
        winner: winner_key,
        prize: PVP_PRIZE,
    });

    Ok(())
}

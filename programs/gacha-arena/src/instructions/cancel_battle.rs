use anchor_lang::prelude::*;

use crate::errors::ArenaError;
use crate::events::BattleCancelled;
use crate::state::{Battle, BattleStatus, Player, Side};

#[derive(Accounts)]
pub struct CancelBattle<'info> {
    #[account(
        mut,
        seeds = [Battle::SEED, battle.player_one.as_ref(), battle.player_two.as_ref()],
        bump = battle.bump,
        constraint = battle.status == BattleStatus::Drafting @ ArenaError::BattleNotDrafting,
        close = participant,
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

    #[account(mut)]
    pub participant: Signer<'info>,
}

/// Either side may walk away while drafting; both stakes go back.
pub fn handler(ctx: Context<CancelBattle>) -> Result<()> {
    let battle = &ctx.accounts.battle;
    let participant = ctx.accounts.participant.key();

    let side = battle
        .side_of(&participant)
        .ok_or(ArenaError::NotAParticipant)?;
    let opponent = match side {
        Side::One => battle.player_two,
        Side::Two => battle.player_one,
    };

    ctx.accounts.player_one.credit(battle.stake)?;
    ctx.accounts.player_two.credit(battle.stake)?;

    emit!(BattleCancelled {
        cancelled_by: participant,
        opponent,
        refunded_each: battle.stake,
    });

    Ok(())
}

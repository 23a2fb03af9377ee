use anchor_lang::prelude::*;

use crate::errors::ArenaError;
use crate::state::{Battle, BattleStatus};

#[derive(Accounts)]
pub struct CloseBattle<'info> {
    #[account(
        mut,
        seeds = [Battle::SEED, battle.player_one.as_ref(), battle.player_two.as_ref()],
        bump = battle.bump,
        constraint = battle.status == BattleStatus::Settled @ ArenaError::BattleNotSettled,
        close = participant,
    )]
    pub battle: Account<'info, Battle>,

    /// Either participant may reclaim the rent of a settled battle.
    #[account(mut)]
    pub participant: Signer<'info>,
}

pub fn handler(ctx: Context<CloseBattle>) -> Result<()> {
    let battle = &ctx.accounts.battle;
    require!(
        battle.side_of(&ctx.accounts.participant.key()).is_some(),
        ArenaError::NotAParticipant
    );

    msg!("battle closed, rent reclaimed");
    Ok(())
}

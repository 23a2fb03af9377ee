use anchor_lang::prelude::*;

use crate::errors::ArenaError;
use crate::state::{Battle, BattleStatus};

#[derive(Accounts)]
pub struct SelectTeamMember<'info> {
    #[account(
        mut,
        seeds = [Battle::SEED, battle.player_one.as_ref(), battle.player_two.as_ref()],
        bump = battle.bump,
        constraint = battle.status == BattleStatus::Drafting @ ArenaError::BattleNotDrafting,
    )]
    pub battle: Account<'info, Battle>,

    pub participant: Signer<'info>,
}

/// Toggles one of the five dealt slots in or out of the signer's team.
pub fn handler(ctx: Context<SelectTeamMember>, slot: u8) -> Result<()> {
    let battle = &mut ctx.accounts.battle;
    let side = battle
        .side_of(&ctx.accounts.participant.key())
        .ok_or(ArenaError::NotAParticipant)?;

    let selected = battle.toggle_pick(side, slot as usize)?;
    msg!(
        "slot {} {} ({}/3 picked)",
        slot,
        if selected { "selected" } else { "deselected" },
        battle.picked_count(side)
    );

    Ok(())
}

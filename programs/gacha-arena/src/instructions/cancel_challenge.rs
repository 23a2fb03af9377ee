use anchor_lang::prelude::*;

use crate::errors::ArenaError;
use crate::events::ChallengeCancelled;
use crate::state::Challenge;

#[derive(Accounts)]
pub struct CancelChallenge<'info> {
    #[account(
        mut,
        seeds = [Challenge::SEED, creator.key().as_ref()],
        bump = challenge.bump,
        constraint = challenge.creator == creator.key() @ ArenaError::Unauthorized,
        close = creator,
    )]
    pub challenge: Account<'info, Challenge>,

    #[account(mut)]
    pub creator: Signer<'info>,
}

pub fn handler(ctx: Context<CancelChallenge>) -> Result<()> {
    emit!(ChallengeCancelled {
        creator: ctx.accounts.challenge.creator,
    });
    Ok(())
}

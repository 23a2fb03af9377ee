use anchor_lang::prelude::*;

use crate::errors::ArenaError;
use crate::events::ChallengeDeclined;
use crate::state::Challenge;

#[derive(Accounts)]
pub struct DeclineChallenge<'info> {
    #[account(
        mut,
        seeds = [Challenge::SEED, challenge.creator.as_ref()],
        bump = challenge.bump,
        close = creator_wallet,
    )]
    pub challenge: Account<'info, Challenge>,

    /// CHECK: the challenge creator's wallet, receives the challenge rent.
    #[account(mut, address = challenge.creator)]
    pub creator_wallet: UncheckedAccount<'info>,

    pub decliner: Signer<'info>,
}

pub fn handler(ctx: Context<DeclineChallenge>) -> Result<()> {
    let challenge = &ctx.accounts.challenge;
    let decliner = ctx.accounts.decliner.key();

    // Creators withdraw their own challenge through cancel, not decline.
    require!(challenge.creator != decliner, ArenaError::CannotChallengeSelf);

    emit!(ChallengeDeclined {
        creator: challenge.creator,
        declined_by: decliner,
    });

    Ok(())
}

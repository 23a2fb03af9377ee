use anchor_lang::prelude::*;

use crate::errors::ArenaError;
use crate::events::ChallengeExpired;
use crate::state::Challenge;

/// Permissionless cleanup crank for challenges past their deadline. Runs
/// at most once per challenge: the account is closed here, so a second
/// call finds nothing to expire.
#[derive(Accounts)]
pub struct ExpireChallenge<'info> {
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

    pub cranker: Signer<'info>,
}

pub fn handler(ctx: Context<ExpireChallenge>) -> Result<()> {
    let clock = Clock::get()?;
    let challenge = &ctx.accounts.challenge;

    require!(
        challenge.expired(clock.unix_timestamp),
        ArenaError::ChallengeNotExpired
    );

    emit!(ChallengeExpired {
        creator: challenge.creator,
    });

    Ok(())
}

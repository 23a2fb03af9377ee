use anchor_lang::prelude::*;

use crate::constants::{CHALLENGE_TTL_SECS, PVP_STAKE};
use crate::errors::ArenaError;
use crate::events::ChallengeCreated;
use crate::state::{Challenge, GameConfig, Player};

#[derive(Accounts)]
pub struct CreateChallenge<'info> {
    #[account(
        seeds = [GameConfig::SEED],
        bump = config.bump,
        constraint = !config.paused @ ArenaError::Paused,
    )]
    pub config: Account<'info, GameConfig>,

    #[account(
        mut,
        seeds = [Player::SEED, authority.key().as_ref()],
        bump = player.bump,
    )]
    pub player: Account<'info, Player>,

    /// Seeded by creator: a second outstanding challenge cannot be created
    /// until the first one is accepted, declined, cancelled or expired.
    #[account(
        init,
        payer = authority,
        space = 8 + Challenge::INIT_SPACE,
        seeds = [Challenge::SEED, authority.key().as_ref()],
        bump,
    )]
    pub challenge: Account<'info, Challenge>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateChallenge>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let player = &mut ctx.accounts.player;

    // The stake is only held on accept, but creating a challenge one cannot
    // afford would just waste the opponent's time.
    require!(player.balance >= PVP_STAKE, ArenaError::InsufficientFunds);

    let challenge = &mut ctx.accounts.challenge;
    challenge.creator = player.authority;
    challenge.creator_name = player.display_name.clone();
    challenge.stake = PVP_STAKE;
    challenge.created_at = now;
    challenge.expires_at = now + CHALLENGE_TTL_SECS;
    challenge.bump = ctx.bumps.challenge;

    player.touch(now);

    emit!(ChallengeCreated {
        creator: player.authority,
        stake: PVP_STAKE,
        expires_at: challenge.expires_at,
    });

    Ok(())
}

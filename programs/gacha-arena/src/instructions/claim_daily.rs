use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::slot_hashes;

use crate::constants::{DAILY_COOLDOWN_SECS, DAILY_REWARD_MAX, DAILY_REWARD_MIN, SCORE_DAILY};
use crate::errors::ArenaError;
use crate::events::DailyRewardClaimed;
use crate::rng::{derive_seed, SeedStream};
use crate::state::{GameConfig, Player};

#[derive(Accounts)]
pub struct ClaimDaily<'info> {
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

    pub authority: Signer<'info>,

    /// CHECK: address constrained to the SlotHashes sysvar.
    #[account(address = slot_hashes::ID)]
    pub slot_hashes: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<ClaimDaily>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let player = &mut ctx.accounts.player;

    require!(
        now - player.last_daily_at >= DAILY_COOLDOWN_SECS,
        ArenaError::DailyRewardNotReady
    );

    let seed = derive_seed(
        &ctx.accounts.slot_hashes.to_account_info(),
        &clock,
        &player.authority,
        b"daily",
    )?;
    let mut stream = SeedStream::new(seed);
    let amount = DAILY_REWARD_MIN + stream.below(DAILY_REWARD_MAX - DAILY_REWARD_MIN + 1);

    player.credit(amount)?;
    player.add_score(SCORE_DAILY);
    player.last_daily_at = now;
    player.touch(now);

    emit!(DailyRewardClaimed {
        player: player.authority,
        amount,
        new_balance: player.balance,
    });

    Ok(())
}

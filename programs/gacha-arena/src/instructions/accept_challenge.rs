use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::slot_hashes;

use crate::draws::deal_hands;
use crate::errors::ArenaError;
use crate::events::BattleStarted;
use crate::rng::{derive_seed, SeedStream};
use crate::season::active_theme;
use crate::state::{try_debit_both, Battle, BattleStatus, Challenge, GameConfig, Player};

#[derive(Accounts)]
pub struct AcceptChallenge<'info> {
    #[account(
        mut,
        seeds = [GameConfig::SEED],
        bump = config.bump,
        constraint = !config.paused @ ArenaError::Paused,
    )]
    pub config: Account<'info, GameConfig>,

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

    #[account(
        mut,
        seeds = [Player::SEED, challenge.creator.as_ref()],
        bump = creator_player.bump,
    )]
    pub creator_player: Account<'info, Player>,

    #[account(
        mut,
        seeds = [Player::SEED, acceptor.key().as_ref()],
        bump = acceptor_player.bump,
    )]
    pub acceptor_player: Account<'info, Player>,

    #[account(
        init,
        payer = acceptor,
        space = 8 + Battle::INIT_SPACE,
        seeds = [Battle::SEED, challenge.creator.as_ref(), acceptor.key().as_ref()],
        bump,
    )]
    pub battle: Account<'info, Battle>,

    #[account(mut)]
    pub acceptor: Signer<'info>,

    /// CHECK: address constrained to the SlotHashes sysvar.
    #[account(address = slot_hashes::ID)]
    pub slot_hashes: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<AcceptChallenge>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let challenge = &ctx.accounts.challenge;
    let acceptor_key = ctx.accounts.acceptor.key();
    let stake = challenge.stake;

    require!(challenge.creator != acceptor_key, ArenaError::CannotChallengeSelf);
    require!(!challenge.expired(now), ArenaError::ChallengeExpired);

    // Hold both stakes or neither.
    let creator_player = &mut ctx.accounts.creator_player;
    let acceptor_player = &mut ctx.accounts.acceptor_player;
    try_debit_both(creator_player, acceptor_player, stake)?;

    let seed = derive_seed(
        &ctx.accounts.slot_hashes.to_account_info(),
        &clock,
        &acceptor_key,
        b"deal",
    )?;
    let mut stream = SeedStream::new(seed);
    let (dealt_one, dealt_two) = deal_hands(&mut stream, active_theme(now))?;

    let battle = &mut ctx.accounts.battle;
    battle.player_one = challenge.creator;
    battle.player_two = acceptor_key;
    battle.stake = stake;
    battle.dealt_one = dealt_one;
    battle.dealt_two = dealt_two;
    battle.picks_one = 0;
    battle.picks_two = 0;
    battle.ready_one = false;
    battle.ready_two = false;
    battle.status = BattleStatus::Drafting;
    battle.winner = None;
    battle.started_at = now;
    battle.settled_at = 0;
    battle.bump = ctx.bumps.battle;

    creator_player.touch(now);
    acceptor_player.touch(now);

    let config = &mut ctx.accounts.config;
    config.total_battles = config.total_battles.saturating_add(1);

    emit!(BattleStarted {
        player_one: battle.player_one,
        player_two: battle.player_two,
        stake,
        dealt_one,
        dealt_two,
    });

    Ok(())
}

use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::slot_hashes;

use crate::catalog;
use crate::constants::MIN_BET_BALANCE;
use crate::draws::draw_matchup;
use crate::errors::ArenaError;
use crate::events::BetOpened;
use crate::rng::{derive_seed, SeedStream};
use crate::season::active_theme;
use crate::state::{BetSession, GameConfig, Player};

#[derive(Accounts)]
pub struct StartBet<'info> {
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

    /// Re-used across bets: opening a new preview replaces whatever the
    /// previous session held.
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + BetSession::INIT_SPACE,
        seeds = [BetSession::SEED, authority.key().as_ref()],
        bump,
    )]
    pub session: Account<'info, BetSession>,

    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: address constrained to the SlotHashes sysvar.
    #[account(address = slot_hashes::ID)]
    pub slot_hashes: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<StartBet>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let player = &mut ctx.accounts.player;
    let session = &mut ctx.accounts.session;

    // A held stake from an abandoned wager goes back before the session is
    // replaced wholesale.
    if session.has_wager() {
        player.credit(session.wager)?;
        session.wager = 0;
    }

    require!(player.balance >= MIN_BET_BALANCE, ArenaError::InsufficientFunds);

    let seed = derive_seed(
        &ctx.accounts.slot_hashes.to_account_info(),
        &clock,
        &player.authority,
        b"bet",
    )?;
    let mut stream = SeedStream::new(seed);
    let theme = active_theme(now);
    let (fighter_a, fighter_b) = draw_matchup(&mut stream, theme)?;

    session.player = player.authority;
    session.fighter_a = fighter_a;
    session.fighter_b = fighter_b;
    session.power_a = catalog::get(fighter_a).effective_power(theme);
    session.power_b = catalog::get(fighter_b).effective_power(theme);
    session.wager = 0;
    session.payout_on_win = 0;
    session.opened_at = now;
    session.bump = ctx.bumps.session;

    player.touch(now);

    emit!(BetOpened {
        player: player.authority,
        fighter_a,
        fighter_b,
        power_a: session.power_a,
        power_b: session.power_b,
    });

    Ok(())
}

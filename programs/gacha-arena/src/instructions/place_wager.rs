use anchor_lang::prelude::*;

use crate::constants::wager_payout;
use crate::errors::ArenaError;
use crate::events::WagerPlaced;
use crate::state::{BetSession, GameConfig, Player};

#[derive(Accounts)]
pub struct PlaceWager<'info> {
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

    /// A missing session means there is no preview to wager on; the stale
    /// caller is told to start over.
    #[account(
        mut,
        seeds = [BetSession::SEED, authority.key().as_ref()],
        bump = session.bump,
    )]
    pub session: Account<'info, BetSession>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<PlaceWager>, amount: u64) -> Result<()> {
    let payout_on_win = wager_payout(amount).ok_or(ArenaError::InvalidWagerAmount)?;

    let clock = Clock::get()?;
    let player = &mut ctx.accounts.player;
    let session = &mut ctx.accounts.session;

    // Re-picking an amount releases the previously held stake first.
    if session.has_wager() {
        player.credit(session.wager)?;
    }

    player.try_debit(amount)?;
    session.wager = amount;
    session.payout_on_win = payout_on_win;

    player.touch(clock.unix_timestamp);

    emit!(WagerPlaced {
        player: player.authority,
        amount,
        payout_on_win,
    });

    Ok(())
}

use anchor_lang::prelude::*;

use crate::events::BetCancelled;
use crate::state::{BetSession, Player};

#[derive(Accounts)]
pub struct CancelBet<'info> {
    #[account(
        mut,
        seeds = [Player::SEED, authority.key().as_ref()],
        bump = player.bump,
    )]
    pub player: Account<'info, Player>,

    #[account(
        mut,
        seeds = [BetSession::SEED, authority.key().as_ref()],
        bump = session.bump,
        close = authority,
    )]
    pub session: Account<'info, BetSession>,

    #[account(mut)]
    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<CancelBet>) -> Result<()> {
    let player = &mut ctx.accounts.player;
    let session = &ctx.accounts.session;

    let refunded = session.wager;
    if refunded > 0 {
        player.credit(refunded)?;
    }

    emit!(BetCancelled {
        player: player.authority,
        refunded,
    });

    Ok(())
}

use anchor_lang::prelude::*;

use crate::errors::ArenaError;
use crate::events::BalanceGranted;
use crate::state::{GameConfig, Player};

#[derive(Accounts)]
pub struct AdminGrant<'info> {
    #[account(
        seeds = [GameConfig::SEED],
        bump = config.bump,
        constraint = config.admin == admin.key() @ ArenaError::Unauthorized,
    )]
    pub config: Account<'info, GameConfig>,

    #[account(
        mut,
        seeds = [Player::SEED, player.authority.as_ref()],
        bump = player.bump,
    )]
    pub player: Account<'info, Player>,

    pub admin: Signer<'info>,
}

pub fn handler(ctx: Context<AdminGrant>, amount: u64) -> Result<()> {
    let player = &mut ctx.accounts.player;
    player.credit(amount)?;

    emit!(BalanceGranted {
        player: player.authority,
        amount,
        new_balance: player.balance,
    });

    Ok(())
}

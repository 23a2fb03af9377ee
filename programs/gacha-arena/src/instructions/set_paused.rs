use anchor_lang::prelude::*;

use crate::errors::ArenaError;
use crate::state::GameConfig;

#[derive(Accounts)]
pub struct SetPaused<'info> {
    #[account(
        mut,
        seeds = [GameConfig::SEED],
        bump = config.bump,
        constraint = config.admin == admin.key() @ ArenaError::Unauthorized,
    )]
    pub config: Account<'info, GameConfig>,

    pub admin: Signer<'info>,
}

pub fn handler(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
    ctx.accounts.config.paused = paused;
    msg!("arena paused = {}", paused);
    Ok(())
}

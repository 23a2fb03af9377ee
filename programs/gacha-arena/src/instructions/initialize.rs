use anchor_lang::prelude::*;

use crate::state::GameConfig;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + GameConfig::INIT_SPACE,
        seeds = [GameConfig::SEED],
        bump,
    )]
    pub config: Account<'info, GameConfig>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.admin = ctx.accounts.admin.key();
    config.paused = false;
    config.total_players = 0;
    config.total_bets = 0;
    config.total_wagered = 0;
    config.total_battles = 0;
    config.total_boxes = 0;
    config.bump = ctx.bumps.config;
    Ok(())
}

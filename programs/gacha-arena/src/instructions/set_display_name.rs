use anchor_lang::prelude::*;

use crate::constants::MAX_NAME_LEN;
use crate::errors::ArenaError;
use crate::state::Player;

#[derive(Accounts)]
pub struct SetDisplayName<'info> {
    #[account(
        mut,
        seeds = [Player::SEED, authority.key().as_ref()],
        bump = player.bump,
    )]
    pub player: Account<'info, Player>,

    pub authority: Signer<'info>,
}

/// Display names are last-seen-wins; clients resend on every rename.
pub fn handler(ctx: Context<SetDisplayName>, display_name: String) -> Result<()> {
    require!(!display_name.is_empty(), ArenaError::NameEmpty);
    require!(display_name.len() <= MAX_NAME_LEN, ArenaError::NameTooLong);

    let clock = Clock::get()?;
    let player = &mut ctx.accounts.player;
    player.display_name = display_name;
    player.touch(clock.unix_timestamp);
    Ok(())
}

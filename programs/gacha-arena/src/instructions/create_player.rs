use anchor_lang::prelude::*;

use crate::constants::{
    MAX_NAME_LEN, REFERRAL_MILESTONES, REFERRAL_REWARD, REFERRAL_WELCOME_BONUS, STARTING_BALANCE,
};
use crate::errors::ArenaError;
use crate::events::{PlayerCreated, ReferralRegistered};
use crate::state::{Collection, GameConfig, Player};

#[derive(Accounts)]
pub struct CreatePlayer<'info> {
    #[account(mut, seeds = [GameConfig::SEED], bump = config.bump)]
    pub config: Account<'info, GameConfig>,

    #[account(
        init,
        payer = authority,
        space = 8 + Player::INIT_SPACE,
        seeds = [Player::SEED, authority.key().as_ref()],
        bump,
    )]
    pub player: Account<'info, Player>,

    #[account(
        init,
        payer = authority,
        space = 8 + Collection::INIT_SPACE,
        seeds = [Collection::SEED, authority.key().as_ref()],
        bump,
    )]
    pub collection: Account<'info, Collection>,

    /// Player account of whoever referred the newcomer, if any.
    #[account(mut)]
    pub referrer: Option<Account<'info, Player>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreatePlayer>, display_name: String) -> Result<()> {
    require!(!display_name.is_empty(), ArenaError::NameEmpty);
    require!(display_name.len() <= MAX_NAME_LEN, ArenaError::NameTooLong);

    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();

    let player = &mut ctx.accounts.player;
    player.authority = authority;
    player.display_name = display_name.clone();
    player.balance = STARTING_BALANCE;
    player.score = 0;
    player.games_played = 0;
    player.bet_wins = 0;
    player.bets_placed = 0;
    player.pvp_wins = 0;
    player.pvp_losses = 0;
    player.referrals = 0;
    player.referred_by = None;
    player.joined_at = clock.unix_timestamp;
    player.last_active_at = clock.unix_timestamp;
    player.last_daily_at = 0;
    player.bump = ctx.bumps.player;

    let collection = &mut ctx.accounts.collection;
    collection.player = authority;
    collection.entries = Vec::new();
    collection.bump = ctx.bumps.collection;

    if let Some(referrer) = ctx.accounts.referrer.as_mut() {
        require!(referrer.authority != authority, ArenaError::SelfReferral);

        referrer.referrals = referrer
            .referrals
            .checked_add(1)
            .ok_or(ArenaError::MathOverflow)?;
        referrer.credit(REFERRAL_REWARD)?;

        // Milestone bonus lands exactly when the count crosses a level.
        let milestone_bonus = REFERRAL_MILESTONES
            .iter()
            .find(|&&(count, _)| count == referrer.referrals)
            .map(|&(_, bonus)| bonus)
            .unwrap_or(0);
        if milestone_bonus > 0 {
            referrer.credit(milestone_bonus)?;
        }

        let player = &mut ctx.accounts.player;
        player.credit(REFERRAL_WELCOME_BONUS)?;
        player.referred_by = Some(referrer.authority);

        emit!(ReferralRegistered {
            referrer: referrer.authority,
            newcomer: authority,
            referrer_total: referrer.referrals,
            milestone_bonus,
        });
    }

    let config = &mut ctx.accounts.config;
    config.total_players = config.total_players.saturating_add(1);

    emit!(PlayerCreated {
        player: authority,
        display_name,
        referred_by: ctx.accounts.player.referred_by,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

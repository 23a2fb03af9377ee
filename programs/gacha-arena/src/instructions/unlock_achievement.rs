use anchor_lang::prelude::*;

use crate::catalog::Rarity;
use crate::errors::ArenaError;
use crate::events::AchievementUnlocked;
use crate::season::active_theme;
use crate::state::{Achievement, AchievementUnlock, Collection, Player, SeasonProgress};

#[derive(Accounts)]
#[instruction(index: u8)]
pub struct UnlockAchievement<'info> {
    #[account(
        mut,
        seeds = [Player::SEED, authority.key().as_ref()],
        bump = player.bump,
    )]
    pub player: Account<'info, Player>,

    #[account(
        seeds = [Collection::SEED, authority.key().as_ref()],
        bump = collection.bump,
    )]
    pub collection: Account<'info, Collection>,

    /// Absent for players who never settled a bet; seasonal progress then
    /// counts as zero.
    #[account(
        seeds = [SeasonProgress::SEED, authority.key().as_ref()],
        bump = season_progress.bump,
    )]
    pub season_progress: Option<Account<'info, SeasonProgress>>,

    /// PDA uniqueness makes each achievement a once-only unlock.
    #[account(
        init,
        payer = authority,
        space = 8 + AchievementUnlock::INIT_SPACE,
        seeds = [AchievementUnlock::SEED, authority.key().as_ref(), &[index]],
        bump,
    )]
    pub unlock: Account<'info, AchievementUnlock>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<UnlockAchievement>, index: u8) -> Result<()> {
    let achievement = Achievement::from_index(index).ok_or(ArenaError::UnknownAchievement)?;

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let theme = active_theme(now);

    let player = &mut ctx.accounts.player;
    let collection = &ctx.accounts.collection;
    let season_wins = ctx
        .accounts
        .season_progress
        .as_ref()
        .map_or(0, |p| p.wins_for(theme));

    // All predicates are monotonic, so once met they stay met.
    let met = match achievement {
        Achievement::FirstBlood => player.bet_wins >= 1,
        Achievement::PvpMaster => player.pvp_wins >= 10,
        Achievement::RichMan => player.balance >= 5000,
        Achievement::Collector => collection.unique_count() >= 20,
        Achievement::SeasonalChampion => season_wins >= 30,
        Achievement::LegendaryHunter => collection.rarity_count(Rarity::Legendary) >= 5,
    };
    require!(met, ArenaError::AchievementLocked);

    let unlock = &mut ctx.accounts.unlock;
    unlock.player = player.authority;
    unlock.achievement = achievement;
    unlock.unlocked_at = now;
    unlock.reward_claimed = true;
    unlock.bump = ctx.bumps.unlock;

    let reward = achievement.reward();
    player.credit(reward)?;
    player.touch(now);

    emit!(AchievementUnlocked {
        player: player.authority,
        achievement: index,
        reward,
    });

    Ok(())
}

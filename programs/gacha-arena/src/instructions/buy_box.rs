use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::slot_hashes;

use crate::catalog::SHOP;
use crate::draws::{draw_fighter, draw_rarity};
use crate::errors::ArenaError;
use crate::events::BoxOpened;
use crate::rng::{derive_seed, SeedStream};
use crate::season::active_theme;
use crate::state::{Collection, GameConfig, Player};

#[derive(Accounts)]
pub struct BuyBox<'info> {
    #[account(
        mut,
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

    #[account(
        mut,
        seeds = [Collection::SEED, authority.key().as_ref()],
        bump = collection.bump,
    )]
    pub collection: Account<'info, Collection>,

    pub authority: Signer<'info>,

    /// CHECK: address constrained to the SlotHashes sysvar.
    #[account(address = slot_hashes::ID)]
    pub slot_hashes: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<BuyBox>, item: u8) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let theme = active_theme(now);

    let item_def = SHOP.get(item as usize).ok_or(ArenaError::ItemNotAvailable)?;
    require!(item_def.available(theme), ArenaError::ItemNotAvailable);

    let player = &mut ctx.accounts.player;

    // Price first. A failed draw below aborts the transaction, which also
    // unwinds this debit, so the buyer is never charged for nothing.
    player.try_debit(item_def.price)?;

    let seed = derive_seed(
        &ctx.accounts.slot_hashes.to_account_info(),
        &clock,
        &player.authority,
        b"gacha",
    )?;
    let mut stream = SeedStream::new(seed);

    let rarity = draw_rarity(&mut stream, item_def.pool, item_def.season_boost);
    let theme_boost = item_def.theme == Some(theme);
    let fighter = draw_fighter(&mut stream, rarity, theme, theme_boost)?;

    // A duplicate keeps the price but adds nothing to the collection.
    let added = ctx.accounts.collection.grant(fighter, now)?;

    player.touch(now);

    let config = &mut ctx.accounts.config;
    config.total_boxes = config.total_boxes.saturating_add(1);

    emit!(BoxOpened {
        player: player.authority,
        item,
        price: item_def.price,
        fighter,
        duplicate: !added,
    });

    Ok(())
}

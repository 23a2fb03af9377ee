use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::slot_hashes;

use crate::constants::{CONSOLATION_DROP_PCT, SCORE_BET_WIN};
use crate::draws::first_side_wins;
use crate::errors::ArenaError;
use crate::events::BetSettled;
use crate::rng::{derive_seed, SeedStream};
use crate::season::active_theme;
use crate::state::{BetSession, Collection, FighterPick, GameConfig, Player, SeasonProgress};

#[derive(Accounts)]
pub struct ResolveWager<'info> {
    #[account(mut, seeds = [GameConfig::SEED], bump = config.bump)]
    pub config: Account<'info, GameConfig>,

    #[account(
        mut,
        seeds = [Player::SEED, authority.key().as_ref()],
        bump = player.bump,
    )]
    pub player: Account<'info, Player>,

    /// Closed on resolution no matter the outcome, so a bet can never wedge
    /// the next one.
    #[account(
        mut,
        seeds = [BetSession::SEED, authority.key().as_ref()],
        bump = session.bump,
        close = authority,
    )]
    pub session: Account<'info, BetSession>,

    #[account(
        mut,
        seeds = [Collection::SEED, authority.key().as_ref()],
        bump = collection.bump,
    )]
    pub collection: Account<'info, Collection>,

    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + SeasonProgress::INIT_SPACE,
        seeds = [SeasonProgress::SEED, authority.key().as_ref()],
        bump,
    )]
    pub season_progress: Account<'info, SeasonProgress>,

    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: address constrained to the SlotHashes sysvar.
    #[account(address = slot_hashes::ID)]
    pub slot_hashes: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ResolveWager>, pick: FighterPick) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let theme = active_theme(now);

    let session = &ctx.accounts.session;
    require!(session.has_wager(), ArenaError::WagerNotPlaced);

    let wager = session.wager;
    let payout_on_win = session.payout_on_win;
    let fighter_a = session.fighter_a;
    let fighter_b = session.fighter_b;
    let power_a = session.power_a;
    let power_b = session.power_b;

    let seed = derive_seed(
        &ctx.accounts.slot_hashes.to_account_info(),
        &clock,
        &ctx.accounts.authority.key(),
        b"resolve",
    )?;
    let mut stream = SeedStream::new(seed);

    let first_wins = first_side_wins(&mut stream, power_a, power_b);
    let (winner, loser) = if first_wins {
        (fighter_a, fighter_b)
    } else {
        (fighter_b, fighter_a)
    };
    let won = (pick == FighterPick::First) == first_wins;

    let progress = &mut ctx.accounts.season_progress;
    if progress.player == Pubkey::default() {
        progress.player = ctx.accounts.authority.key();
        progress.theme = theme;
        progress.bump = ctx.bumps.season_progress;
    }
    progress.roll_over(theme);

    let player = &mut ctx.accounts.player;
    let collection = &mut ctx.accounts.collection;
    let mut consolation_drop = None;

    if won {
        // The stake was held at wager time, so the credit is the whole
        // payout, not payout minus stake.
        player.credit(payout_on_win)?;
        player.add_score(SCORE_BET_WIN);
        player.bet_wins = player.bet_wins.saturating_add(1);
        progress.wins = progress.wins.saturating_add(1);

        if stream.chance(CONSOLATION_DROP_PCT) && collection.grant(loser, now)? {
            consolation_drop = Some(loser);
        }
    }

    player.bets_placed = player.bets_placed.saturating_add(1);
    player.games_played = player.games_played.saturating_add(1);
    player.touch(now);

    progress.bets = progress.bets.saturating_add(1);
    progress.characters_collected = collection.unique_count();

    let config = &mut ctx.accounts.config;
    config.total_bets = config.total_bets.saturating_add(1);
    config.total_wagered = config.total_wagered.saturating_add(wager);

    emit!(BetSettled {
        player: player.authority,
        fighter_a,
        fighter_b,
        winner,
        picked_winner: won,
        wager,
        payout: if won { payout_on_win } else { 0 },
        consolation_drop,
        new_balance: player.balance,
    });

    Ok(())
}

use anchor_lang::prelude::*;

pub mod catalog;
pub mod constants;
pub mod draws;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod rng;
pub mod season;
pub mod state;

use instructions::*;
use state::FighterPick;

declare_id!("vdzJGvvyq3i5Y3D2DoZBbxgQaDGVmb3fxaTmcaABsXF");

#[program]
pub mod gacha_arena {
    use super::*;

    /// One-time arena initialization.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Admin: pause or resume all coin-moving player actions.
    pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
        instructions::set_paused::handler(ctx, paused)
    }

    /// Admin: grant coins to a player (promotions, support).
    pub fn admin_grant(ctx: Context<AdminGrant>, amount: u64) -> Result<()> {
        instructions::admin_grant::handler(ctx, amount)
    }

    /// Create the player and collection PDAs, optionally crediting a
    /// referrer.
    pub fn create_player(ctx: Context<CreatePlayer>, display_name: String) -> Result<()> {
        instructions::create_player::handler(ctx, display_name)
    }

    /// Rename the player; last seen name wins.
    pub fn set_display_name(ctx: Context<SetDisplayName>, display_name: String) -> Result<()> {
        instructions::set_display_name::handler(ctx, display_name)
    }

    /// Claim the once-per-24h coin reward.
    pub fn claim_daily(ctx: Context<ClaimDaily>) -> Result<()> {
        instructions::claim_daily::handler(ctx)
    }

    /// Open a bet preview: two random fighters with seasonal power applied.
    pub fn start_bet(ctx: Context<StartBet>) -> Result<()> {
        instructions::start_bet::handler(ctx)
    }

    /// Stake one of the fixed wager tiers on the pending preview.
    pub fn place_wager(ctx: Context<PlaceWager>, amount: u64) -> Result<()> {
        instructions::place_wager::handler(ctx, amount)
    }

    /// Pick a side and settle the bet.
    pub fn resolve_wager(ctx: Context<ResolveWager>, pick: FighterPick) -> Result<()> {
        instructions::resolve_wager::handler(ctx, pick)
    }

    /// Abandon the pending bet; any held stake is refunded.
    pub fn cancel_bet(ctx: Context<CancelBet>) -> Result<()> {
        instructions::cancel_bet::handler(ctx)
    }

    /// Buy a gacha box and draw one fighter from its rarity pool.
    pub fn buy_box(ctx: Context<BuyBox>, item: u8) -> Result<()> {
        instructions::buy_box::handler(ctx, item)
    }

    /// Claim an achievement whose requirement is met; pays its reward.
    pub fn unlock_achievement(ctx: Context<UnlockAchievement>, index: u8) -> Result<()> {
        instructions::unlock_achievement::handler(ctx, index)
    }

    /// Open a PvP challenge; expires after five minutes if nobody accepts.
    pub fn create_challenge(ctx: Context<CreateChallenge>) -> Result<()> {
        instructions::create_challenge::handler(ctx)
    }

    /// Accept a challenge: hold both stakes and deal both hands.
    pub fn accept_challenge(ctx: Context<AcceptChallenge>) -> Result<()> {
        instructions::accept_challenge::handler(ctx)
    }

    /// Turn down someone else's challenge.
    pub fn decline_challenge(ctx: Context<DeclineChallenge>) -> Result<()> {
        instructions::decline_challenge::handler(ctx)
    }

    /// Withdraw one's own open challenge.
    pub fn cancel_challenge(ctx: Context<CancelChallenge>) -> Result<()> {
        instructions::cancel_challenge::handler(ctx)
    }

    /// Permissionless cleanup of a challenge past its deadline.
    pub fn expire_challenge(ctx: Context<ExpireChallenge>) -> Result<()> {
        instructions::expire_challenge::handler(ctx)
    }

    /// Toggle a dealt fighter in or out of the signer's team.
    pub fn select_team_member(ctx: Context<SelectTeamMember>, slot: u8) -> Result<()> {
        instructions::select_team_member::handler(ctx, slot)
    }

    /// Lock the team; the second confirmation resolves the battle.
    pub fn confirm_team(ctx: Context<ConfirmTeam>) -> Result<()> {
        instructions::confirm_team::handler(ctx)
    }

    /// Walk away while drafting; both stakes are refunded.
    pub fn cancel_battle(ctx: Context<CancelBattle>) -> Result<()> {
        instructions::cancel_battle::handler(ctx)
    }

    /// Reclaim the rent of a settled battle.
    pub fn close_battle(ctx: Context<CloseBattle>) -> Result<()> {
        instructions::close_battle::handler(ctx)
    }
}

use anchor_lang::prelude::*;

#[error_code]
pub enum ArenaError {
    #[msg("Balance is too low for this action.")]
    InsufficientFunds,
    #[msg("Wager amount is not one of the allowed tiers.")]
    InvalidWagerAmount,
    #[msg("No wager has been placed on this bet yet.")]
    WagerNotPlaced,
    #[msg("Selection index is out of range.")]
    InvalidSelection,
    #[msg("Shop item does not exist or is not available this season.")]
    ItemNotAvailable,
    #[msg("Not enough fighters are available for this draw.")]
    RosterTooSmall,
    #[msg("Collection cannot hold any more fighters.")]
    RosterFull,
    #[msg("You cannot battle yourself.")]
    CannotChallengeSelf,
    #[msg("Challenge has already expired.")]
    ChallengeExpired,
    #[msg("Challenge has not expired yet.")]
    ChallengeNotExpired,
    #[msg("Signer is not a participant in this battle.")]
    NotAParticipant,
    #[msg("A team holds at most 3 fighters.")]
    TeamFull,
    #[msg("Exactly 3 fighters must be selected before confirming.")]
    TeamIncomplete,
    #[msg("Team has already been confirmed.")]
    TeamAlreadyReady,
    #[msg("Battle is not in the drafting phase.")]
    BattleNotDrafting,
    #[msg("Battle has not been settled yet.")]
    BattleNotSettled,
    #[msg("Daily reward is still on cooldown.")]
    DailyRewardNotReady,
    #[msg("Unknown achievement id.")]
    UnknownAchievement,
    #[msg("Achievement requirements are not met yet.")]
    AchievementLocked,
    #[msg("You cannot refer yourself.")]
    SelfReferral,
    #[msg("Display name cannot be empty.")]
    NameEmpty,
    #[msg("Display name exceeds the maximum length.")]
    NameTooLong,
    #[msg("The arena is paused.")]
    Paused,
    #[msg("Only the admin can perform this action.")]
    Unauthorized,
    #[msg("Arithmetic overflow.")]
    MathOverflow,
    #[msg("Slot hashes are unavailable for seed derivation.")]
    RandomnessUnavailable,
}

use anchor_lang::prelude::*;

#[event]
pub struct PlayerCreated {
    pub player: Pubkey,
    pub display_name: String,
    pub referred_by: Option<Pubkey>,
    pub timestamp: i64,
}

#[event]
pub struct ReferralRegistered {
    pub referrer: Pubkey,
    pub newcomer: Pubkey,
    pub referrer_total: u32,
    pub milestone_bonus: u64,
}

#[event]
pub struct DailyRewardClaimed {
    pub player: Pubkey,
    pub amount: u64,
    pub new_balance: u64,
}

#[event]
pub struct BetOpened {
    pub player: Pubkey,
    pub fighter_a: u16,
    pub fighter_b: u16,
    pub power_a: u16,
    pub power_b: u16,
}

#[event]
pub struct WagerPlaced {
    pub player: Pubkey,
    pub amount: u64,
    pub payout_on_win: u64,
}

#[event]
pub struct BetSettled {
    pub player: Pubkey,
    pub fighter_a: u16,
    pub fighter_b: u16,
    pub winner: u16,
    pub picked_winner: bool,
    pub wager: u64,
    pub payout: u64,
    pub consolation_drop: Option<u16>,
    pub new_balance: u64,
}

#[event]
pub struct BetCancelled {
    pub player: Pubkey,
    pub refunded: u64,
}

#[event]
pub struct BoxOpened {
    pub player: Pubkey,
    pub item: u8,
    pub price: u64,
    pub fighter: u16,
    pub duplicate: bool,
}

#[event]
pub struct AchievementUnlocked {
    pub player: Pubkey,
    pub achievement: u8,
    pub reward: u64,
}

#[event]
pub struct ChallengeCreated {
    pub creator: Pubkey,
    pub stake: u64,
    pub expires_at: i64,
}

#[event]
pub struct ChallengeDeclined {
    pub creator: Pubkey,
    pub declined_by: Pubkey,
}

#[event]
pub struct ChallengeCancelled {
    pub creator: Pubkey,
}

#[event]
pub struct ChallengeExpired {
    pub creator: Pubkey,
}

#[event]
pub struct BattleStarted {
    pub player_one: Pubkey,
    pub player_two: Pubkey,
    pub stake: u64,
    pub dealt_one: [u16; 5],
    pub dealt_two: [u16; 5],
}

#[event]
pub struct TeamConfirmed {
    pub battle: Pubkey,
    pub player: Pubkey,
    pub team_power: u32,
}

#[event]
pub struct BattleSettled {
    pub player_one: Pubkey,
    pub player_two: Pubkey,
    pub power_one: u32,
    pub power_two: u32,
    pub winner: Pubkey,
    pub prize: u64,
}

#[event]
pub struct BattleCancelled {
    pub cancelled_by: Pubkey,
    pub opponent: Pubkey,
    pub refunded_each: u64,
}

#[event]
pub struct BalanceGranted {
    pub player: Pubkey,
    pub amount: u64,
    pub new_balance: u64,
}

/// Events module for the Lucky Draw program
/// Contains all event structures that are emitted by the program instructions
/// for off-chain tracking and widget re-rendering.
use anchor_lang::prelude::*;

/// Emitted when a draw session is created for a user
#[event]
pub struct SessionCreated {
    pub user: Pubkey,
    pub profile_id: i64,
    pub display_name: String,
    pub balance: u64,
    pub session: Pubkey,
}

/// Emitted when a draw request is accepted and the wheel starts spinning
#[event]
pub struct DrawStarted {
    pub user: Pubkey,
    pub started_at_ms: i64,
    pub slot: u64,
    pub session: Pubkey,
}

/// Emitted when a draw request arrives while a spin is already in flight
/// and is dropped without error
#[event]
pub struct DrawIgnored {
    pub user: Pubkey,
    pub session: Pubkey,
}

/// Emitted when a draw settles with a result
#[event]
pub struct DrawSettled {
    pub user: Pubkey,
    pub prize_id: u16,
    pub prize_name: String,
    pub spin_count: u64,
    pub session: Pubkey,
}

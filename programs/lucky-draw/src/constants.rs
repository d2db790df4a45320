use anchor_lang::prelude::*;

use crate::states::PrizeDef;
/// Constants module for the Lucky Draw program
///
/// Contains all program-wide constants and configuration values.

/// Coin balance every new session starts with
#[constant]
pub const INITIAL_BALANCE: u64 = 50;

/// How long a draw spins before it can settle, in milliseconds
#[constant]
pub const DRAW_DURATION_MS: i64 = 2000;

/// Maximum slot difference allowed for randomness validation
/// This ensures randomness data is recent and valid
#[constant]
pub const MAX_SLOT_DIFFERENCE: u64 = 20;

/// Maximum byte length of a profile display name
#[constant]
pub const MAX_DISPLAY_NAME_LEN: usize = 64;

/// Maximum byte length of a profile username
#[constant]
pub const MAX_USERNAME_LEN: usize = 32;

/// Maximum byte length of a profile avatar reference
#[constant]
pub const MAX_AVATAR_REF_LEN: usize = 200;

/// Maximum byte length of a prize display name
#[constant]
pub const MAX_PRIZE_NAME_LEN: usize = 32;

/// Seed for draw session PDA
#[constant]
pub const DRAW_SESSION: &[u8] = b"draw_session";

/// The fixed prize catalog, in wheel display order. Ids are unique.
pub const PRIZE_CATALOG: [PrizeDef; 6] = [
    PrizeDef {
        id: 1,
        name: "100 Coins",
    },
    PrizeDef {
        id: 2,
        name: "50 Gems",
    },
    PrizeDef {
        id: 3,
        name: "Mystery Box",
    },
    PrizeDef {
        id: 4,
        name: "Rare Item",
    },
    PrizeDef {
        id: 5,
        name: "Extra Spin",
    },
    PrizeDef {
        id: 6,
        name: "Discount Coupon",
    },
];

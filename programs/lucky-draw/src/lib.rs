//! Lucky Draw Program
//!
//! A Solana program backing a chat-platform mini-app spin widget where users can:
//! - Open a per-user draw session seeded with the profile their host platform
//!   handed over at startup
//! - Spin for a prize drawn uniformly at random from a fixed catalog, with
//!   outcomes determined by Switchboard oracles after a fixed spin delay
//!
//! The program keeps at most one draw in flight per session, drops duplicate
//! spin requests without failing them, and settles result, spin counter, and
//! phase together in a single instruction.

#![allow(deprecated)]
#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod states;

use contexts::*;
use states::UserProfile;

declare_id!("BWdrKnydZfYESbC4dKDiHMHqfc4uMRaJ5HHgEGGPADmn");

#[program]
pub mod lucky_draw {
    use super::*;

    /// Create the draw session for a user from their host platform profile.
    pub fn create_session(ctx: Context<CreateSession>, profile: UserProfile) -> Result<()> {
        instructions::session::create_session(ctx, profile)
    }

    /// Request a draw. Ignored without error while a spin is in flight.
    pub fn request_draw(ctx: Context<RequestDraw>) -> Result<()> {
        instructions::draw::request_draw(ctx)
    }

    /// Settle the in-flight draw once the spin duration has elapsed.
    pub fn settle_draw(ctx: Context<SettleDraw>) -> Result<()> {
        instructions::draw::settle_draw(ctx)
    }
}

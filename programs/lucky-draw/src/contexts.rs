use anchor_lang::prelude::*;
use switchboard_on_demand::get_switchboard_on_demand_program_id;

use crate::{constants::*, errors::*, states::*};

/// ========================================
/// Account Structs
/// ========================================

/// Accounts required for creating a user's draw session
#[derive(Accounts)]
pub struct CreateSession<'info> {
    /// The draw session account to create (PDA, one per user)
    #[account(
        init,
        payer = user,
        space = 8 + DrawSession::INIT_SPACE,
        seeds = [DRAW_SESSION, user.key().as_ref()],
        bump
    )]
    pub session: Account<'info, DrawSession>,
    /// The user the session belongs to
    #[account(mut)]
    pub user: Signer<'info>,
    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Accounts required for requesting a draw
#[derive(Accounts)]
pub struct RequestDraw<'info> {
    /// The user's draw session
    #[account(
        mut,
        has_one = user,
        seeds = [DRAW_SESSION, user.key().as_ref()],
        bump = session.bump,
    )]
    pub session: Account<'info, DrawSession>,

    /// User requesting the draw
    pub user: Signer<'info>,

    /// Switchboard randomness account committed for this draw
    /// CHECK: Validated to be owned by the Switchboard program; seed
    /// freshness is checked in the handler
    #[account(
        owner = get_switchboard_on_demand_program_id() @ DrawError::InvalidRandomnessOwner
    )]
    pub randomness_account_data: AccountInfo<'info>,
}

/// Accounts required for settling a draw
#[derive(Accounts)]
pub struct SettleDraw<'info> {
    /// The user's draw session
    #[account(
        mut,
        has_one = user,
        seeds = [DRAW_SESSION, user.key().as_ref()],
        bump = session.bump,
    )]
    pub session: Account<'info, DrawSession>,

    /// User who requested the draw
    pub user: Signer<'info>,

    /// Switchboard randomness account (must match the one used at request time)
    /// CHECK: Address must match session.randomness_account and be owned by Switchboard
    #[account(
        address = session.randomness_account @ DrawError::RandomnessAccountMismatch,
        owner = get_switchboard_on_demand_program_id() @ DrawError::InvalidRandomnessOwner
    )]
    pub randomness_account_data: AccountInfo<'info>,
}

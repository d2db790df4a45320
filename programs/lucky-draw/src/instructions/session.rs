use anchor_lang::prelude::*;

use crate::{constants::*, contexts::*, errors::DrawError, events::*, states::*};

/// ========================================
/// Session Instructions
/// ========================================

/// Create the draw session for a user
///
/// The mini-app host passes along the platform profile it obtained at
/// startup; a snapshot is written into the session once and never
/// re-fetched. Creating the session is what arms the draw engine: until a
/// profile exists there is no session account, and the widget stays on its
/// loading screen.
///
/// Process:
/// 1. Validate the profile snapshot (non-empty display name, length caps)
/// 2. Store the profile and the fixed starting state
/// 3. Emit the creation event
///
/// Args:
/// - ctx: Context containing the session PDA and the user
/// - profile: Identity snapshot from the host platform
///
/// Returns: Result indicating success or failure
pub fn create_session(ctx: Context<CreateSession>, profile: UserProfile) -> Result<()> {
    // ============ PROFILE VALIDATION ============
    require!(!profile.display_name.is_empty(), DrawError::EmptyDisplayName);
    require!(
        profile.display_name.len() <= MAX_DISPLAY_NAME_LEN,
        DrawError::DisplayNameTooLong
    );
    if let Some(username) = &profile.username {
        require!(
            username.len() <= MAX_USERNAME_LEN,
            DrawError::UsernameTooLong
        );
    }
    if let Some(avatar_ref) = &profile.avatar_ref {
        require!(
            avatar_ref.len() <= MAX_AVATAR_REF_LEN,
            DrawError::AvatarRefTooLong
        );
    }

    // ============ SESSION SETUP ============
    let session = &mut ctx.accounts.session;
    session.user = ctx.accounts.user.key();
    session.bump = ctx.bumps.session;
    session.profile_id = profile.id;
    session.display_name = profile.display_name;
    session.username = profile.username;
    session.is_premium = profile.is_premium;
    session.avatar_ref = profile.avatar_ref;
    session.balance = INITIAL_BALANCE;
    session.spin_count = 0;
    session.phase = Phase::Idle;
    session.last_prize = None;
    session.draw_started_at_ms = 0;
    session.draw_slot = 0;
    session.randomness_account = Pubkey::default();

    emit!(SessionCreated {
        user: session.user,
        profile_id: session.profile_id,
        display_name: session.display_name.clone(),
        balance: session.balance,
        session: session.key(),
    });

    Ok(())
}

use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::{constants::*, contexts::*, errors::DrawError, events::*, helpers::*};

/// ========================================
/// Draw Instructions
/// ========================================

/// Request a draw
///
/// Starts a spin when the session is idle and commits the randomness account
/// that will decide the outcome at settlement. A request that arrives while a
/// spin is already in flight succeeds without touching session state, so
/// rapid repeated triggers cannot start more than one draw.
///
/// Process:
/// 1. Drop the request as a no-op if a spin is in flight
/// 2. Validate that the randomness account is freshly seeded
/// 3. Record start time, slot, and randomness account; enter Spinning
///
/// Args:
/// - ctx: Context containing the session, user, and randomness account
///
/// Returns: Result indicating success or failure
pub fn request_draw(ctx: Context<RequestDraw>) -> Result<()> {
    let clock = Clock::get()?;

    // ============ DEBOUNCE ============
    // A duplicate trigger during the spin is dropped, not failed.
    if ctx.accounts.session.is_spinning() {
        emit!(DrawIgnored {
            user: ctx.accounts.session.user,
            session: ctx.accounts.session.key(),
        });
        return Ok(());
    }

    // ============ RANDOMNESS VALIDATION ============
    // Ensure the randomness account is current and valid
    let randomness_account = &ctx.accounts.randomness_account_data;
    let randomness_data = RandomnessAccountData::parse(randomness_account.data.borrow())
        .map_err(|_| DrawError::InvalidRandomnessAccount)?;
    require!(
        clock.slot >= randomness_data.seed_slot
            && clock.slot - randomness_data.seed_slot <= MAX_SLOT_DIFFERENCE,
        DrawError::RandomnessNotCurrent
    );

    // ============ SPIN START ============
    let session = &mut ctx.accounts.session;
    session.begin_draw(unix_ms(&clock), clock.slot, randomness_account.key());

    emit!(DrawStarted {
        user: session.user,
        started_at_ms: session.draw_started_at_ms,
        slot: session.draw_slot,
        session: session.key(),
    });

    Ok(())
}

/// Settle the in-flight draw to determine the prize
///
/// The on-chain completion of the spin timer: callable once the spin
/// duration has elapsed on the chain clock, in a later slot than the
/// request. Reveals the committed randomness, selects one catalog entry
/// uniformly (repeats allowed, every entry at probability 1/len), and
/// writes result, spin counter, and phase in the same instruction.
///
/// Process:
/// 1. Validate settlement conditions (spin in flight, duration elapsed,
///    slot passed)
/// 2. Extract the revealed randomness from the Switchboard oracle
/// 3. Select the prize and complete the session transition
///
/// Args:
/// - ctx: Context containing the session, user, and committed randomness
///   account
///
/// Returns: Result indicating success or failure
pub fn settle_draw(ctx: Context<SettleDraw>) -> Result<()> {
    let clock = Clock::get()?;
    let session = &mut ctx.accounts.session;

    // ============ SETTLEMENT VALIDATIONS ============
    require!(session.is_spinning(), DrawError::DrawNotInProgress);
    require!(
        session.draw_elapsed(unix_ms(&clock)),
        DrawError::DrawStillSpinning
    );
    require!(clock.slot > session.draw_slot, DrawError::SlotNotPassed);

    // ============ RANDOMNESS EXTRACTION ============
    // Get the resolved randomness from the Switchboard oracle
    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| DrawError::InvalidRandomnessAccount)?;

    require_eq!(
        randomness_data.seed_slot,
        session.draw_slot,
        DrawError::RandomnessExpired
    );

    let random_value_bytes = randomness_data
        .get_value(clock.slot)
        .map_err(|_| DrawError::RandomnessNotResolved)?;
    let random_value = randomness_to_u64(&random_value_bytes)?;

    // ============ SETTLEMENT COMPLETION ============
    let prize = session.settle_draw(random_value, &PRIZE_CATALOG);

    emit!(DrawSettled {
        user: session.user,
        prize_id: prize.id,
        prize_name: prize.name,
        spin_count: session.spin_count,
        session: session.key(),
    });

    Ok(())
}

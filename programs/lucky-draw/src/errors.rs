/// Error definitions for the Lucky Draw program
///
/// Contains all custom error types that can be returned by the program
/// instructions. A duplicate draw request while a spin is in flight is NOT
/// among them: that path succeeds as a no-op.
use anchor_lang::prelude::*;

/// Custom error codes for the lucky draw program
#[error_code]
pub enum DrawError {
    #[msg("Display name cannot be empty.")]
    EmptyDisplayName,
    #[msg("Display name is too long.")]
    DisplayNameTooLong,
    #[msg("Username is too long.")]
    UsernameTooLong,
    #[msg("Avatar reference is too long.")]
    AvatarRefTooLong,
    #[msg("No draw is in flight to settle.")]
    DrawNotInProgress,
    #[msg("The spin duration has not elapsed yet.")]
    DrawStillSpinning,
    #[msg("Cannot settle in the same slot as the draw request. Please wait for the next slot.")]
    SlotNotPassed,
    #[msg("The randomness seed is for a past slot and is no longer valid for a new draw.")]
    RandomnessNotCurrent,
    #[msg("The randomness seed does not match the slot of the draw request.")]
    RandomnessExpired,
    #[msg("Randomness has not been resolved by the oracle yet.")]
    RandomnessNotResolved,
    #[msg("The randomness value from the oracle was invalid.")]
    InvalidRandomnessValue,
    #[msg("The randomness account is invalid")]
    InvalidRandomnessAccount,
    #[msg("The randomness account does not match the one committed at request time")]
    RandomnessAccountMismatch,
    #[msg("Incorrect randomness account owner")]
    InvalidRandomnessOwner,
}

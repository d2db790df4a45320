use anchor_lang::prelude::*;

use crate::{errors::DrawError, states::PrizeDef};

/// ========================================
/// Randomness & Clock Helper Functions
/// ========================================

/// Convert revealed randomness bytes to a u64 for prize selection
///
/// Reads the first 8 bytes little-endian, matching how the oracle value is
/// consumed at settlement.
pub fn randomness_to_u64(bytes: &[u8]) -> Result<u64> {
    let raw: [u8; 8] = bytes
        .get(0..8)
        .and_then(|slice| slice.try_into().ok())
        .ok_or(DrawError::InvalidRandomnessValue)?;
    Ok(u64::from_le_bytes(raw))
}

/// Select one catalog entry uniformly at random
///
/// Every entry has probability 1/len, draws are independent, and repeats are
/// allowed. The catalog must be non-empty.
pub fn select_prize(catalog: &[PrizeDef], random_value: u64) -> &PrizeDef {
    &catalog[(random_value % catalog.len() as u64) as usize]
}

/// Current chain time in epoch milliseconds
pub fn unix_ms(clock: &Clock) -> i64 {
    clock.unix_timestamp.saturating_mul(1_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: [PrizeDef; 4] = [
        PrizeDef { id: 10, name: "A" },
        PrizeDef { id: 20, name: "B" },
        PrizeDef { id: 30, name: "C" },
        PrizeDef { id: 40, name: "D" },
    ];

    #[test]
    fn randomness_reads_first_eight_bytes_le() {
        let mut bytes = [0_u8; 32];
        bytes[0] = 0x01;
        bytes[8] = 0xFF; // beyond the consumed window
        assert_eq!(randomness_to_u64(&bytes).unwrap(), 1);

        let max = [0xFF_u8; 8];
        assert_eq!(randomness_to_u64(&max).unwrap(), u64::MAX);
    }

    #[test]
    fn randomness_rejects_short_input() {
        assert!(randomness_to_u64(&[0_u8; 7]).is_err());
    }

    #[test]
    fn selection_wraps_by_modulo() {
        assert_eq!(select_prize(&CATALOG, 0).id, 10);
        assert_eq!(select_prize(&CATALOG, 3).id, 40);
        assert_eq!(select_prize(&CATALOG, 5).id, 20);
        assert_eq!(select_prize(&CATALOG, u64::MAX - 3).id, 10);
    }

    #[test]
    fn unix_ms_scales_seconds() {
        let clock = Clock {
            unix_timestamp: 1_700_000_123,
            ..Clock::default()
        };
        assert_eq!(unix_ms(&clock), 1_700_000_123_000);
    }
}

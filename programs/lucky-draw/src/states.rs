/// States module for the Lucky Draw program
///
/// Contains the draw session account, its embedded types, and the state
/// machine transitions driven by the instruction handlers. The transitions
/// take the current time and the revealed random value as arguments, so the
/// handlers own all sysvar and oracle access.
use anchor_lang::prelude::*;

use crate::constants::{
    DRAW_DURATION_MS, MAX_AVATAR_REF_LEN, MAX_DISPLAY_NAME_LEN, MAX_PRIZE_NAME_LEN,
    MAX_USERNAME_LEN,
};
use crate::helpers::select_prize;

/// One entry of the compile-time prize catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrizeDef {
    /// Catalog id, unique across the catalog
    pub id: u16,
    /// Display name shown to the user
    pub name: &'static str,
}

/// A drawn prize as stored on the session
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct Prize {
    /// Catalog id of the winning entry
    pub id: u16,
    /// Display name copied out of the catalog
    #[max_len(MAX_PRIZE_NAME_LEN)]
    pub name: String,
}

/// Discrete state of a draw session
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum Phase {
    /// No draw in flight; requests are accepted
    Idle,
    /// A draw is in flight; further requests are dropped
    Spinning,
}

/// User identity snapshot handed over by the mini-app host at startup
///
/// Passed into `create_session` once and copied into the session account;
/// the program never re-fetches or mutates it.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct UserProfile {
    /// Numeric user id assigned by the host platform
    pub id: i64,
    /// Display name
    pub display_name: String,
    /// Optional handle
    pub username: Option<String>,
    /// Premium flag, if the host reported one
    pub is_premium: Option<bool>,
    /// Optional avatar reference (URL or host file id)
    pub avatar_ref: Option<String>,
}

/// Per-user draw session account
///
/// One instance per user, created when the host profile becomes available and
/// never reset afterwards. Holds everything the widget renders: balance, spin
/// counter, phase, and the most recent result.
#[account]
#[derive(InitSpace)]
pub struct DrawSession {
    /// Wallet that owns this session
    pub user: Pubkey,
    /// PDA bump seed for this account
    pub bump: u8,
    /// Host platform user id
    pub profile_id: i64,
    /// Display name from the host profile
    #[max_len(MAX_DISPLAY_NAME_LEN)]
    pub display_name: String,
    /// Optional handle from the host profile
    #[max_len(MAX_USERNAME_LEN)]
    pub username: Option<String>,
    /// Premium flag from the host profile
    pub is_premium: Option<bool>,
    /// Optional avatar reference from the host profile
    #[max_len(MAX_AVATAR_REF_LEN)]
    pub avatar_ref: Option<String>,
    /// Coin balance shown in the widget; draws neither charge nor credit it
    pub balance: u64,
    /// Total settled draws, monotonically non-decreasing
    pub spin_count: u64,
    /// Current phase of the state machine
    pub phase: Phase,
    /// Result of the most recent settled draw; kept on display while the
    /// next draw spins, overwritten when that draw settles
    pub last_prize: Option<Prize>,
    /// Epoch milliseconds when the in-flight draw was requested
    pub draw_started_at_ms: i64,
    /// Slot of the in-flight draw request
    pub draw_slot: u64,
    /// Randomness account committed for the in-flight draw
    pub randomness_account: Pubkey,
}

impl DrawSession {
    /// Accept a draw request and start the spin.
    ///
    /// A request while a spin is already in flight leaves the session
    /// untouched and returns false; at most one draw is in flight at a time.
    pub fn begin_draw(&mut self, now_ms: i64, slot: u64, randomness_account: Pubkey) -> bool {
        if self.phase == Phase::Spinning {
            return false;
        }
        self.phase = Phase::Spinning;
        self.draw_started_at_ms = now_ms;
        self.draw_slot = slot;
        self.randomness_account = randomness_account;
        true
    }

    /// Whether the spin duration has elapsed for the in-flight draw
    pub fn draw_elapsed(&self, now_ms: i64) -> bool {
        now_ms.saturating_sub(self.draw_started_at_ms) >= DRAW_DURATION_MS
    }

    /// Complete the in-flight draw.
    ///
    /// Selects one catalog entry uniformly from `random_value` and writes
    /// result, spin counter, and phase together. Callers gate this on
    /// [`Self::draw_elapsed`]. The catalog must be non-empty.
    pub fn settle_draw(&mut self, random_value: u64, catalog: &[PrizeDef]) -> Prize {
        let selected = select_prize(catalog, random_value);
        let prize = Prize {
            id: selected.id,
            name: selected.name.to_string(),
        };
        self.last_prize = Some(prize.clone());
        self.spin_count += 1;
        self.phase = Phase::Idle;
        prize
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == Phase::Spinning
    }

    pub fn current_phase(&self) -> Phase {
        self.phase
    }

    pub fn current_result(&self) -> Option<&Prize> {
        self.last_prize.as_ref()
    }

    pub fn current_spin_count(&self) -> u64 {
        self.spin_count
    }

    pub fn current_balance(&self) -> u64 {
        self.balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{INITIAL_BALANCE, PRIZE_CATALOG};
    use rand::prelude::*;

    const TEST_CATALOG: [PrizeDef; 3] = [
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
    ];

    fn fresh_session() -> DrawSession {
        DrawSession {
            user: Pubkey::new_unique(),
            bump: 254,
            profile_id: 777_001,
            display_name: "Dana".to_string(),
            username: Some("dana_w".to_string()),
            is_premium: Some(false),
            avatar_ref: None,
            balance: INITIAL_BALANCE,
            spin_count: 0,
            phase: Phase::Idle,
            last_prize: None,
            draw_started_at_ms: 0,
            draw_slot: 0,
            randomness_account: Pubkey::default(),
        }
    }

    #[test]
    fn fresh_session_starts_idle() {
        let session = fresh_session();
        assert_eq!(session.current_phase(), Phase::Idle);
        assert_eq!(session.current_spin_count(), 0);
        assert_eq!(session.current_balance(), INITIAL_BALANCE);
        assert!(session.current_result().is_none());
    }

    #[test]
    fn request_is_accepted_when_idle() {
        let mut session = fresh_session();
        let randomness = Pubkey::new_unique();

        assert!(session.begin_draw(10_000, 42, randomness));
        assert_eq!(session.current_phase(), Phase::Spinning);
        assert_eq!(session.draw_started_at_ms, 10_000);
        assert_eq!(session.draw_slot, 42);
        assert_eq!(session.randomness_account, randomness);
    }

    #[test]
    fn duplicate_requests_are_dropped_while_spinning() {
        let mut session = fresh_session();
        let randomness = Pubkey::new_unique();
        assert!(session.begin_draw(10_000, 42, randomness));

        // Rapid repeated triggers during the spin must all bounce off.
        for ms in [10_001, 10_500, 11_999] {
            assert!(!session.begin_draw(ms, 43, Pubkey::new_unique()));
        }
        assert_eq!(session.draw_started_at_ms, 10_000);
        assert_eq!(session.draw_slot, 42);
        assert_eq!(session.randomness_account, randomness);

        session.settle_draw(5, &PRIZE_CATALOG);
        assert_eq!(session.current_spin_count(), 1);
    }

    #[test]
    fn spin_duration_boundary() {
        let mut session = fresh_session();
        assert!(session.begin_draw(50_000, 1, Pubkey::new_unique()));

        assert!(!session.draw_elapsed(50_000 + 1_999));
        assert_eq!(session.current_phase(), Phase::Spinning);

        assert!(session.draw_elapsed(50_000 + 2_000));
        let prize = session.settle_draw(11, &PRIZE_CATALOG);
        assert_eq!(session.current_phase(), Phase::Idle);
        assert_eq!(session.current_spin_count(), 1);
        assert!(PRIZE_CATALOG.iter().any(|def| def.id == prize.id));
    }

    #[test]
    fn settle_updates_result_and_counter_together() {
        let mut session = fresh_session();
        assert!(session.begin_draw(0, 1, Pubkey::new_unique()));

        let prize = session.settle_draw(3, &PRIZE_CATALOG);
        assert_eq!(session.current_result(), Some(&prize));
        assert_eq!(session.current_spin_count(), 1);
        // The balance stays exactly where it started.
        assert_eq!(session.current_balance(), INITIAL_BALANCE);
    }

    #[test]
    fn previous_result_stays_visible_while_respinning() {
        let mut session = fresh_session();
        assert!(session.begin_draw(0, 1, Pubkey::new_unique()));
        let first = session.settle_draw(0, &PRIZE_CATALOG);

        assert!(session.begin_draw(5_000, 2, Pubkey::new_unique()));
        assert!(session.is_spinning());
        assert_eq!(session.current_result(), Some(&first));

        let second = session.settle_draw(1, &PRIZE_CATALOG);
        assert_eq!(session.current_result(), Some(&second));
        assert_eq!(session.current_spin_count(), 2);
    }

    #[test]
    fn catalog_ids_are_unique() {
        for (i, a) in PRIZE_CATALOG.iter().enumerate() {
            for b in PRIZE_CATALOG.iter().skip(i + 1) {
                assert_ne!(a.id, b.id, "duplicate catalog id {}", a.id);
            }
        }
    }

    #[test]
    fn seeded_draws_cover_small_catalog() {
        let mut session = fresh_session();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen = [false; 3];
        let mut now_ms = 0_i64;

        for slot in 0..300 {
            assert!(session.begin_draw(now_ms, slot, Pubkey::new_unique()));
            now_ms += 2_000;
            assert!(session.draw_elapsed(now_ms));
            let prize = session.settle_draw(rng.next_u64(), &TEST_CATALOG);
            seen[(prize.id - 1) as usize] = true;
        }

        assert_eq!(session.current_spin_count(), 300);
        assert!(seen.iter().all(|&hit| hit), "some prize was never drawn");
    }

    #[test]
    fn selection_frequencies_are_uniform() {
        let mut rng = StdRng::seed_from_u64(7);
        let draws = 60_000_u64;
        let mut counts = [0_u64; PRIZE_CATALOG.len()];

        for _ in 0..draws {
            let selected = select_prize(&PRIZE_CATALOG, rng.next_u64());
            counts[(selected.id - 1) as usize] += 1;
        }

        let expected = draws / PRIZE_CATALOG.len() as u64;
        for (i, &count) in counts.iter().enumerate() {
            let diff = count.abs_diff(expected);
            assert!(
                diff < expected / 20,
                "prize {} drawn {} times, expected about {}",
                i + 1,
                count,
                expected
            );
        }
    }
}

//! The per-day reveal state machine.
//!
//! A [`RevealSession`] exists only while a day's detail view is open:
//! created when the view opens, dropped when it closes, nothing persisted.
//! Reopening re-derives the initial phase from the date rules, so a
//! revealed "today" goes back to its mystery box on reopen while a passed
//! day opens revealed every time.
//!
//! The session owns the phase but not the clock: the view schedules the
//! `Revealing -> Revealed` timer and calls [`RevealSession::finish_reveal`]
//! when it fires. A cancelled timer simply never makes that call.

use crate::dates::DayStatus;

/// Milliseconds between entering `Revealing` and landing on `Revealed`.
pub const REVEAL_DELAY_MS: u32 = 1_500;

/// Phase of the mystery-box interaction for the open detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Mystery box on screen, waiting for the tap.
    Unopened,
    /// Exit animation running; `Revealed` is scheduled.
    Revealing,
    /// Content visible. Terminal for this session.
    Revealed,
}

/// State machine for one open detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealSession {
    phase: RevealPhase,
}

impl RevealSession {
    /// Open a day's detail view.
    ///
    /// Returns `None` for locked days: the grid disables interaction on
    /// them, so asking for a session on one is a caller bug, not a state
    /// this machine models. Days that have passed skip the mystery box and
    /// open directly on `Revealed`.
    pub fn open(status: DayStatus) -> Option<RevealSession> {
        if !status.unlocked {
            return None;
        }
        let phase = if status.passed {
            RevealPhase::Revealed
        } else {
            RevealPhase::Unopened
        };
        Some(RevealSession { phase })
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// The user tapped the box. Fires only from `Unopened`; repeat taps
    /// while `Revealing` or `Revealed` are no-ops and return `false`.
    pub fn begin_reveal(&mut self) -> bool {
        match self.phase {
            RevealPhase::Unopened => {
                self.phase = RevealPhase::Revealing;
                true
            }
            RevealPhase::Revealing | RevealPhase::Revealed => false,
        }
    }

    /// The scheduled transition out of `Revealing`, called by the view
    /// when its timer fires. Returns `false` from any other phase.
    pub fn finish_reveal(&mut self) -> bool {
        match self.phase {
            RevealPhase::Revealing => {
                self.phase = RevealPhase::Revealed;
                true
            }
            RevealPhase::Unopened | RevealPhase::Revealed => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCKED: DayStatus = DayStatus {
        unlocked: false,
        today: false,
        passed: false,
    };
    const TODAY: DayStatus = DayStatus {
        unlocked: true,
        today: true,
        passed: false,
    };
    const PASSED: DayStatus = DayStatus {
        unlocked: true,
        today: false,
        passed: true,
    };

    #[test]
    fn test_locked_day_has_no_session() {
        assert!(RevealSession::open(LOCKED).is_none());
    }

    #[test]
    fn test_today_opens_unopened() {
        let session = RevealSession::open(TODAY).unwrap();
        assert_eq!(session.phase(), RevealPhase::Unopened);
    }

    #[test]
    fn test_passed_day_opens_revealed() {
        // Past days get no mystery-box step at all.
        let session = RevealSession::open(PASSED).unwrap();
        assert_eq!(session.phase(), RevealPhase::Revealed);
    }

    #[test]
    fn test_full_reveal_flow() {
        let mut session = RevealSession::open(TODAY).unwrap();
        assert!(session.begin_reveal());
        assert_eq!(session.phase(), RevealPhase::Revealing);
        assert!(session.finish_reveal());
        assert_eq!(session.phase(), RevealPhase::Revealed);
    }

    #[test]
    fn test_double_tap_fires_once() {
        let mut session = RevealSession::open(TODAY).unwrap();
        assert!(session.begin_reveal());
        assert!(!session.begin_reveal());
        assert_eq!(session.phase(), RevealPhase::Revealing);
        assert!(session.finish_reveal());
        assert!(!session.begin_reveal());
        assert_eq!(session.phase(), RevealPhase::Revealed);
    }

    #[test]
    fn test_finish_without_begin_is_a_no_op() {
        let mut session = RevealSession::open(TODAY).unwrap();
        assert!(!session.finish_reveal());
        assert_eq!(session.phase(), RevealPhase::Unopened);
    }

    #[test]
    fn test_finish_is_not_repeatable() {
        let mut session = RevealSession::open(TODAY).unwrap();
        session.begin_reveal();
        assert!(session.finish_reveal());
        assert!(!session.finish_reveal());
    }

    #[test]
    fn test_reopening_recomputes_from_status() {
        // A revealed "today" resets on reopen; a passed day stays revealed.
        let mut first = RevealSession::open(TODAY).unwrap();
        first.begin_reveal();
        first.finish_reveal();
        drop(first);

        let reopened = RevealSession::open(TODAY).unwrap();
        assert_eq!(reopened.phase(), RevealPhase::Unopened);

        let passed = RevealSession::open(PASSED).unwrap();
        assert_eq!(passed.phase(), RevealPhase::Revealed);
    }
}

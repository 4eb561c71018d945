//! Domain rules for the aniversari gift calendar.
//!
//! This crate holds everything the frontend renders but never decides:
//! the calendar data model, catalog validation, the date arithmetic that
//! drives unlocking, and the reveal state machine. All of it is pure and
//! platform-independent — the catalog is validated once at load time and
//! shared read-only for the whole session, and every state transition is
//! an explicit method call made by the view that owns it.

pub mod catalog;
pub mod config;
pub mod dates;
pub mod effects;
pub mod error;
pub mod reveal;

pub use catalog::Catalog;
pub use config::{CalendarConfig, DayContent, DayEntry};
pub use dates::{date_for_day, has_passed, is_today, is_unlocked, DayStatus};
pub use effects::{effect_for_day, pastel_class_for_day, RevealEffect};
pub use error::CatalogError;
pub use reveal::{RevealPhase, RevealSession, REVEAL_DELAY_MS};

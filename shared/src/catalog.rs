//! The validated, immutable day catalog.

use chrono::NaiveDate;

use crate::config::{CalendarConfig, DayEntry};
use crate::error::CatalogError;

/// An immutable catalog of day entries, validated once at load time.
///
/// Day numbers are guaranteed dense `1..=N` in ascending order, so lookup
/// is a plain array index.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    config: CalendarConfig,
}

impl Catalog {
    /// Parse and validate a calendar data file.
    pub fn load(json: &str) -> Result<Catalog, CatalogError> {
        let config: CalendarConfig = serde_json::from_str(json)?;
        Catalog::new(config)
    }

    /// Validate an already-deserialized config.
    ///
    /// The per-content-type field requirements are enforced by the
    /// [`DayContent`](crate::config::DayContent) type itself; what is
    /// checked here is the day numbering.
    pub fn new(config: CalendarConfig) -> Result<Catalog, CatalogError> {
        if config.days.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (position, entry) in config.days.iter().enumerate() {
            let expected = position as u32 + 1;
            if entry.day == expected {
                continue;
            }
            let occurrences = config.days.iter().filter(|e| e.day == entry.day).count();
            if occurrences > 1 {
                return Err(CatalogError::DuplicateDay { day: entry.day });
            }
            return Err(CatalogError::NonDense {
                expected,
                found: entry.day,
            });
        }
        Ok(Catalog { config })
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn start_date(&self) -> NaiveDate {
        self.config.start_date
    }

    /// Number of days in the calendar (the `N` of `1..=N`).
    pub fn len(&self) -> u32 {
        self.config.days.len() as u32
    }

    pub fn days(&self) -> &[DayEntry] {
        &self.config.days
    }

    /// Look up a day entry.
    ///
    /// `None` signals a programming error in the caller — the grid
    /// offering a day the catalog does not have — and is rendered as an
    /// explicit error placeholder, never silently guessed at.
    pub fn entry_for_day(&self, day: u32) -> Option<&DayEntry> {
        if day == 0 {
            return None;
        }
        self.config.days.get(day as usize - 1)
    }
}

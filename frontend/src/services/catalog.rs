use shared::{Catalog, CatalogError};

/// The calendar definition shipped with the app.
const CALENDAR_JSON: &str = include_str!("../../data/calendar.json");

/// Parse and validate the bundled calendar.
///
/// Called once at startup. A failure here is fatal: the app renders its
/// integrity-error screen rather than a calendar it cannot trust.
pub fn load() -> Result<Catalog, CatalogError> {
    Catalog::load(CALENDAR_JSON)
}

//! Date arithmetic behind the unlock rules.
//!
//! Everything compares plain calendar dates — no time-of-day component,
//! so a daylight-saving shift can never move a day's unlock moment.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Calendar date on which `day` unlocks: `start + (day - 1)` whole days.
///
/// `day` is not bounded here — the catalog bounds it elsewhere. An
/// addition that would leave the calendar saturates at the far future,
/// which never compares `<=` any real reference date, so absurd day
/// numbers simply stay locked.
pub fn date_for_day(start: NaiveDate, day: u32) -> NaiveDate {
    start
        .checked_add_days(Days::new(u64::from(day.saturating_sub(1))))
        .unwrap_or(NaiveDate::MAX)
}

/// A day is unlocked once its calendar date has arrived.
pub fn is_unlocked(start: NaiveDate, day: u32, today: NaiveDate) -> bool {
    date_for_day(start, day) <= today
}

/// A day is "today" when its date equals the reference date. At most one
/// day of a dense catalog satisfies this.
pub fn is_today(start: NaiveDate, day: u32, today: NaiveDate) -> bool {
    date_for_day(start, day) == today
}

/// A day has passed once its date is strictly before the reference date.
pub fn has_passed(start: NaiveDate, day: u32, today: NaiveDate) -> bool {
    date_for_day(start, day) < today
}

/// All three unlock predicates evaluated against one reference date.
///
/// Classifying a day must never mix reference dates or the flags can
/// disagree; compute the whole status in one call and hand it around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayStatus {
    pub unlocked: bool,
    pub today: bool,
    pub passed: bool,
}

impl DayStatus {
    pub fn classify(start: NaiveDate, day: u32, today: NaiveDate) -> DayStatus {
        let date = date_for_day(start, day);
        DayStatus {
            unlocked: date <= today,
            today: date == today,
            passed: date < today,
        }
    }
}

/// Short grid-cell label, e.g. "3 nov.".
pub fn format_short_ca(date: NaiveDate) -> String {
    format!("{} {}", date.day(), month_abbrev_ca(date.month()))
}

/// Long date badge for the detail view, e.g.
/// "dimarts, 4 de novembre de 2025" (or "… 1 d'abril …" before a vowel).
pub fn format_long_ca(date: NaiveDate) -> String {
    let month = month_name_ca(date.month());
    let de = if starts_with_vowel(month) { "d'" } else { "de " };
    format!(
        "{}, {} {}{} de {}",
        weekday_name_ca(date.weekday()),
        date.day(),
        de,
        month,
        date.year()
    )
}

fn starts_with_vowel(word: &str) -> bool {
    matches!(word.chars().next(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}

fn month_abbrev_ca(month: u32) -> &'static str {
    match month {
        1 => "gen.",
        2 => "febr.",
        3 => "març",
        4 => "abr.",
        5 => "maig",
        6 => "juny",
        7 => "jul.",
        8 => "ag.",
        9 => "set.",
        10 => "oct.",
        11 => "nov.",
        12 => "des.",
        _ => "",
    }
}

fn month_name_ca(month: u32) -> &'static str {
    match month {
        1 => "gener",
        2 => "febrer",
        3 => "març",
        4 => "abril",
        5 => "maig",
        6 => "juny",
        7 => "juliol",
        8 => "agost",
        9 => "setembre",
        10 => "octubre",
        11 => "novembre",
        12 => "desembre",
        _ => "",
    }
}

fn weekday_name_ca(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "dilluns",
        Weekday::Tue => "dimarts",
        Weekday::Wed => "dimecres",
        Weekday::Thu => "dijous",
        Weekday::Fri => "divendres",
        Weekday::Sat => "dissabte",
        Weekday::Sun => "diumenge",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_date_for_day_round_trip() {
        let start = date("2025-11-01");
        assert_eq!(date_for_day(start, 1), start);
        for day in 1..70 {
            assert_eq!(
                date_for_day(start, day + 1),
                date_for_day(start, day) + Days::new(1)
            );
        }
    }

    #[test]
    fn test_date_for_day_crosses_month_and_year() {
        let start = date("2025-11-01");
        assert_eq!(date_for_day(start, 31), date("2025-12-01"));
        assert_eq!(date_for_day(start, 62), date("2026-01-01"));
        assert_eq!(date_for_day(start, 70), date("2026-01-09"));
    }

    #[test]
    fn test_day_one_on_start_date() {
        let start = date("2025-11-01");
        let today = date("2025-11-01");
        assert!(is_unlocked(start, 1, today));
        assert!(is_today(start, 1, today));
        assert!(!has_passed(start, 1, today));
        assert!(!is_unlocked(start, 2, today));
    }

    #[test]
    fn test_passed_day_classification() {
        let start = date("2025-11-01");
        let today = date("2025-11-05");
        assert!(is_unlocked(start, 3, today));
        assert!(has_passed(start, 3, today));
        assert!(!is_today(start, 3, today));
    }

    #[test]
    fn test_unlock_is_monotonic_in_day() {
        let start = date("2025-11-01");
        let today = date("2025-11-20");
        for day2 in 2..=70u32 {
            if is_unlocked(start, day2, today) {
                for day1 in 1..day2 {
                    assert!(
                        is_unlocked(start, day1, today),
                        "day {} unlocked but day {} was not",
                        day2,
                        day1
                    );
                }
            }
        }
    }

    #[test]
    fn test_unlocked_partitions_into_today_and_passed() {
        let start = date("2025-11-01");
        let today = date("2025-11-10");
        for day in 1..=70u32 {
            let status = DayStatus::classify(start, day, today);
            assert_eq!(status.unlocked, status.today || status.passed);
            assert!(!(status.today && status.passed), "day {} both today and passed", day);
        }
    }

    #[test]
    fn test_classify_matches_individual_predicates() {
        let start = date("2025-11-01");
        let today = date("2025-12-15");
        for day in 1..=70u32 {
            let status = DayStatus::classify(start, day, today);
            assert_eq!(status.unlocked, is_unlocked(start, day, today));
            assert_eq!(status.today, is_today(start, day, today));
            assert_eq!(status.passed, has_passed(start, day, today));
        }
    }

    #[test]
    fn test_huge_day_number_stays_locked() {
        let start = date("2025-11-01");
        let today = date("2025-11-05");
        assert!(!is_unlocked(start, u32::MAX, today));
        assert_eq!(date_for_day(NaiveDate::MAX, u32::MAX), NaiveDate::MAX);
    }

    #[test]
    fn test_day_zero_clamps_to_start() {
        // Day numbers below 1 are caller bugs; clamping keeps the math total.
        let start = date("2025-11-01");
        assert_eq!(date_for_day(start, 0), start);
    }

    #[test]
    fn test_format_short_ca() {
        assert_eq!(format_short_ca(date("2025-11-03")), "3 nov.");
        assert_eq!(format_short_ca(date("2026-01-09")), "9 gen.");
        assert_eq!(format_short_ca(date("2025-03-15")), "15 març");
    }

    #[test]
    fn test_format_long_ca() {
        assert_eq!(
            format_long_ca(date("2025-11-04")),
            "dimarts, 4 de novembre de 2025"
        );
        assert_eq!(
            format_long_ca(date("2026-04-01")),
            "dimecres, 1 d'abril de 2026"
        );
        assert_eq!(
            format_long_ca(date("2026-08-02")),
            "diumenge, 2 d'agost de 2026"
        );
    }
}

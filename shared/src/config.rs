//! Data model for the bundled calendar definition.
//!
//! Field names follow the JSON data file (`camelCase`), which is a
//! build-time artifact — nothing here is edited at runtime.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-level calendar definition, deserialized once from `calendar.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarConfig {
    /// Main heading for the welcome screen.
    pub title: String,
    /// Subheading for the welcome screen.
    pub subtitle: String,
    /// Label for the welcome screen start button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    /// Date on which day 1 unlocks.
    pub start_date: NaiveDate,
    /// One entry per day, numbered `1..=N` with no gaps.
    pub days: Vec<DayEntry>,
}

/// A single day of the calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    /// 1-based day number; unlocks on `start_date + (day - 1)`.
    pub day: u32,
    /// Display label for the grid cell and the detail header.
    pub title: String,
    /// Optional illustrative image, independent of the content type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub content: DayContent,
}

/// The closed set of content types a day can reveal.
///
/// Each variant carries exactly the fields its type requires, so a data
/// file missing a companion field fails at deserialize time instead of
/// becoming a nullable hole checked at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "contentType", rename_all = "camelCase")]
pub enum DayContent {
    /// A riddle about the day's gift. `outcome_text` is the answer, shown
    /// in place of the clue once the day has passed.
    #[serde(rename_all = "camelCase")]
    Clue {
        clue_text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        outcome_text: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Audio { media_path: String },
    #[serde(rename_all = "camelCase")]
    Video { media_path: String },
    #[serde(rename_all = "camelCase")]
    Photo { media_path: String },
    /// A voucher-style experience described in free-form text.
    #[serde(rename_all = "camelCase")]
    Virtual { clue_text: String },
}

impl DayContent {
    /// Text body for a revealed day, if the content type has one.
    ///
    /// Clue days that have passed show the outcome when one exists and
    /// fall back to the clue otherwise.
    pub fn revealed_text(&self, day_has_passed: bool) -> Option<&str> {
        match self {
            DayContent::Clue {
                clue_text,
                outcome_text,
            } => {
                if day_has_passed {
                    Some(outcome_text.as_deref().unwrap_or(clue_text))
                } else {
                    Some(clue_text)
                }
            }
            DayContent::Virtual { clue_text } => Some(clue_text),
            DayContent::Audio { .. } | DayContent::Video { .. } | DayContent::Photo { .. } => None,
        }
    }

    /// Relative media locator for audio/video/photo days.
    pub fn media_path(&self) -> Option<&str> {
        match self {
            DayContent::Audio { media_path }
            | DayContent::Video { media_path }
            | DayContent::Photo { media_path } => Some(media_path),
            DayContent::Clue { .. } | DayContent::Virtual { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clue_entry() {
        let entry: DayEntry = serde_json::from_str(
            r#"{
                "day": 1,
                "title": "Primer dia",
                "contentType": "clue",
                "clueText": "Mira sota el coixí...",
                "outcomeText": "Era un val per un esmorzar!"
            }"#,
        )
        .unwrap();

        assert_eq!(entry.day, 1);
        assert_eq!(entry.image, None);
        match &entry.content {
            DayContent::Clue {
                clue_text,
                outcome_text,
            } => {
                assert_eq!(clue_text, "Mira sota el coixí...");
                assert_eq!(outcome_text.as_deref(), Some("Era un val per un esmorzar!"));
            }
            other => panic!("expected clue content, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_media_entries() {
        let audio: DayEntry = serde_json::from_str(
            r#"{"day": 2, "title": "Una cançó", "contentType": "audio", "mediaPath": "audio/dia-02.mp3"}"#,
        )
        .unwrap();
        assert_eq!(audio.content.media_path(), Some("audio/dia-02.mp3"));

        let photo: DayEntry = serde_json::from_str(
            r#"{"day": 3, "title": "Un record", "contentType": "photo", "mediaPath": "images/dia-03.jpg", "image": "images/marc.png"}"#,
        )
        .unwrap();
        assert_eq!(photo.content.media_path(), Some("images/dia-03.jpg"));
        assert_eq!(photo.image.as_deref(), Some("images/marc.png"));
    }

    #[test]
    fn test_audio_without_media_path_is_rejected() {
        let result = serde_json::from_str::<DayEntry>(
            r#"{"day": 7, "title": "Trencada", "contentType": "audio"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_content_type_is_rejected() {
        let result = serde_json::from_str::<DayEntry>(
            r#"{"day": 4, "title": "Misteri", "contentType": "hologram", "clueText": "?"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_revealed_text_prefers_outcome_for_passed_days() {
        let content = DayContent::Clue {
            clue_text: "Pista".to_string(),
            outcome_text: Some("Resposta".to_string()),
        };
        assert_eq!(content.revealed_text(false), Some("Pista"));
        assert_eq!(content.revealed_text(true), Some("Resposta"));
    }

    #[test]
    fn test_revealed_text_falls_back_to_clue_without_outcome() {
        let content = DayContent::Clue {
            clue_text: "Pista".to_string(),
            outcome_text: None,
        };
        assert_eq!(content.revealed_text(true), Some("Pista"));
    }

    #[test]
    fn test_virtual_reuses_clue_text_as_body() {
        let content = DayContent::Virtual {
            clue_text: "Val per un sopar".to_string(),
        };
        assert_eq!(content.revealed_text(false), Some("Val per un sopar"));
        assert_eq!(content.revealed_text(true), Some("Val per un sopar"));
        assert_eq!(content.media_path(), None);
    }
}

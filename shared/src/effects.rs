//! Cosmetic selection tables for the reveal interaction.
//!
//! Selection is a pure function of the day number, so the same day always
//! gets the same effect and the same pastel pairing, across sessions and
//! re-renders. None of this touches timing or state.

/// One of the five reveal presentation variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealEffect {
    /// Emoji burst shown while the box opens.
    pub emoji: &'static str,
    /// Copy line under the burst.
    pub headline: &'static str,
    /// CSS class driving the box exit animation.
    pub animation_class: &'static str,
}

static EFFECTS: [RevealEffect; 5] = [
    RevealEffect {
        emoji: "🎉",
        headline: "Sorpresa en camí...",
        animation_class: "reveal-burst",
    },
    RevealEffect {
        emoji: "✨",
        headline: "Una mica de màgia...",
        animation_class: "reveal-sparkle",
    },
    RevealEffect {
        emoji: "🎈",
        headline: "Que voli la caixa!",
        animation_class: "reveal-float",
    },
    RevealEffect {
        emoji: "🎁",
        headline: "Desembolicant...",
        animation_class: "reveal-unwrap",
    },
    RevealEffect {
        emoji: "💝",
        headline: "Amb molt d'amor...",
        animation_class: "reveal-hearts",
    },
];

/// Reveal effect for a day: `day mod 5`.
pub fn effect_for_day(day: u32) -> &'static RevealEffect {
    &EFFECTS[(day % 5) as usize]
}

// Gradient pairs cycled by the detail header, badge and clue card.
const PASTELS: [&str; 8] = [
    "pastel-peach-orange",
    "pastel-sky-periwinkle",
    "pastel-mint-turquoise",
    "pastel-lavender-pink",
    "pastel-yellow-lime",
    "pastel-turquoise-sky",
    "pastel-blush-pink",
    "pastel-lime-mint",
];

/// Pastel gradient class for a day: `(day - 1) mod 8`.
pub fn pastel_class_for_day(day: u32) -> &'static str {
    PASTELS[(day.saturating_sub(1) % 8) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_selection_is_stable() {
        for day in 1..=70u32 {
            assert_eq!(effect_for_day(day), effect_for_day(day));
        }
    }

    #[test]
    fn test_effect_cycles_every_five_days() {
        assert_eq!(effect_for_day(1), effect_for_day(6));
        assert_eq!(effect_for_day(3), effect_for_day(68));
        assert_ne!(effect_for_day(1), effect_for_day(2));
    }

    #[test]
    fn test_all_five_effects_are_reachable() {
        let mut seen: Vec<&'static str> = (1..=5u32)
            .map(|day| effect_for_day(day).animation_class)
            .collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_pastel_cycles_every_eight_days() {
        assert_eq!(pastel_class_for_day(1), "pastel-peach-orange");
        assert_eq!(pastel_class_for_day(9), pastel_class_for_day(1));
        assert_eq!(pastel_class_for_day(70), pastel_class_for_day(62));
    }
}

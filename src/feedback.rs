//! Feedback tiers derived from the annual total.

/// Totals below this are `Low`.
pub const LOW_THRESHOLD: f64 = 4000.0;
/// Totals below this (and not `Low`) are `Average`.
pub const HIGH_THRESHOLD: f64 = 10000.0;

/// Qualitative band a footprint falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    Low,
    Average,
    High,
}

impl FeedbackTier {
    /// Display color as a CSS-style hex string.
    pub fn color_hex(self) -> &'static str {
        match self {
            FeedbackTier::Low => "#2ecc71",
            FeedbackTier::Average => "#f1c40f",
            FeedbackTier::High => "#e74c3c",
        }
    }

    /// Display color as RGB components.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            FeedbackTier::Low => (0x2e, 0xcc, 0x71),
            FeedbackTier::Average => (0xf1, 0xc4, 0x0f),
            FeedbackTier::High => (0xe7, 0x4c, 0x3c),
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FeedbackTier::Low => "¡Excelente! Tu huella es muy baja. ¡Sigue así!",
            FeedbackTier::Average => {
                "Estás en el promedio. Pequeños cambios pueden hacer una gran diferencia."
            }
            FeedbackTier::High => "Tu huella es alta. Considera reducir el uso del auto o carne.",
        }
    }

    /// Short name used in logs and summaries.
    pub fn name(self) -> &'static str {
        match self {
            FeedbackTier::Low => "low",
            FeedbackTier::Average => "average",
            FeedbackTier::High => "high",
        }
    }
}

/// Maps a total to its tier. Boundary values belong to the upper tier.
pub fn classify_feedback(total: f64) -> FeedbackTier {
    if total < LOW_THRESHOLD {
        FeedbackTier::Low
    } else if total < HIGH_THRESHOLD {
        FeedbackTier::Average
    } else {
        FeedbackTier::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify_feedback(3999.99), FeedbackTier::Low);
        assert_eq!(classify_feedback(4000.0), FeedbackTier::Average);
        assert_eq!(classify_feedback(9999.99), FeedbackTier::Average);
        assert_eq!(classify_feedback(10000.0), FeedbackTier::High);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify_feedback(0.0), FeedbackTier::Low);
        assert_eq!(classify_feedback(1e9), FeedbackTier::High);
    }

    #[test]
    fn test_worked_example_is_average_yellow() {
        let tier = classify_feedback(6553.4);
        assert_eq!(tier, FeedbackTier::Average);
        assert_eq!(tier.color_hex(), "#f1c40f");
    }

    #[test]
    fn test_rgb_matches_hex() {
        for tier in [FeedbackTier::Low, FeedbackTier::Average, FeedbackTier::High] {
            let (r, g, b) = tier.rgb();
            assert_eq!(format!("#{r:02x}{g:02x}{b:02x}"), tier.color_hex());
        }
    }

    #[test]
    fn test_messages_are_verbatim() {
        assert_eq!(
            FeedbackTier::Low.message(),
            "¡Excelente! Tu huella es muy baja. ¡Sigue así!"
        );
        assert_eq!(
            FeedbackTier::High.message(),
            "Tu huella es alta. Considera reducir el uso del auto o carne."
        );
    }
}

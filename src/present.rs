//! Presentation of a computed total.
//!
//! Turns a number into render instructions for the result panel. The
//! panel itself lives in `ui::result`; nothing here touches the terminal.

use crate::animation::CountUp;
use crate::constants::ANIMATION_DURATION;
use crate::feedback::{classify_feedback, FeedbackTier};
use crate::footprint::FootprintResult;

/// Unit appended to every displayed total.
pub const UNIT: &str = "kg CO₂/año";

/// Everything the result panel needs to show one calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub total: f64,
    pub tier: FeedbackTier,
    /// Hex color for the displayed number.
    pub color: &'static str,
    pub message: &'static str,
    /// Make the (previously hidden) result panel visible.
    pub reveal: bool,
    /// Move focus to the result panel.
    pub bring_into_view: bool,
    pub count_up: CountUp,
}

/// Builds the render instructions for a total.
pub fn present_result(total: f64) -> Presentation {
    let tier = classify_feedback(total);
    Presentation {
        total,
        tier,
        color: tier.color_hex(),
        message: tier.message(),
        reveal: true,
        bring_into_view: true,
        count_up: CountUp::new(0.0, total, ANIMATION_DURATION),
    }
}

/// Groups the digits of `value` in threes, e.g. 6553 -> "6,553".
pub fn format_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }

    out
}

/// The floored integer shown for a total.
pub fn display_value(total: f64) -> u64 {
    total.floor() as u64
}

/// One-line summary, as copied to the clipboard.
pub fn summary_line(total: f64, separator: char) -> String {
    format!(
        "Huella de carbono: {} {UNIT}. {}",
        format_thousands(display_value(total), separator),
        classify_feedback(total).message()
    )
}

/// Multi-line report with the per-category breakdown.
pub fn summary_report(result: &FootprintResult, separator: char) -> String {
    let mut report = format!(
        "{} {UNIT}\n{}\n",
        format_thousands(display_value(result.total), separator),
        classify_feedback(result.total).message()
    );
    for (category, value) in result.breakdown() {
        report.push_str(&format!(
            "  {:<14} {:>10}\n",
            category.label(),
            format_thousands(display_value(value), separator)
        ));
    }
    report
}

//! Shared formatting helpers for the dashboard and CLI.

/// Indian-rupee formatting.
pub mod currency {
    /// Abbreviation ladder used when formatting an amount.
    ///
    /// Carbon figures stop at lakh; economic figures also abbreviate
    /// thousands.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum RupeeScale {
        CroreLakh,
        CroreLakhThousand,
    }

    pub const CRORE: f64 = 10_000_000.0;
    pub const LAKH: f64 = 100_000.0;
    pub const THOUSAND: f64 = 1_000.0;

    /// Format an amount as `₹x.xx Cr`, `₹x.xx L`, `₹x.xx K`, or a plain
    /// en-IN grouped number below the smallest abbreviation.
    pub fn format_rupees(amount: f64, scale: RupeeScale) -> String {
        if amount >= CRORE {
            format!("₹{:.2} Cr", amount / CRORE)
        } else if amount >= LAKH {
            format!("₹{:.2} L", amount / LAKH)
        } else if scale == RupeeScale::CroreLakhThousand && amount >= THOUSAND {
            format!("₹{:.2} K", amount / THOUSAND)
        } else {
            format!("₹{}", group_indian(amount))
        }
    }

    /// Format a number the way the `en-IN` locale does: at most three
    /// fraction digits, last three integer digits grouped, then pairs.
    ///
    /// e.g., 1234567.5 -> "12,34,567.5"
    pub fn group_indian(amount: f64) -> String {
        if amount.is_nan() {
            return "NaN".to_string();
        }
        if amount.is_infinite() {
            return if amount > 0.0 { "∞" } else { "-∞" }.to_string();
        }

        let rounded = (amount.abs() * 1000.0).round() / 1000.0;
        let text = format!("{:.3}", rounded);
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
        let frac = frac_part.trim_end_matches('0');

        let mut out = String::new();
        if amount < 0.0 && rounded > 0.0 {
            out.push('-');
        }
        out.push_str(&group_digits(int_part));
        if !frac.is_empty() {
            out.push('.');
            out.push_str(frac);
        }
        out
    }

    fn group_digits(digits: &str) -> String {
        if digits.len() <= 3 {
            return digits.to_string();
        }
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_rupees_abbreviations() {
            assert_eq!(format_rupees(12_500_000.0, RupeeScale::CroreLakh), "₹1.25 Cr");
            assert_eq!(format_rupees(250_000.0, RupeeScale::CroreLakh), "₹2.50 L");
            assert_eq!(format_rupees(5_000.0, RupeeScale::CroreLakhThousand), "₹5.00 K");
        }

        #[test]
        fn test_format_rupees_plain_below_threshold() {
            assert_eq!(format_rupees(5_000.0, RupeeScale::CroreLakh), "₹5,000");
            assert_eq!(format_rupees(54_321.5, RupeeScale::CroreLakh), "₹54,321.5");
            assert_eq!(format_rupees(999.0, RupeeScale::CroreLakhThousand), "₹999");
        }

        #[test]
        fn test_group_indian() {
            assert_eq!(group_indian(0.0), "0");
            assert_eq!(group_indian(123.0), "123");
            assert_eq!(group_indian(1234.0), "1,234");
            assert_eq!(group_indian(1_234_567.0), "12,34,567");
            assert_eq!(group_indian(123_456_789.0), "12,34,56,789");
            assert_eq!(group_indian(-98_765.4321), "-98,765.432");
        }
    }
}

/// Signed change and value formatting.
pub mod change {
    /// Direction used to color a change value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Trend {
        Positive,
        Negative,
    }

    impl Trend {
        /// Zero counts as negative.
        pub fn of(value: f64) -> Self {
            if value > 0.0 {
                Trend::Positive
            } else {
                Trend::Negative
            }
        }

        pub fn css_class(&self) -> &'static str {
            match self {
                Trend::Positive => "positive",
                Trend::Negative => "negative",
            }
        }
    }

    /// Fixed-precision number with an explicit `+` for positive values.
    pub fn format_signed(value: f64, decimals: usize) -> String {
        let sign = if value > 0.0 { "+" } else { "" };
        format!("{}{:.*}", sign, decimals, value)
    }

    /// A percentage change to one decimal place, e.g. `+1.5%`.
    pub fn format_change(value: f64) -> String {
        format!("{}%", format_signed(value, 1))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_change() {
            assert_eq!(format_change(1.46), "+1.5%");
            assert_eq!(format_change(-2.0), "-2.0%");
            assert_eq!(format_change(0.0), "0.0%");
        }

        #[test]
        fn test_trend() {
            assert_eq!(Trend::of(0.1), Trend::Positive);
            assert_eq!(Trend::of(0.0), Trend::Negative);
            assert_eq!(Trend::of(-3.0).css_class(), "negative");
        }

        #[test]
        fn test_format_signed() {
            assert_eq!(format_signed(12.346, 2), "+12.35");
            assert_eq!(format_signed(-4.0, 2), "-4.00");
        }
    }
}

/// Line classifier for generated insight text.
pub mod insight_text {
    /// How a single line of insight text is displayed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum InsightLine<'a> {
        Heading(&'a str),
        Bullet(&'a str),
        Paragraph(&'a str),
    }

    /// Classify one line. Blank lines produce nothing.
    ///
    /// A heading is `<digits>. <Capital>...`; a bullet starts with `-` or
    /// `•` after trimming.
    pub fn classify_line(line: &str) -> Option<InsightLine<'_>> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        if is_numbered_heading(line) {
            return Some(InsightLine::Heading(line));
        }
        if trimmed.starts_with('-') || trimmed.starts_with('•') {
            return Some(InsightLine::Bullet(line));
        }
        Some(InsightLine::Paragraph(line))
    }

    /// Classify every line of `text`, skipping blanks.
    pub fn classify(text: &str) -> Vec<InsightLine<'_>> {
        text.split('\n').filter_map(classify_line).collect()
    }

    fn is_numbered_heading(line: &str) -> bool {
        let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
        if rest.len() == line.len() {
            return false;
        }
        let Some(rest) = rest.strip_prefix('.') else {
            return false;
        };
        let after_space = rest.trim_start_matches(char::is_whitespace);
        if after_space.len() == rest.len() {
            return false;
        }
        after_space
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_uppercase())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_classify_line() {
            assert_eq!(classify_line("1. Summary"), Some(InsightLine::Heading("1. Summary")));
            assert_eq!(classify_line("- point one"), Some(InsightLine::Bullet("- point one")));
            assert_eq!(classify_line("  • tree cover"), Some(InsightLine::Bullet("  • tree cover")));
            assert_eq!(classify_line("   "), None);
            assert_eq!(classify_line(""), None);
            assert_eq!(
                classify_line("Green cover is declining."),
                Some(InsightLine::Paragraph("Green cover is declining."))
            );
        }

        #[test]
        fn test_heading_requires_capital_and_space() {
            assert_eq!(classify_line("1. lowercase"), Some(InsightLine::Paragraph("1. lowercase")));
            assert_eq!(classify_line("1.Summary"), Some(InsightLine::Paragraph("1.Summary")));
            assert_eq!(classify_line("12.  Risks"), Some(InsightLine::Heading("12.  Risks")));
            assert_eq!(classify_line(" 1. Indented"), Some(InsightLine::Paragraph(" 1. Indented")));
        }

        #[test]
        fn test_classify_text() {
            let lines = classify("1. Overview\n\nUrban growth is high.\n- Plant trees\n");
            assert_eq!(
                lines,
                vec![
                    InsightLine::Heading("1. Overview"),
                    InsightLine::Paragraph("Urban growth is high."),
                    InsightLine::Bullet("- Plant trees"),
                ]
            );
        }
    }
}

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, NaiveDateTime};

    const DISPLAY_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

    /// Format a backend timestamp for display.
    ///
    /// Accepts RFC 3339 or a naive ISO 8601 datetime; anything else is
    /// returned unchanged.
    pub fn format_timestamp(raw: &str) -> String {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return dt.format(DISPLAY_FORMAT).to_string();
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return dt.format(DISPLAY_FORMAT).to_string();
        }
        raw.to_string()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_timestamp() {
            assert_eq!(format_timestamp("2024-03-01T14:05:09"), "01/03/2024, 14:05:09");
            assert_eq!(
                format_timestamp("2024-03-01T14:05:09.123456"),
                "01/03/2024, 14:05:09"
            );
            assert_eq!(
                format_timestamp("2024-03-01T14:05:09+05:30"),
                "01/03/2024, 14:05:09"
            );
            assert_eq!(format_timestamp("yesterday"), "yesterday");
        }
    }
}

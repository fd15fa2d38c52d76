//! Shared utility functions for WPG crates.

/// Number formatting for display. The data crates keep raw numbers; these
/// helpers are only used when printing.
pub mod format {
    /// Insert thousands separators: `1234567` → `1,234,567`.
    pub fn format_thousands(value: u64) -> String {
        let digits = value.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }

    /// Whole US dollars with separators: `1234.6` → `$1,235`.
    pub fn format_currency(value: f64) -> String {
        let rounded = value.round();
        let sign = if rounded < 0.0 { "-" } else { "" };
        format!("{}${}", sign, format_thousands(rounded.abs() as u64))
    }

    /// Dollars with cents and separators: `9876.543` → `$9,876.54`.
    pub fn format_currency_cents(value: f64) -> String {
        let cents = (value.abs() * 100.0).round() as u64;
        let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
        format!("{}${}.{:02}", sign, format_thousands(cents / 100), cents % 100)
    }

    /// Percentage with two decimals: `-5.2` → `-5.20%`.
    pub fn format_pct(value: f64) -> String {
        format!("{:.2}%", value)
    }

}

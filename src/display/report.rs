//! Report formatting utilities for terminal output
//!
//! Amount, percentage and layout helpers shared by the table views and the
//! report renderers.

use crate::config::Settings;

/// Formats floating-point amounts for display
///
/// The engine never rounds; rounding to currency precision happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountFormatter {
    symbol: String,
    decimals: usize,
}

impl AmountFormatter {
    /// Create a formatter with a currency symbol and number of decimals
    pub fn new(symbol: impl Into<String>, decimals: usize) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Build a formatter from user settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.currency_symbol.clone(), settings.decimal_places as usize)
    }

    /// Round an amount to display precision
    pub fn round(&self, amount: f64) -> f64 {
        let factor = 10f64.powi(self.decimals as i32);
        (amount * factor).round() / factor
    }

    /// Format an amount, e.g. `$12.50` or `-$3.00`
    ///
    /// Values that round to zero never carry a minus sign.
    pub fn format(&self, amount: f64) -> String {
        let rounded = self.round(amount);
        if rounded < 0.0 {
            format!("-{}{:.*}", self.symbol, self.decimals, -rounded)
        } else {
            format!("{}{:.*}", self.symbol, self.decimals, rounded.abs())
        }
    }

    /// Format an amount with an explicit `+` for positive values
    pub fn format_signed(&self, amount: f64) -> String {
        if self.round(amount) > 0.0 {
            format!("+{}", self.format(amount))
        } else {
            self.format(amount)
        }
    }
}

impl Default for AmountFormatter {
    fn default() -> Self {
        Self::new("$", 2)
    }
}

/// Describe a balance in words
pub fn balance_status(balance: f64, tolerance: f64) -> &'static str {
    if balance > tolerance {
        "is owed"
    } else if balance < -tolerance {
        "owes"
    } else {
        "settled"
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct.fract() == 0.0 {
        format!("{:.0}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        let fmt = AmountFormatter::default();
        assert_eq!(fmt.format(30.0), "$30.00");
        assert_eq!(fmt.format(-12.345), "-$12.35");
        assert_eq!(fmt.format(33.333333), "$33.33");
        assert_eq!(fmt.format(0.0), "$0.00");
    }

    #[test]
    fn test_no_negative_zero() {
        let fmt = AmountFormatter::default();
        assert_eq!(fmt.format(-0.001), "$0.00");
        assert_eq!(fmt.format(-1e-12), "$0.00");
    }

    #[test]
    fn test_format_signed() {
        let fmt = AmountFormatter::new("€", 2);
        assert_eq!(fmt.format_signed(60.0), "+€60.00");
        assert_eq!(fmt.format_signed(-30.0), "-€30.00");
        assert_eq!(fmt.format_signed(0.0), "€0.00");
    }

    #[test]
    fn test_custom_decimals() {
        let fmt = AmountFormatter::new("¥", 0);
        assert_eq!(fmt.format(1234.4), "¥1234");
    }

    #[test]
    fn test_balance_status() {
        assert_eq!(balance_status(5.0, 0.01), "is owed");
        assert_eq!(balance_status(-5.0, 0.01), "owes");
        assert_eq!(balance_status(0.004, 0.01), "settled");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(25.0), "25%");
        assert_eq!(format_percentage(100.0 / 3.0), "33.3%");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
    }
}

use chrono::NaiveDate;

const MASK: &str = "••••";

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64, currency: &str) -> String;
}

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: NaiveDate) -> String;
}

/// Two-decimal amounts followed by the currency symbol, or a mask in privacy mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmountFormatter {
    pub privacy: bool,
}

impl AmountFormatter {
    pub fn new(privacy: bool) -> Self {
        Self { privacy }
    }
}

impl CurrencyFormatter for AmountFormatter {
    fn format_amount(&self, amount: f64, currency: &str) -> String {
        if self.privacy {
            return format!("{MASK} {currency}");
        }
        format!("{amount:.2} {currency}")
    }
}

/// ISO `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoDateFormatter;

impl DateFormatter for IsoDateFormatter {
    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn privacy_masks_amounts() {
        assert_eq!(AmountFormatter::new(false).format_amount(45.5, "€"), "45.50 €");
        assert_eq!(AmountFormatter::new(true).format_amount(45.5, "€"), "•••• €");
    }

    #[test]
    fn dates_are_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(IsoDateFormatter.format_date(date), "2024-06-01");
    }
}

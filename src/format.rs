use configuration::DisplaySettings;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Turns engine numbers into display strings.
///
/// The engine never formats anything itself; the report renderer is handed one of these.
pub trait MoneyFormatter {
    fn money(&self, amount: Decimal) -> String;

    /// Formats a conversion rate given as a fraction (0.0075 -> "0.75%").
    fn percent(&self, rate: Decimal) -> String {
        format!("{:.2}%", round(rate * dec!(100), 2))
    }
}

/// A fixed currency prefix with thousands grouping, e.g. `R$1,234.50`.
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    symbol: String,
    decimal_places: u32,
}

impl CurrencyFormatter {
    pub fn new(symbol: impl Into<String>, decimal_places: u32) -> Self {
        Self {
            symbol: symbol.into(),
            decimal_places,
        }
    }
}

impl From<&DisplaySettings> for CurrencyFormatter {
    fn from(settings: &DisplaySettings) -> Self {
        Self::new(settings.currency_symbol.clone(), settings.decimal_places)
    }
}

impl MoneyFormatter for CurrencyFormatter {
    fn money(&self, amount: Decimal) -> String {
        let dp = self.decimal_places as usize;
        let fixed = format!("{:.dp$}", round(amount.abs(), self.decimal_places));
        let (whole, fraction) = match fixed.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
        match fraction {
            Some(fraction) => format!("{sign}{}{}.{fraction}", self.symbol, group_thousands(whole)),
            None => format!("{sign}{}{}", self.symbol, group_thousands(whole)),
        }
    }
}

fn round(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

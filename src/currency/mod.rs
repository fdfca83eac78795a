use rust_decimal::Decimal;
use serde::Deserialize;

/// ISO 4217 currency representation, always upper case.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn symbol(&self) -> String {
        symbol_for(self.as_str())
    }
}

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        _ => format!("{code} "),
    }
}

/// Renders an amount prefixed by the currency symbol.
///
/// Trailing fractional zeros are dropped but no rounding is applied, so
/// `0.01` stays `0.01` and `150.50` renders as `150.5`.
pub fn format_amount(amount: Decimal, code: &CurrencyCode) -> String {
    let body = amount.normalize();
    if body.is_sign_negative() {
        format!("-{}{}", code.symbol(), body.abs())
    } else {
        format!("{}{}", code.symbol(), body)
    }
}

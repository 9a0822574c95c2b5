//! # Currency Formatting
//!
//! The model returns its cost estimate as free text ("$ 12,345 COP",
//! "Approximately 140000", ...). `format_cost` pulls the number out of that
//! text and renders it in the conventions of the selected currency, rounded
//! to whole units.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// Colombian peso (es-CO conventions)
    #[default]
    Cop,
    /// US dollar (en-US conventions)
    Usd,
    /// Euro (es-ES conventions)
    Eur,
    /// Mexican peso (es-MX conventions)
    Mxn,
}

/// Where the symbol goes relative to the digits.
enum SymbolPlacement {
    /// `$12,345`
    Prefix,
    /// `$ 12.345`
    PrefixSpaced,
    /// `12.345 €`
    SuffixSpaced,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Cop => "COP",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Mxn => "MXN",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Cop | Currency::Usd | Currency::Mxn => "$",
            Currency::Eur => "€",
        }
    }

    fn group_separator(self) -> char {
        match self {
            Currency::Cop | Currency::Eur => '.',
            Currency::Usd | Currency::Mxn => ',',
        }
    }

    fn placement(self) -> SymbolPlacement {
        match self {
            Currency::Cop => SymbolPlacement::PrefixSpaced,
            Currency::Usd | Currency::Mxn => SymbolPlacement::Prefix,
            Currency::Eur => SymbolPlacement::SuffixSpaced,
        }
    }
}

/// Extract a number from free text.
///
/// Everything except ASCII digits, `.` and `-` is discarded before parsing.
/// Returns `0.0` when nothing numeric is left or the remainder doesn't parse.
pub fn parse_amount(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Format the cost text returned by the model as a currency string.
pub fn format_cost(text: &str, currency: Currency) -> String {
    format_amount(parse_amount(text), currency)
}

/// Format an amount in whole units of `currency`.
pub fn format_amount(amount: f64, currency: Currency) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    // f64 formatting keeps every integer digit; no integer cast to saturate
    let digits = group_digits(&format!("{:.0}", rounded.abs()), currency.group_separator());
    let symbol = currency.symbol();

    match currency.placement() {
        SymbolPlacement::Prefix => format!("{sign}{symbol}{digits}"),
        SymbolPlacement::PrefixSpaced => format!("{sign}{symbol} {digits}"),
        SymbolPlacement::SuffixSpaced => format!("{sign}{digits} {symbol}"),
    }
}

/// Insert `separator` between every group of three digits.
fn group_digits(raw: &str, separator: char) -> String {
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cop_cost_text_with_symbol_and_code() {
        assert_eq!(format_cost("$ 12,345 COP", Currency::Cop), "$ 12.345");
    }

    #[test]
    fn test_no_numeric_content_falls_back_to_zero() {
        assert_eq!(format_cost("not available", Currency::Cop), "$ 0");
        assert_eq!(format_cost("", Currency::Usd), "$0");
    }

    #[test]
    fn test_unparsable_remainder_falls_back_to_zero() {
        // "10-20" survives the filter but is not a number
        assert_eq!(parse_amount("between 10 and-20"), 0.0);
    }

    #[test]
    fn test_decimal_point_is_kept() {
        assert_eq!(parse_amount("Approximately 1234.56 dollars"), 1234.56);
        assert_eq!(format_cost("1234.56", Currency::Usd), "$1,235");
    }

    #[test]
    fn test_large_values_are_grouped() {
        assert_eq!(format_amount(1_234_567.0, Currency::Cop), "$ 1.234.567");
        assert_eq!(format_amount(1_234_567.0, Currency::Usd), "$1,234,567");
        assert_eq!(format_amount(1_234_567.0, Currency::Mxn), "$1,234,567");
        assert_eq!(format_amount(1_234_567.0, Currency::Eur), "1.234.567 €");
    }

    #[test]
    fn test_amounts_beyond_u64_keep_all_digits() {
        let formatted = format_cost("99999999999999999999999", Currency::Usd);
        assert!(formatted.starts_with("$99,999,999,999,999,99"));
        assert_eq!(formatted.len(), "$".len() + 23 + 7);
        assert!(!formatted.contains("18,446,744"));
    }

    #[test]
    fn test_ungrouped_model_cost_formats_in_full() {
        assert_eq!(format_cost("120000 COP", Currency::Cop), "$ 120.000");
        assert_eq!(format_cost("1234567", Currency::Eur), "1.234.567 €");
    }

    #[test]
    fn test_small_values_have_no_separator() {
        assert_eq!(format_amount(999.0, Currency::Cop), "$ 999");
        assert_eq!(format_amount(0.0, Currency::Eur), "0 €");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_cost("-5000", Currency::Cop), "-$ 5.000");
        assert_eq!(format_amount(-0.2, Currency::Usd), "$0");
    }

    #[test]
    fn test_codes() {
        assert_eq!(Currency::Cop.code(), "COP");
        assert_eq!(Currency::Usd.code(), "USD");
        assert_eq!(Currency::Eur.code(), "EUR");
        assert_eq!(Currency::Mxn.code(), "MXN");
    }

    #[test]
    fn test_currency_deserializes_lowercase() {
        let c: Currency = serde_json::from_str("\"usd\"").unwrap();
        assert_eq!(c, Currency::Usd);
    }
}

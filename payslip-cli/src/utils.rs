use rust_decimal::Decimal;
use thiserror::Error;

use payslip_core::TaxRegime;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for amount parsing: trims whitespace and removes commas
/// (both `1,200,000` and `12,00,000` grouping are accepted).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a command line amount into a [`Decimal`].
///
/// Empty or whitespace-only input is treated as 0.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::debug!(input = %s, "invalid amount: {}", e);
        ParseAmountError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Parses a regime name for clap, listing the accepted values on failure.
pub fn parse_regime(s: &str) -> Result<TaxRegime, String> {
    TaxRegime::parse(&s.trim().to_ascii_lowercase()).ok_or_else(|| {
        let accepted: Vec<_> = TaxRegime::ALL.iter().map(|r| r.as_str()).collect();
        format!("unknown regime '{s}'; expected one of: {}", accepted.join(", "))
    })
}

/// Formats an amount with Indian digit grouping, e.g. `12,34,567`.
///
/// Fractional digits, if any, are kept as they are.
pub fn format_amount(amount: Decimal) -> String {
    let text = amount.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::new();
    if whole.len() > 3 {
        let (head, tail) = whole.split_at(whole.len() - 3);
        let head_digits: Vec<char> = head.chars().collect();
        for (i, chunk) in head_digits.rchunks(2).rev().enumerate() {
            if i > 0 {
                grouped.push(',');
            }
            grouped.extend(chunk);
        }
        grouped.push(',');
        grouped.push_str(tail);
    } else {
        grouped.push_str(whole);
    }

    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    if amount.is_sign_negative() && !amount.is_zero() {
        grouped.insert(0, '-');
    }
    grouped
}

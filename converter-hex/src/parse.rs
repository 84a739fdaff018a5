//! Request text parsing.
//!
//! Two grammars are tried in order, the first match wins:
//!
//! 1. a bare amount (`100`, `-50`, `12,5`) converting between the base and
//!    the secondary currency, direction given by the sign;
//! 2. an explicit request `<amount> <FROM> to <TO>`.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use rust_decimal::Decimal;

use rates_types::{ConversionRequest, ConverterSettings, CurrencyCode, UsageError};

static COMMAND_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^/convert(?:@\w+)?(?:\s+|$)").expect("valid regex"));

/// A signed decimal with at least one digit: `5`, `5.`, `.5`, `-1,25`.
const AMOUNT: &str = r"[-+]?(?:[0-9]+(?:[.,][0-9]*)?|[.,][0-9]+)";

static BARE_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{AMOUNT}$")).expect("valid regex"));

static EXPLICIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(?P<amount>{AMOUNT})\s+(?P<from>[A-Za-z]{{3}})\s+(?i:to)\s+(?P<to>[A-Za-z]{{3}})\s*$"
    ))
    .expect("valid regex")
});

type Attempt = fn(&str, &ConverterSettings) -> Option<Result<ConversionRequest, UsageError>>;

const GRAMMARS: [Attempt; 2] = [parse_bare_amount, parse_explicit];

/// Parses a conversion request, with or without a leading `/convert`.
pub fn parse_request(
    text: &str,
    settings: &ConverterSettings,
) -> Result<ConversionRequest, UsageError> {
    let text = strip_command(text);
    if text.is_empty() {
        return Err(UsageError::Empty);
    }

    GRAMMARS
        .iter()
        .find_map(|attempt| attempt(text, settings))
        .unwrap_or(Err(UsageError::Malformed))
}

/// True if the text is a conversion request in either grammar.
pub fn matches_grammar(text: &str) -> bool {
    let text = text.trim();
    BARE_AMOUNT.is_match(text) || EXPLICIT.is_match(text)
}

fn strip_command(text: &str) -> &str {
    let text = text.trim();
    match COMMAND_PREFIX.find(text) {
        Some(prefix) => text[prefix.end()..].trim(),
        None => text,
    }
}

fn parse_bare_amount(
    text: &str,
    settings: &ConverterSettings,
) -> Option<Result<ConversionRequest, UsageError>> {
    if !BARE_AMOUNT.is_match(text) {
        return None;
    }

    let request = parse_amount(text).and_then(|amount| {
        if amount.is_zero() {
            Err(UsageError::ZeroAmount)
        } else if amount.is_sign_positive() {
            Ok(ConversionRequest::new(
                amount,
                settings.base.clone(),
                settings.secondary.clone(),
            ))
        } else {
            Ok(ConversionRequest::new(
                amount.abs(),
                settings.secondary.clone(),
                settings.base.clone(),
            ))
        }
    });
    Some(request)
}

fn parse_explicit(
    text: &str,
    _settings: &ConverterSettings,
) -> Option<Result<ConversionRequest, UsageError>> {
    let captures = EXPLICIT.captures(text)?;
    Some(explicit_request(&captures))
}

fn explicit_request(captures: &Captures<'_>) -> Result<ConversionRequest, UsageError> {
    let amount = parse_amount(&captures["amount"])?;
    let from = CurrencyCode::new(&captures["from"]).map_err(|_| UsageError::Malformed)?;
    let to = CurrencyCode::new(&captures["to"]).map_err(|_| UsageError::Malformed)?;
    Ok(ConversionRequest::new(amount, from, to))
}

/// Parses a signed amount with either `.` or `,` as the decimal separator.
fn parse_amount(text: &str) -> Result<Decimal, UsageError> {
    let normalized = text.replace(',', ".");
    let (negative, digits) = match normalized.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, normalized.strip_prefix('+').unwrap_or(&normalized)),
    };

    let digits = digits.strip_suffix('.').unwrap_or(digits);
    let digits = match digits.strip_prefix('.') {
        Some(fraction) => format!("0.{fraction}"),
        None => digits.to_string(),
    };

    let value = Decimal::from_str(&digits).map_err(|_| UsageError::AmountOutOfRange)?;
    Ok(if negative { -value } else { value })
}

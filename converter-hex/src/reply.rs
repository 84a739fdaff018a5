//! Chat reply rendering (Telegram-style HTML markup).

use rates_types::{ConversionResult, ConvertError, RateView, UsageError, format_amount};

pub const RATES_UNAVAILABLE: &str = "Failed to load exchange rates. Please try again later.";

pub const HELP: &str = "Send an amount to convert between the base and the secondary currency \
(a negative amount converts back), or a request like <code>100 USD to EUR</code>.\n\
/currencies lists the supported codes.";

/// Renders a successful conversion.
pub fn conversion(result: &ConversionResult) -> String {
    if result.from == result.to {
        return format!("Result: {} {}", format_amount(result.amount), result.to);
    }

    format!(
        "<b>{} {} = {} {}</b>\n\n<i>Rate: 1 {} = {} {}</i>",
        format_amount(result.amount),
        result.from,
        format_amount(result.converted),
        result.to,
        result.from,
        format_amount(result.cross_rate),
        result.to,
    )
}

/// Renders a failed conversion with a hint for the user.
pub fn error(err: &ConvertError) -> String {
    match err {
        ConvertError::Usage(UsageError::Empty) => {
            "Format: <code>100</code> or <code>100 USD to EUR</code>".to_string()
        }
        ConvertError::Usage(UsageError::Malformed) => {
            "Use: <code>/convert 100</code> or <code>/convert 100 USD to EUR</code>".to_string()
        }
        ConvertError::Usage(UsageError::ZeroAmount) => "Amount cannot be zero.".to_string(),
        ConvertError::Usage(UsageError::AmountOutOfRange) => {
            "Amount is too large to convert.".to_string()
        }
        ConvertError::UnknownCurrency(_) => {
            "Currency not found. List of codes: /currencies".to_string()
        }
        ConvertError::RatesUnavailable(_) => RATES_UNAVAILABLE.to_string(),
    }
}

/// Lists every available code, base currency first.
pub fn currency_listing(rates: &RateView) -> String {
    let mut text = String::from("<b>Available currencies:</b>\n\n");
    for record in rates.entries() {
        text.push_str(&format!(
            "<code>{}</code> - {}\n",
            record.code(),
            escape_html(record.name())
        ));
    }
    text
}

/// Splits text into chunks of at most `limit` characters.
///
/// Whole lines are packed together; only a line longer than the limit is cut,
/// and then on character boundaries. The chunks concatenate back to `text`.
pub fn split_chunks(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.split_inclusive('\n') {
        let line_len = line.chars().count();
        if current_len + line_len > limit && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if line_len > limit {
            let chars: Vec<char> = line.chars().collect();
            for piece in chars.chunks(limit) {
                if piece.len() == limit {
                    chunks.push(piece.iter().collect());
                } else {
                    current = piece.iter().collect();
                    current_len = piece.len();
                }
            }
            continue;
        }

        current.push_str(line);
        current_len += line_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rates_types::{CurrencyCode, RateRecord, RateTable};
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn code(s: &str) -> CurrencyCode {
        s.parse().unwrap()
    }

    #[test]
    fn test_conversion_reply() {
        let result = ConversionResult {
            amount: dec!(100),
            from: code("BYN"),
            to: code("RUB"),
            converted: dec!(2766.8640),
            cross_rate: dec!(27.668640),
        };
        assert_eq!(
            conversion(&result),
            "<b>100 BYN = 2766.86 RUB</b>\n\n<i>Rate: 1 BYN = 27.67 RUB</i>"
        );
    }

    #[test]
    fn test_same_currency_reply() {
        let req = rates_types::ConversionRequest::new(dec!(10.50), code("USD"), code("USD"));
        assert_eq!(conversion(&ConversionResult::identity(&req)), "Result: 10.5 USD");
    }

    #[test]
    fn test_listing_escapes_names() {
        let table = RateTable::from_records([
            RateRecord::new(code("XDR"), "SDR <IMF>", dec!(4.2), 1).unwrap(),
            RateRecord::new(code("AUD"), "Australian dollar", dec!(2.1), 1).unwrap(),
        ]);
        let view = RateView::new(Arc::new(table), RateRecord::base(code("BYN"), "Belarusian ruble"));

        assert_eq!(
            currency_listing(&view),
            "<b>Available currencies:</b>\n\n\
             <code>BYN</code> - Belarusian ruble\n\
             <code>AUD</code> - Australian dollar\n\
             <code>XDR</code> - SDR &lt;IMF&gt;\n"
        );
    }

    #[test]
    fn test_short_text_is_one_chunk() {
        assert_eq!(split_chunks("a\nb\n", 4096), vec!["a\nb\n".to_string()]);
        assert!(split_chunks("", 4096).is_empty());
    }

    #[test]
    fn test_chunks_break_between_lines() {
        let text = "aaaa\nbbbb\ncccc\n";
        let chunks = split_chunks(text, 10);
        assert_eq!(chunks, vec!["aaaa\nbbbb\n", "cccc\n"]);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_long_line_is_cut_on_char_boundaries() {
        let text = "ёёёёёёё\nok\n";
        let chunks = split_chunks(text, 3);
        assert!(chunks.iter().all(|c| c.chars().count() <= 3));
        assert_eq!(chunks.concat(), text);
        assert_eq!(chunks[0], "ёёё");
    }
}

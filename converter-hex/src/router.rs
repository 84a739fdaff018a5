//! Chat message routing.
//!
//! Maps incoming chat text to service operations and renders the replies:
//! `/currencies`, `/convert <args>`, `/start` and `/help`, plus free text in
//! either conversion grammar. Anything else gets no reply.

use rates_types::{Clock, RateSource};

use crate::ConverterService;
use crate::parse::matches_grammar;
use crate::reply;

impl<S: RateSource, C: Clock> ConverterService<S, C> {
    /// Handles one chat message, returning the replies to send in order.
    #[tracing::instrument(skip(self))]
    pub async fn handle_message(&self, text: &str) -> Vec<String> {
        let text = text.trim();
        match command_name(text).as_deref() {
            Some("currencies") => self.currencies_reply().await,
            Some("convert") => vec![self.conversion_reply(text).await],
            Some("start") | Some("help") => vec![reply::HELP.to_string()],
            Some(other) => {
                tracing::debug!(command = other, "Ignoring unknown command");
                Vec::new()
            }
            None if matches_grammar(text) => vec![self.conversion_reply(text).await],
            None => Vec::new(),
        }
    }

    async fn conversion_reply(&self, text: &str) -> String {
        match self.convert_text(text).await {
            Ok(result) => reply::conversion(&result),
            Err(err) => {
                tracing::debug!(error = %err, "Conversion rejected");
                reply::error(&err)
            }
        }
    }

    async fn currencies_reply(&self) -> Vec<String> {
        match self.rates().await {
            Ok(rates) => reply::split_chunks(
                &reply::currency_listing(&rates),
                self.settings().chunk_size,
            ),
            Err(_) => vec![reply::RATES_UNAVAILABLE.to_string()],
        }
    }
}

/// `"/Convert@fx_bot 10"` -> `Some("convert")`.
fn command_name(text: &str) -> Option<String> {
    let token = text.strip_prefix('/')?.split_whitespace().next()?;
    let name = token.split('@').next().unwrap_or(token);
    Some(name.to_ascii_lowercase())
}

//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use rates_types::{
    AppError, Clock, ConvertQuery, ConvertResponse, CurrencyEntry, CurrencyListResponse,
    MessageRequest, MessageResponse, RateSource,
};

use crate::ConverterService;

/// Application state shared across handlers.
pub struct AppState<S: RateSource, C: Clock> {
    pub service: ConverterService<S, C>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl<E: Into<AppError>> From<E> for ApiError {
    fn from(err: E) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint. Reports whether rates are cached, without fetching.
pub async fn health<S: RateSource, C: Clock>(
    State(state): State<Arc<AppState<S, C>>>,
) -> impl IntoResponse {
    let snapshot = state.service.snapshot().await;
    Json(serde_json::json!({
        "status": "healthy",
        "rates_loaded": snapshot.is_some(),
        "fetched_at": snapshot.map(|s| s.fetched_at),
    }))
}

/// Convert request text, e.g. `?q=100 USD to EUR`.
#[tracing::instrument(skip(state), fields(q = %query.q))]
pub async fn convert<S: RateSource, C: Clock>(
    State(state): State<Arc<AppState<S, C>>>,
    Query(query): Query<ConvertQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.service.convert_text(&query.q).await?;
    Ok(Json(ConvertResponse::from(&result)))
}

/// List all currencies, base currency first.
#[tracing::instrument(skip(state))]
pub async fn list_currencies<S: RateSource, C: Clock>(
    State(state): State<Arc<AppState<S, C>>>,
) -> Result<impl IntoResponse, ApiError> {
    let rates = state.service.rates().await?;
    Ok(Json(CurrencyListResponse {
        base: rates.base().code().clone(),
        currencies: rates.entries().map(CurrencyEntry::from).collect(),
    }))
}

/// Handle one chat message the way the bot would.
#[tracing::instrument(skip(state, req))]
pub async fn message<S: RateSource, C: Clock>(
    State(state): State<Arc<AppState<S, C>>>,
    Json(req): Json<MessageRequest>,
) -> impl IntoResponse {
    let replies = state.service.handle_message(&req.text).await;
    Json(MessageResponse { replies })
}

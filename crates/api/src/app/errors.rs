use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use brewstock_core::StockError;

/// Map a domain failure to its transport status.
///
/// This is the only place where the error taxonomy meets HTTP.
pub fn stock_error_to_response(err: StockError) -> axum::response::Response {
    let message = err.to_string();
    let (status, code) = match err {
        StockError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
        StockError::AlreadyRegistered(_) => (StatusCode::CONFLICT, "already_registered"),
        StockError::NotFound => (StatusCode::NOT_FOUND, "not_found"),
        StockError::NegativeArgument(_) => (StatusCode::BAD_REQUEST, "negative_argument"),
        StockError::StockExceeded { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "stock_exceeded"),
        StockError::StockBelowMinimum { .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, "stock_below_minimum")
        }
    };
    json_error(status, code, message)
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

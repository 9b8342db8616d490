use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use types::errors::OrderError;

use crate::worker::EngineUnavailable;

/// Central error type for the gateway application
#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Unavailable(#[from] EngineUnavailable),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST"),
            AppError::Order(err @ OrderError::NoLiquidity { .. }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                err.to_string(),
                "NO_LIQUIDITY",
            ),
            AppError::Order(err) => (StatusCode::BAD_REQUEST, err.to_string(), "INVALID_ORDER"),
            AppError::Unavailable(err) => (
                StatusCode::SERVICE_UNAVAILABLE,
                err.to_string(),
                "SERVICE_UNAVAILABLE",
            ),
        };

        let body = Json(json!({
            "error": code,
            "message": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::order::Side;

    #[test]
    fn test_no_liquidity_maps_to_unprocessable() {
        let response =
            AppError::from(OrderError::NoLiquidity { side: Side::Buy }).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_invalid_quantity_maps_to_bad_request() {
        let response = AppError::from(OrderError::InvalidQuantity(-1)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unavailable_maps_to_503() {
        let response = AppError::from(EngineUnavailable).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}

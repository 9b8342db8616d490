use crate::error::AppError;
use crate::models::{AddOrderRequest, ModifyOrderRequest, TradesResponse};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use types::ids::OrderId;
use types::order::{Order, OrderModify, OrderType};

pub async fn add_order(
    State(state): State<AppState>,
    Json(payload): Json<AddOrderRequest>,
) -> Result<Json<TradesResponse>, AppError> {
    let order = build_order(payload)?;
    let trades = state.engine.add_order(order).await??;
    Ok(Json(TradesResponse::new(trades)))
}

pub async fn cancel_order(
    State(state): State<AppState>,
    Path(order_id): Path<u64>,
) -> Result<StatusCode, AppError> {
    // Cancel is silent by contract: unknown ids succeed too.
    state.engine.cancel(OrderId::new(order_id)).await?;
    Ok(StatusCode::OK)
}

pub async fn modify_order(
    State(state): State<AppState>,
    Path(order_id): Path<u64>,
    Json(payload): Json<ModifyOrderRequest>,
) -> Result<Json<TradesResponse>, AppError> {
    let modify = OrderModify::new(
        OrderId::new(order_id),
        payload.side,
        payload.price,
        payload.quantity,
    );
    let trades = state.engine.modify(modify).await??;
    Ok(Json(TradesResponse::new(trades)))
}

/// Turn the request DTO into an engine order, enforcing that exactly the
/// market orders arrive un-priced.
fn build_order(payload: AddOrderRequest) -> Result<Order, AppError> {
    let id = OrderId::new(payload.order_id);
    match (payload.order_type, payload.price) {
        (OrderType::Market, None) => Ok(Order::market(id, payload.side, payload.quantity)),
        (OrderType::Market, Some(_)) => Err(AppError::BadRequest(
            "market orders must not carry a price".into(),
        )),
        (order_type, Some(price)) => Ok(Order::new(
            order_type,
            id,
            payload.side,
            price,
            payload.quantity,
        )),
        (_, None) => Err(AppError::BadRequest(
            "price is required for non-market orders".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::numeric::{Price, Quantity};
    use types::order::Side;

    fn request(order_type: OrderType, price: Option<i32>) -> AddOrderRequest {
        AddOrderRequest {
            order_id: 1,
            order_type,
            side: Side::Buy,
            price: price.map(Price::new),
            quantity: Quantity::new(10),
        }
    }

    #[test]
    fn test_build_limit_order() {
        let order = build_order(request(OrderType::GoodTillCancel, Some(100))).unwrap();
        assert_eq!(order.price, Price::new(100));
        assert_eq!(order.order_type, OrderType::GoodTillCancel);
    }

    #[test]
    fn test_build_market_order() {
        let order = build_order(request(OrderType::Market, None)).unwrap();
        assert!(!order.price.is_valid());
    }

    #[test]
    fn test_priced_market_order_rejected() {
        assert!(build_order(request(OrderType::Market, Some(100))).is_err());
    }

    #[test]
    fn test_unpriced_limit_order_rejected() {
        assert!(build_order(request(OrderType::FillAndKill, None)).is_err());
    }
}

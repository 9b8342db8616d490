use serde::{Deserialize, Serialize};
use types::numeric::{Price, Quantity};
use types::order::{OrderType, Side};
use types::trade::Trade;

#[derive(Debug, Clone, Deserialize)]
pub struct AddOrderRequest {
    pub order_id: u64,
    pub order_type: OrderType,
    pub side: Side,
    /// Absent (or null) for market orders, required otherwise.
    #[serde(default)]
    pub price: Option<Price>,
    pub quantity: Quantity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModifyOrderRequest {
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
}

#[derive(Debug, Clone, Serialize)]
pub struct TradesResponse {
    pub count: usize,
    pub trades: Vec<Trade>,
}

impl TradesResponse {
    pub fn new(trades: Vec<Trade>) -> Self {
        Self {
            count: trades.len(),
            trades,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BookStatsResponse {
    pub open_orders: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_order_request_with_price() {
        let json = r#"{"order_id":1,"order_type":"GTC","side":"BUY","price":100,"quantity":10}"#;
        let request: AddOrderRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.order_id, 1);
        assert_eq!(request.order_type, OrderType::GoodTillCancel);
        assert_eq!(request.side, Side::Buy);
        assert_eq!(request.price, Some(Price::new(100)));
        assert_eq!(request.quantity, Quantity::new(10));
    }

    #[test]
    fn test_add_order_request_market_without_price() {
        let json = r#"{"order_id":2,"order_type":"MARKET","side":"SELL","quantity":5}"#;
        let request: AddOrderRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.order_type, OrderType::Market);
        assert_eq!(request.price, None);
    }

    #[test]
    fn test_trades_response_counts() {
        let response = TradesResponse::new(Vec::new());
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"count\":0"));
        assert!(json.contains("\"trades\":[]"));
    }
}

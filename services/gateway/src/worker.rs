//! Engine worker task
//!
//! The book has no internal locking: exactly one task owns it, and every
//! request is funneled through a bounded queue. The effects observed by
//! callers therefore follow the serial order in which requests were
//! queued, and replies travel back over per-request oneshot channels.

use matching_engine::{DepthSnapshot, OrderBook};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use types::errors::OrderError;
use types::ids::OrderId;
use types::order::{Order, OrderModify};
use types::trade::Trade;

/// The queue between handlers and the worker is gone; the gateway can no
/// longer serve book operations.
#[derive(Debug, Error)]
#[error("engine worker is not running")]
pub struct EngineUnavailable;

enum EngineCommand {
    AddOrder {
        order: Order,
        reply: oneshot::Sender<Result<Vec<Trade>, OrderError>>,
    },
    Cancel {
        order_id: OrderId,
        reply: oneshot::Sender<()>,
    },
    Modify {
        modify: OrderModify,
        reply: oneshot::Sender<Result<Vec<Trade>, OrderError>>,
    },
    Depth {
        reply: oneshot::Sender<DepthSnapshot>,
    },
    OrderCount {
        reply: oneshot::Sender<usize>,
    },
}

/// Cloneable handle to the engine worker.
#[derive(Clone)]
pub struct EngineHandle {
    tx: mpsc::Sender<EngineCommand>,
}

/// Spawn the worker that owns the book and return a handle to it.
pub fn spawn(queue_depth: usize) -> EngineHandle {
    let (tx, rx) = mpsc::channel(queue_depth);
    tokio::spawn(run(rx));
    EngineHandle { tx }
}

async fn run(mut rx: mpsc::Receiver<EngineCommand>) {
    let mut book = OrderBook::new();

    while let Some(command) = rx.recv().await {
        match command {
            EngineCommand::AddOrder { order, reply } => {
                let order_id = order.id;
                let result = book.add_order(order);
                match &result {
                    Ok(trades) if !trades.is_empty() => {
                        tracing::info!(%order_id, trades = trades.len(), "order matched");
                    }
                    Ok(_) => {
                        tracing::debug!(%order_id, "order admitted, no trades");
                    }
                    Err(err) => {
                        tracing::warn!(%order_id, %err, "order rejected");
                    }
                }
                let _ = reply.send(result);
            }
            EngineCommand::Cancel { order_id, reply } => {
                book.cancel(order_id);
                tracing::debug!(%order_id, "cancel processed");
                let _ = reply.send(());
            }
            EngineCommand::Modify { modify, reply } => {
                let order_id = modify.order_id;
                let result = book.modify(modify);
                if let Err(err) = &result {
                    tracing::warn!(%order_id, %err, "modify rejected");
                }
                let _ = reply.send(result);
            }
            EngineCommand::Depth { reply } => {
                let _ = reply.send(book.levels());
            }
            EngineCommand::OrderCount { reply } => {
                let _ = reply.send(book.order_count());
            }
        }
    }

    tracing::info!("engine worker stopped: all handles dropped");
}

impl EngineHandle {
    pub async fn add_order(
        &self,
        order: Order,
    ) -> Result<Result<Vec<Trade>, OrderError>, EngineUnavailable> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(EngineCommand::AddOrder { order, reply })
            .await
            .map_err(|_| EngineUnavailable)?;
        rx.await.map_err(|_| EngineUnavailable)
    }

    pub async fn cancel(&self, order_id: OrderId) -> Result<(), EngineUnavailable> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(EngineCommand::Cancel { order_id, reply })
            .await
            .map_err(|_| EngineUnavailable)?;
        rx.await.map_err(|_| EngineUnavailable)
    }

    pub async fn modify(
        &self,
        modify: OrderModify,
    ) -> Result<Result<Vec<Trade>, OrderError>, EngineUnavailable> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(EngineCommand::Modify { modify, reply })
            .await
            .map_err(|_| EngineUnavailable)?;
        rx.await.map_err(|_| EngineUnavailable)
    }

    pub async fn depth(&self) -> Result<DepthSnapshot, EngineUnavailable> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(EngineCommand::Depth { reply })
            .await
            .map_err(|_| EngineUnavailable)?;
        rx.await.map_err(|_| EngineUnavailable)
    }

    pub async fn order_count(&self) -> Result<usize, EngineUnavailable> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(EngineCommand::OrderCount { reply })
            .await
            .map_err(|_| EngineUnavailable)?;
        rx.await.map_err(|_| EngineUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::numeric::{Price, Quantity};
    use types::order::{OrderType, Side};

    fn gtc(id: u64, side: Side, price: i32, qty: i32) -> Order {
        Order::new(
            OrderType::GoodTillCancel,
            OrderId::new(id),
            side,
            Price::new(price),
            Quantity::new(qty),
        )
    }

    #[tokio::test]
    async fn test_worker_serves_crossing_orders() {
        let engine = spawn(16);

        let trades = engine
            .add_order(gtc(1, Side::Buy, 100, 10))
            .await
            .unwrap()
            .unwrap();
        assert!(trades.is_empty());

        let trades = engine
            .add_order(gtc(2, Side::Sell, 100, 4))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].quantity(), Quantity::new(4));

        let depth = engine.depth().await.unwrap();
        assert_eq!(depth.bids.len(), 1);
        assert_eq!(depth.bids[0].quantity, Quantity::new(6));
        assert_eq!(engine.order_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_worker_cancel_and_count() {
        let engine = spawn(16);

        engine
            .add_order(gtc(1, Side::Buy, 100, 10))
            .await
            .unwrap()
            .unwrap();
        engine.cancel(OrderId::new(1)).await.unwrap();
        engine.cancel(OrderId::new(1)).await.unwrap();

        assert_eq!(engine.order_count().await.unwrap(), 0);
        assert!(engine.depth().await.unwrap().bids.is_empty());
    }

    #[tokio::test]
    async fn test_worker_surfaces_rejections() {
        let engine = spawn(16);

        let result = engine
            .add_order(Order::market(OrderId::new(1), Side::Buy, Quantity::new(5)))
            .await
            .unwrap();
        assert_eq!(result.unwrap_err(), OrderError::NoLiquidity { side: Side::Buy });
    }
}

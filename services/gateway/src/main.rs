mod error;
mod handlers;
mod models;
mod router;
mod state;
mod worker;

use router::create_router;
use state::AppState;
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("starting order book gateway");

    // The book lives on a single worker task; handlers reach it through
    // a bounded queue so requests are served strictly in arrival order.
    let engine = worker::spawn(1024);
    let state = AppState::new(engine);

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

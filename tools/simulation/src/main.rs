use simulation::flow::{FlowConfig, FlowDriver};

fn main() {
    tracing_subscriber::fmt::init();

    let mut config = FlowConfig::default();
    if let Some(operations) = std::env::args().nth(1) {
        match operations.parse() {
            Ok(n) => config.operations = n,
            Err(_) => {
                eprintln!("usage: simulation [operations]");
                std::process::exit(2);
            }
        }
    }

    tracing::info!(
        operations = config.operations,
        seed = config.seed,
        "starting order-flow run"
    );

    let metrics = FlowDriver::new(config).run();

    tracing::info!(
        orders = metrics.orders_submitted,
        trades = metrics.trades,
        volume = metrics.volume,
        cancels = metrics.cancels,
        modifies = metrics.modifies,
        rejected = metrics.no_liquidity_rejects,
        resting = metrics.resting_orders,
        "run complete"
    );
    tracing::info!(
        elapsed_ms = (metrics.elapsed_ns / 1_000_000) as u64,
        orders_per_sec = metrics.throughput() as u64,
        "throughput"
    );
}

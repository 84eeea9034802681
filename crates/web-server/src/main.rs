use anyhow::Context;
use catalog::RollCatalog;
use configuration::{init_tracing, load_config, DEFAULT_CONFIG_FILE};
use std::net::SocketAddr;
use std::path::Path;

// This main function is the entry point when running `cargo run -p web-server`.
// It wires settings, logging and the store, then hands over to `run_server`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config(Path::new(DEFAULT_CONFIG_FILE))?;
    let _guard = init_tracing(&config.logging)?;

    let store = database::open_store(&config.database).await?;
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .with_context(|| format!("invalid listen address {}", config.server.address()))?;

    web_server::run_server(addr, RollCatalog::with_system_clock(store)).await
}

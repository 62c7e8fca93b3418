//! Warband game client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. SyncRuntime (server connection) via its builder
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! Both are built independently and injected into the Client container.
//!
//! # Examples
//!
//! ```bash
//! WARBAND_SERVER_URL=http://localhost:5000 cargo run -p warband-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use anyhow::Context;
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use sync_runtime::{SyncConfig, SyncRuntime};
    use warband_client::Client;

    // 1. Load configuration from environment
    let sync_config = SyncConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(std::env::var("WARBAND_SESSION_ID").ok())?;

    tracing::info!("Starting Warband client");
    tracing::info!("Server: {}", sync_config.server_url);

    // 3. Build SyncRuntime (independent layer)
    let runtime = SyncRuntime::builder()
        .config(sync_config)
        .build()
        .context("failed to build sync runtime")?;

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build and run
    let client = Client::builder()
        .runtime(runtime)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}

mod cli;
mod model;
mod server;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    cli::{Cli, Command},
    server::{
        config::Config, error::AppError, service::import::ImportService, startup,
        state::AppState,
    },
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oceans1876=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let bind_addr = config.bind_addr.clone();
            let app = startup::build_app(AppState::new(db, config));

            let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
            tracing::info!("Listening on {}", bind_addr);

            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
        Command::Import { testing, data_dir } => {
            tracing::info!("Importing data from {}", data_dir.display());

            ImportService::new(&db, &config)
                .run(&data_dir, testing)
                .await?;
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}

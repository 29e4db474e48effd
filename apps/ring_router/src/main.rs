use std::sync::Arc;

use dotenvy::{dotenv, from_filename};
use shard_ring::{hash64, hash64_hex};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::RouterConfig,
    core::domain::models::AppError,
    infrastructure::{adapters::controllers::RequestController, di::RingRouterModule},
};

pub mod config;
pub mod core;
pub mod infrastructure;


const STARTUP_KEY: &str = "somerandomshit-1";

fn load_env_for_workspace() {
    let _ = from_filename(concat!(env!("CARGO_MANIFEST_DIR"), "/.env"));
    let _ = from_filename(".env");
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv().ok();

    load_env_for_workspace();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        key = STARTUP_KEY,
        hash = hash64(STARTUP_KEY),
        hex = %hash64_hex(STARTUP_KEY),
        "startup key hash"
    );

    let cfg = RouterConfig::from_env()?;
    let module = Arc::new(RingRouterModule::build_from_config(&cfg)?);

    let startup = module.router_service.route(STARTUP_KEY);
    info!(key = STARTUP_KEY, shard = %startup.shard, address = %startup.address, "startup key route");

    let controller = RequestController::new(module);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let reply = controller.handle_line(&line).await;
        stdout.write_all(reply.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    info!("stdin closed, shutting down");

    Ok(())
}

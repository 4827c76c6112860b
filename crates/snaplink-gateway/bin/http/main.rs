mod cli;

use crate::cli::{GeneratorArg, StorageBackendArg, CLI};
use clap::Parser;
use snaplink_core::LinkStore;
use snaplink_gateway::{App, AppState, GatewayConfig, PngQrEncoder};
use snaplink_generator::{Generator, RandomGenerator, SeqGenerator};
use snaplink_shortener::{AllocationPolicy, Shortener, ShortenerService};
use snaplink_storage::{InMemoryLinkStore, RedisLinkStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CLI::try_parse()?;

    snaplink_telemetry::init(config.log_format)?;

    info!(
        listen_addr = %config.listen_addr,
        environment = %config.environment,
        storage_backend = %config.storage,
        generator = %config.generator,
        code_length = config.code_length,
        max_attempts = config.max_attempts,
        "starting gateway server"
    );

    let generator: Box<dyn Generator> = match config.generator {
        GeneratorArg::Random => Box::new(RandomGenerator::new(config.code_length)?),
        GeneratorArg::Sequential => Box::new(SeqGenerator::new(config.code_length)?),
    };

    let policy = match config.allocate_timeout_ms {
        Some(ms) => AllocationPolicy::builder()
            .max_attempts(config.max_attempts)
            .deadline(Duration::from_millis(ms))
            .build(),
        None => AllocationPolicy::builder()
            .max_attempts(config.max_attempts)
            .build(),
    };

    let shortener = match config.storage {
        StorageBackendArg::InMemory => {
            build_shortener(InMemoryLinkStore::new(), generator, policy)
        }
        StorageBackendArg::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .ok_or("redis url is required when storage backend is redis")?;
            build_shortener(RedisLinkStore::connect(redis_url).await?, generator, policy)
        }
    };

    let gateway_config = GatewayConfig::builder()
        .environment(config.environment)
        .default_host(config.default_host)
        .fallback_location(config.fallback_location)
        .build();

    let state = AppState::new(shortener, Arc::new(PngQrEncoder::default()), gateway_config);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway server listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway server stopped");
    Ok(())
}

fn build_shortener<S: LinkStore>(
    store: S,
    generator: Box<dyn Generator>,
    policy: AllocationPolicy,
) -> Arc<dyn Shortener> {
    Arc::new(ShortenerService::new(store, generator).with_policy(policy))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}

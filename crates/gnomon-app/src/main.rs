use std::time::Duration;

use chrono::Utc;
use clap::Parser;
use gnomon_app::cli::{Args, OutputFormat};
use gnomon_app::render;
use gnomon_client::cache::CachedSource;
use gnomon_client::http::ApiClient;
use gnomon_client::source::{PostSource, SyncedEventSource};
use gnomon_core::config::{Settings, load_config};
use gnomon_service::planner::CalendarPlanner;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing_log::LogTracer::init()?;

    tracing::info!("Starting gnomon calendar planner");

    let mut config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    if let Some(limit) = args.limit {
        config.api.post_limit = limit;
    }

    let client = ApiClient::new(&config.api)?;

    if config.cache.enabled {
        let source = CachedSource::new(client, Duration::from_secs(config.cache.ttl_secs));
        run(source.clone(), source, &config, &args).await
    } else {
        run(client.clone(), client, &config, &args).await
    }
}

async fn run<P, S>(posts: P, synced: S, config: &Settings, args: &Args) -> anyhow::Result<()>
where
    P: PostSource,
    S: SyncedEventSource,
{
    let mut planner = CalendarPlanner::from_settings(posts, synced, config)?;
    if let Some(month) = args.month {
        planner.show_month(month);
    }
    planner.set_view(args.view);

    planner.refresh().await;
    tracing::info!(events = planner.event_count(), month = %planner.displayed(), "Calendar loaded");

    let now = Utc::now();
    match args.format {
        OutputFormat::Text => println!("{}", render::render_calendar(&planner, now)),
        OutputFormat::Json => println!("{}", render::render_json(&planner, now)?),
    }

    Ok(())
}

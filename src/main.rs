use std::env;
use std::process;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use picks_dashboard::api::DocumentClient;
use picks_dashboard::config::Config;
use picks_dashboard::snapshot::Snapshot;
use picks_dashboard::view::{compose, render, render_json, render_load_error, ViewState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "picks_dashboard=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse arguments
    let args: Vec<String> = env::args().collect();
    let state = parse_view_state(&args)?;
    let as_json = args.iter().any(|a| a == "--json");

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded");

    let client = DocumentClient::from_config(&config);
    match &config.data_dir {
        Some(dir) => info!("Reading documents from {}", dir.display()),
        None => info!("Fetching documents from {}", config.data_base_url),
    }

    let documents = match client.load_all().await {
        Ok(docs) => docs,
        Err(e) => {
            error!("{}", e);
            print!("{}", render_load_error(&e));
            process::exit(1);
        }
    };

    let snapshot = Snapshot::from_documents(documents);
    let view = compose(&state, &snapshot);

    if as_json {
        println!("{}", render_json(&view)?);
    } else {
        print!("{}", render(&view, &snapshot));
    }

    Ok(())
}

/// Parse --tab, --competition and --edge-only
fn parse_view_state(args: &[String]) -> Result<ViewState> {
    let mut state = ViewState::default();

    for (i, arg) in args.iter().enumerate() {
        match arg.as_str() {
            "--tab" | "-t" => {
                if let Some(value) = args.get(i + 1) {
                    state.tab = value.parse()?;
                }
            }
            "--competition" | "-c" => {
                if let Some(value) = args.get(i + 1) {
                    state.competition = value.parse()?;
                }
            }
            "--edge-only" => state.edge_only = true,
            _ => {}
        }
    }

    Ok(state)
}

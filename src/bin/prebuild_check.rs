use std::env;
use std::path::PathBuf;
use std::process;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use picks_dashboard::validate::{check_json, check_no_patch_header};

const DEFAULT_SOURCE: &str = "app/page.tsx";
const DEFAULT_DATA_DIR: &str = "public/data";
const PRIMARY_FILE: &str = "picks_complete.json";

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prebuild_check=info,picks_dashboard=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = env::args().collect();
    let source = PathBuf::from(parse_flag(&args, "--source").unwrap_or(DEFAULT_SOURCE));
    let data_file =
        PathBuf::from(parse_flag(&args, "--data-dir").unwrap_or(DEFAULT_DATA_DIR)).join(PRIMARY_FILE);

    let result = check_no_patch_header(&source).and_then(|_| check_json(&data_file));

    if let Err(e) = result {
        error!("Pre-build check failed");
        eprintln!("\n[prebuild-check] {:#}\n", e);
        process::exit(1);
    }

    info!(
        "[prebuild-check] OK: {} and {} validated",
        source.display(),
        data_file.display()
    );
}

/// Value following `flag`, if any
fn parse_flag<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

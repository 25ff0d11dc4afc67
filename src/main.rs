mod analyzer;
mod config;
mod loader;
mod model;
mod normalizer;
mod parser;
mod report;
mod source;
mod utils;
#[cfg(test)]
mod test_support;

use analyzer::{Analyzer, AnalyzerImpl};
use config::load_config_or_default;
use loader::DatasetCache;
use parser::ArchiveParser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.json".to_string());
    let config = match load_config_or_default(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let archive_source = match source::from_config(&config) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to set up data source: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Loading datasets from {}", archive_source.id());
    let datasets = match DatasetCache::global()
        .load(archive_source.as_ref(), &ArchiveParser::new())
        .await
    {
        Ok(d) => d,
        Err(e) => {
            error!("Failed to load datasets: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let report = AnalyzerImpl::new().analyze(&datasets);
    match report::renderer_for(config.output).render(&report) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            error!("Failed to render report: {}", e);
            return ExitCode::FAILURE;
        }
    }

    info!("Dashboard complete");
    ExitCode::SUCCESS
}

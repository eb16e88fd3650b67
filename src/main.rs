// Fetches one stock quote from the backend and renders it as an HTML table row.
mod quoteapi {
    // Calls to the backend quote service.
    pub mod api_caller;
    // Response structures for the quote service.
    pub mod response;
}
// HTTP client module.
mod http {
    // HTTP client implementation.
    pub mod client;
}
// Validated quote data and render results.
mod model;
// Fetch, validate and render.
mod renderer;
// Display regions and page output.
mod display;
// Command-line and environment configuration.
mod config;
// module storing defaults
mod constants;
#[cfg(test)]
mod testutil;

use std::{fs, io::Write, process::ExitCode};

use clap::Parser;
use dotenv::dotenv;

use crate::{
    config::{Args, Config},
    display::MemorySurface,
    quoteapi::api_caller::HttpQuoteSource,
    renderer::QuoteFetchRenderer,
};

#[tokio::main]
// Main function entry point. Startup is the one-shot render trigger.
async fn main() -> ExitCode {
    dotenv().ok();

    env_logger::init();

    let args = Args::parse();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error reading configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };
    log::info!("rendering {} from {}", config.symbol, config.base_url);

    let renderer = QuoteFetchRenderer::new(
        HttpQuoteSource::new(&config.base_url, config.timeout),
        MemorySurface::new(),
    );
    renderer.render(&config.symbol).await;
    log::debug!("final state: {:?}", renderer.state());

    let page = display::render_page(&renderer.surface().snapshot());
    let written = match &args.output {
        Some(path) => fs::write(path, page),
        None => std::io::stdout().write_all(page.as_bytes()),
    };
    match written {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Error writing page: {}", err);
            ExitCode::FAILURE
        }
    }
}

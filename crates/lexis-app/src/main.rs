use std::env;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use lexis_lookup::{WordLookup, WordsApiClient};
use tracing_subscriber::EnvFilter;

mod cli;
mod controller;
mod events;
mod io;
mod profile;
mod session;
mod state;
mod status;
mod ui;


use self::cli::Cli;
use self::controller::AppController;
use self::io::InputSource;
use self::profile::ProfileStore;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(&cli);

    let store = ProfileStore::default_location()?;
    store.init()?;

    if let Some(name) = &cli.create_profile {
        let path = store.add_from_default(name)?;
        println!("Created profile {}", path.display());
        return Ok(());
    }

    let mut config = store
        .load(&cli.profile)
        .with_context(|| format!("Failed to load profile '{}'", cli.profile))?;
    config.apply_env(|key| env::var(key).ok());
    cli.apply(&mut config);

    let lookup = Arc::new(WordsApiClient::new(&config.api).context("Failed to create API client")?);

    let provider = lookup.metadata();
    if provider.requires_api_key && config.api.api_key.is_empty() {
        tracing::warn!(
            "No {} key configured, set WORDS_API_KEY or pass --api-key",
            provider.name
        );
    }

    let state = Arc::new(AppState::new(config, cli.json));
    let controller = AppController::new(state, InputSource::from(cli.words));

    controller.run(lookup).await
}

fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));

    // stdout carries rendered output only
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if cli.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

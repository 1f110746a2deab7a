mod client;
mod config;
mod database;
mod events;
mod fetcher;
mod menu;
mod model;
mod viewer;

use client::NationalizeClient;
use config::Config;
use database::Database;
use events::ConsoleSink;

fn main() -> anyhow::Result<()> {
    let config = Config::nationalize_default();
    // No database means nothing else can work; let the error end the process.
    Database::initialize(&config.db_path)?;

    let client = NationalizeClient::new(config.api_url.clone());
    let sink = ConsoleSink::new();
    let mut stdin = std::io::stdin().lock();
    menu::run(&config, &client, &mut stdin, &sink)
}

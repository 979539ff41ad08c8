pub mod battles;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fetchers;
pub mod http;
pub mod parsers;
pub mod services;

use anyhow::Result;
use chrono::{Datelike, Utc};
use clap::Parser;
use cli::Cli;

use crate::config::settings::AppConfig;
use crate::fetchers::ResultsScraper;
use crate::services::{BattleCollectionService, write_battles};

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_run(cli: &Cli) -> Result<()> {
    let config = cli.apply(AppConfig::new());
    let end_year = config.seasons.end_year.unwrap_or_else(current_year);

    let runtime = tokio::runtime::Runtime::new()?;
    let battles = runtime.block_on(async {
        let scraper = ResultsScraper::new(&config.scraper)?;
        let mut service = BattleCollectionService::new(
            scraper,
            &config.extraction,
            config.seasons.failure_policy,
        )?;
        service
            .collect_all_battles(config.seasons.first_year, end_year)
            .await
    })?;

    println!("{:?}", battles);
    write_battles(&config.output.path, &battles)
}

fn current_year() -> i32 {
    Utc::now().year()
}

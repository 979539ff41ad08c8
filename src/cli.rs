use clap::Parser;

use crate::config::{AppConfig, FailurePolicy};

#[derive(Parser, Debug)]
#[command(author, version, about = "Formula 1 teammate battles from season results")]
pub struct Cli {
    /// First season to collect
    #[arg(long, value_name = "YEAR")]
    pub from: Option<i32>,

    /// Season to stop before (defaults to the current year)
    #[arg(long, value_name = "YEAR")]
    pub to: Option<i32>,

    /// Output file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Abort on the first season that fails instead of skipping it
    #[arg(long)]
    pub fail_fast: bool,
}

impl Cli {
    /// Overlay command line overrides on the default configuration
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(from) = self.from {
            config.seasons.first_year = from;
        }
        if let Some(to) = self.to {
            config.seasons.end_year = Some(to);
        }
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if self.fail_fast {
            config.seasons.failure_policy = FailurePolicy::Halt;
        }
        config
    }
}

use anyhow::Result;
use log::{debug, info, warn};

use crate::battles::compute_battles;
use crate::config::{ExtractionSettings, FailurePolicy};
use crate::domain::group_by_team;
use crate::errors::{SeasonContext, SeasonStep};
use crate::parsers::ResultsTableParser;

/// Provides the raw results page markup for a season
#[allow(async_fn_in_trait)]
pub trait SeasonSource {
    async fn fetch_season(&mut self, year: i32) -> Result<String>;
}

/// Outcome counts for one collection run
#[derive(Debug, Default)]
struct SeasonTally {
    collected: usize,
    skipped: Vec<i32>,
    last_error: Option<anyhow::Error>,
}

impl SeasonTally {
    fn nothing_collected(&self) -> bool {
        self.collected == 0 && !self.skipped.is_empty()
    }
}

/// Walks seasons in order and accumulates every team's battles
pub struct BattleCollectionService<S> {
    source: S,
    parser: ResultsTableParser,
    failure_policy: FailurePolicy,
}

impl<S: SeasonSource> BattleCollectionService<S> {
    pub fn new(
        source: S,
        extraction: &ExtractionSettings,
        failure_policy: FailurePolicy,
    ) -> Result<Self> {
        Ok(Self {
            source,
            parser: ResultsTableParser::new(extraction)?,
            failure_policy,
        })
    }

    /// Battles for every season in `[start_year, end_year)`, in season order.
    ///
    /// Under [`FailurePolicy::Skip`] a failing season is left out, but a run in
    /// which every season failed is still an error.
    pub async fn collect_all_battles(
        &mut self,
        start_year: i32,
        end_year: i32,
    ) -> Result<Vec<String>> {
        info!("=== Collecting Battles {}..{} ===\n", start_year, end_year);

        let mut tally = SeasonTally::default();
        let mut battles = Vec::new();

        for year in start_year..end_year {
            match self.season_battles(year).await {
                Ok(season) => {
                    battles.extend(season);
                    tally.collected += 1;
                }
                Err(e) if self.failure_policy == FailurePolicy::Halt => return Err(e),
                Err(e) => {
                    warn!("Skipping season {}: {:#}", year, e);
                    tally.skipped.push(year);
                    tally.last_error = Some(e);
                }
            }
        }

        if tally.nothing_collected() {
            let count = tally.skipped.len();
            let cause = tally
                .last_error
                .unwrap_or_else(|| anyhow::anyhow!("no season could be read"));
            return Err(cause.context(format!("All {} seasons failed", count)));
        }

        if !tally.skipped.is_empty() {
            warn!("  → Skipped seasons: {:?}", tally.skipped);
        }
        info!(
            "  → {} seasons collected, {} skipped, {} battles\n",
            tally.collected,
            tally.skipped.len(),
            battles.len()
        );
        info!("=== Collection Complete ===");
        Ok(battles)
    }

    async fn season_battles(&mut self, year: i32) -> Result<Vec<String>> {
        let markup = self
            .source
            .fetch_season(year)
            .await
            .in_season(year, SeasonStep::Fetch)?;

        let records = self
            .parser
            .parse_records(&markup)
            .in_season(year, SeasonStep::Parse)?;
        let record_count = records.len();

        let teams = group_by_team(records);
        let team_count = teams.len();

        let battles: Vec<String> = teams
            .iter()
            .flat_map(|team| compute_battles(&team.members))
            .collect();

        debug!(
            "  Season {}: {} drivers, {} teams, {} battles",
            year,
            record_count,
            team_count,
            battles.len()
        );
        Ok(battles)
    }
}

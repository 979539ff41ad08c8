/// What to do when one season's page cannot be fetched or parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log the failure and carry on with the next season
    #[default]
    Skip,
    /// Abort the whole run on the first failure
    Halt,
}

#[derive(Debug, Clone)]
pub struct ScraperSettings {
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub url_template: &'static str,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            user_agent: "TeammateBattles/1.0",
            timeout_secs: 30,
            url_template: "https://www.formula1.com/en/results.html/{year}/drivers.html",
        }
    }
}

impl ScraperSettings {
    pub fn season_url(&self, year: i32) -> String {
        self.url_template.replace("{year}", &year.to_string())
    }
}

/// Where the fields live in a season results table
pub struct ExtractionSettings {
    pub row_selector: &'static str,
    pub name_column: usize,
    pub team_column: usize,
    pub points_column: usize,
    /// Element inside the name cell holding the three-letter driver code
    pub driver_code_selector: &'static str,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            row_selector: ".table-wrap tr",
            name_column: 2,
            team_column: 4,
            points_column: 5,
            driver_code_selector: ".hide-for-desktop",
        }
    }
}

impl ExtractionSettings {
    pub fn required_cells(&self) -> usize {
        self.name_column.max(self.team_column).max(self.points_column) + 1
    }
}

pub struct SeasonSettings {
    pub first_year: i32,
    /// Exclusive; `None` means the current year at run time
    pub end_year: Option<i32>,
    pub failure_policy: FailurePolicy,
}

impl Default for SeasonSettings {
    fn default() -> Self {
        Self {
            first_year: 1950,
            end_year: None,
            failure_policy: FailurePolicy::Skip,
        }
    }
}

pub struct OutputSettings {
    pub path: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: "output.txt".to_string(),
        }
    }
}

#[derive(Default)]
pub struct AppConfig {
    pub scraper: ScraperSettings,
    pub extraction: ExtractionSettings,
    pub seasons: SeasonSettings,
    pub output: OutputSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

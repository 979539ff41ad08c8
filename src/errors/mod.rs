use anyhow::{Context as _, Result};
use std::fmt;
use std::path::Path;

/// Stage of the per-season pipeline an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonStep {
    Fetch,
    Parse,
}

impl fmt::Display for SeasonStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonStep::Fetch => f.write_str("fetching results page"),
            SeasonStep::Parse => f.write_str("reading results table"),
        }
    }
}

/// Tag a season failure with its year and step
pub trait SeasonContext<T> {
    fn in_season(self, year: i32, step: SeasonStep) -> Result<T>;
}

impl<T> SeasonContext<T> for Result<T> {
    fn in_season(self, year: i32, step: SeasonStep) -> Result<T> {
        self.with_context(|| format!("Season {} failed while {}", year, step))
    }
}

pub fn request_context(url: &str) -> String {
    format!("Request to {} failed", url)
}

pub fn output_context(path: &Path) -> String {
    format!("Could not write battles to {}", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_context_names_year_and_step() {
        let failed: Result<()> = Err(anyhow::anyhow!("HTTP error 404 Not Found"));
        let err = failed.in_season(1961, SeasonStep::Fetch).unwrap_err();

        assert_eq!(
            format!("{:#}", err),
            "Season 1961 failed while fetching results page: HTTP error 404 Not Found"
        );
    }

    #[test]
    fn test_output_context_names_path() {
        let message = output_context(Path::new("out/battles.txt"));
        assert!(message.ends_with("out/battles.txt"));
    }
}

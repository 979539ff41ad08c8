pub mod settings;

pub use settings::{
    AppConfig, ExtractionSettings, FailurePolicy, OutputSettings, ScraperSettings, SeasonSettings,
};

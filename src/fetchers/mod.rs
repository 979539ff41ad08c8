mod results_scraper;

pub use results_scraper::ResultsScraper;

mod results_table;
mod text;

pub use results_table::ResultsTableParser;

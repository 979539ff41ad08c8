mod grouping;
pub mod models;

pub use grouping::group_by_team;
pub use models::*;

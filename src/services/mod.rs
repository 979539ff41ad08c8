pub mod collection;
pub mod output;

pub use collection::{BattleCollectionService, SeasonSource};
pub use output::write_battles;

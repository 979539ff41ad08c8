pub mod pairing;
mod ranking;

pub use pairing::{battle_pairs, compute_battles};

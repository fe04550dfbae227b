//! Player ledger
//!
//! Per-player pull records: cumulative pull count, inventory bucketed by
//! rarity and the ordered pull history. The ledger is only ever mutated by
//! the pull engine that owns it.

pub mod player;
pub mod rarity;
pub mod record;
pub mod stats;


pub use player::Player;
pub use rarity::Rarity;
pub use record::PullRecord;
pub use stats::StatsSnapshot;

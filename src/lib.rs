//! Gacha pull simulator
//!
//! Re-exports the workspace crates so callers only depend on `gacha_sim`:
//! the pull engine, the player ledger and the shared error type.

pub mod report;

pub use engine::{
    DEFAULT_MULTI_PULL, EffectiveRates, GachaConfig, GachaEngine, GachaRng, ItemPool, PityConfig,
    PityState, PullPath, RarityTable, RollSource,
};
pub use error::{GachaError, handle_error};
pub use ledger::{Player, PullRecord, Rarity, StatsSnapshot};

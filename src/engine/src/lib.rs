//! Pull engine
//!
//! Owns the rarity table, the item pools, the engine-wide pity counters and
//! the player registry. Every pull resolves a rarity (consulting and
//! resetting pity), samples an item from that rarity's pool and records the
//! result in the puller's ledger.
//!
//! Pity is shared by every player of an engine: a Mythic pulled by one
//! player resets the counters the next player pulls against.

pub mod config;
pub mod pity;
pub mod rng;
pub mod table;


pub use config::{DEFAULT_MULTI_PULL, GachaConfig, PityConfig};
pub use pity::{EffectiveRates, PityState, PullPath};
pub use rng::{GachaRng, RollSource};
pub use table::{ItemPool, RarityTable};

use error::GachaError;
use ledger::{Player, PullRecord, Rarity, StatsSnapshot};
use log::{debug, info};
use std::collections::HashMap;

/// 抽卡引擎
#[derive(Debug, Clone)]
pub struct GachaEngine<S = GachaRng> {
    config: GachaConfig,
    table: RarityTable,
    pool: ItemPool,
    pity: PityState,
    players: HashMap<String, Player>,
    rolls: S,
    /// 本会话所有玩家的总抽数
    session_pulls: u64,
}

impl GachaEngine<GachaRng> {
    /// 默认配置，随机源以系统时钟播种
    pub fn new() -> Self {
        Self::with_rolls(GachaRng::from_clock())
    }

    /// 默认配置，使用固定种子（结果可复现）
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rolls(GachaRng::new(seed))
    }

    /// 随机源的种子，用于复现会话
    pub fn seed(&self) -> u64 {
        self.rolls.seed()
    }
}

impl Default for GachaEngine<GachaRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RollSource> GachaEngine<S> {
    /// 默认配置、概率表与物品池，使用给定随机源
    pub fn with_rolls(rolls: S) -> Self {
        Self {
            config: GachaConfig::default(),
            table: RarityTable::default(),
            pool: ItemPool::default(),
            pity: PityState::default(),
            players: HashMap::new(),
            rolls,
            session_pulls: 0,
        }
    }

    /// 由自定义部件组装引擎
    pub fn from_parts(
        config: GachaConfig,
        table: RarityTable,
        pool: ItemPool,
        rolls: S,
    ) -> Result<Self, GachaError> {
        config.pity.validate()?;
        if config.max_multi_pull == 0 {
            return Err(GachaError::InvalidConfig(
                "max_multi_pull must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            config,
            table,
            pool,
            ..Self::with_rolls(rolls)
        })
    }

    pub fn config(&self) -> &GachaConfig {
        &self.config
    }

    pub fn rarity_table(&self) -> &RarityTable {
        &self.table
    }

    pub fn item_pool(&self) -> &ItemPool {
        &self.pool
    }

    /// 当前保底计数
    pub fn pity(&self) -> PityState {
        self.pity
    }

    /// 直接设置保底计数（用于模拟特定进度）
    pub fn set_pity(&mut self, pity: PityState) {
        self.pity = pity;
    }

    pub fn session_pulls(&self) -> u64 {
        self.session_pulls
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }

    /// 已登记的玩家名（按字典序）
    pub fn player_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.players.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// 登记玩家；已存在时不做任何事
    pub fn register_player(&mut self, name: &str) {
        self.ledger_mut(name);
    }

    /// 判定一次稀有度（推进并按结果重置保底计数）
    pub fn resolve_rarity(&mut self) -> Rarity {
        let (rarity, path) = self
            .pity
            .resolve(&self.config.pity, &self.table, &mut self.rolls);

        match path {
            PullPath::MythicHardPity => debug!("mythic hard pity triggered"),
            PullPath::SsrHardPity => debug!("ssr hard pity triggered"),
            PullPath::Roll(roll) => debug!("rolled {:.4} -> {}", roll, rarity),
        }
        rarity
    }

    /// 为玩家抽一次；未登记的玩家会被自动登记
    pub fn pull_item(&mut self, name: &str) -> PullRecord {
        self.register_player(name);

        let rarity = self.resolve_rarity();
        let items = self.pool.items(rarity);
        let index = self.rolls.pick_index(items.len());
        // 越界下标退回第一件物品
        let item = items
            .get(index)
            .or_else(|| items.first())
            .cloned()
            .unwrap_or_default();

        self.session_pulls += 1;
        let record = self.ledger_mut(name).record(rarity, item).clone();
        if rarity == Rarity::Mythic {
            info!(
                "{} pulled Mythic {} on pull #{}",
                name, record.item, record.pull_number
            );
        }
        record
    }

    /// 连续抽 `count` 次，按抽取顺序返回；保底在批次内连续累计
    pub fn multi_pull(&mut self, name: &str, count: usize) -> Vec<PullRecord> {
        (0..count).map(|_| self.pull_item(name)).collect()
    }

    /// 玩家统计快照；从未登记过的玩家返回 `None`
    pub fn get_player_stats(&self, name: &str) -> Option<StatsSnapshot> {
        self.players.get(name).map(Player::snapshot)
    }

    fn ledger_mut(&mut self, name: &str) -> &mut Player {
        self.players.entry(name.to_string()).or_insert_with(|| {
            info!("registered player {}", name);
            Player::new(name)
        })
    }
}

//! 玩家统计快照

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::Rarity;

/// 某一时刻的玩家统计（与账本脱离，可自由序列化）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub name: String,
    pub total_pulls: u64,
    pub inventory: BTreeMap<Rarity, Vec<String>>,
    pub stats: BTreeMap<Rarity, u64>,
    /// 各稀有度占总抽数的百分比；总抽数为 0 时全部为 0
    pub rarity_rates: BTreeMap<Rarity, f64>,
}

impl StatsSnapshot {
    /// 某稀有度的出货率（百分比）
    pub fn rate(&self, rarity: Rarity) -> f64 {
        self.rarity_rates.get(&rarity).copied().unwrap_or(0.0)
    }

    pub fn count(&self, rarity: Rarity) -> u64 {
        self.stats.get(&rarity).copied().unwrap_or(0)
    }

    /// 合并同名物品：返回 (物品名, 数量)，按首次获得顺序
    pub fn item_counts(&self, rarity: Rarity) -> Vec<(String, usize)> {
        group_items(self.inventory.get(&rarity).map(Vec::as_slice).unwrap_or(&[]))
    }
}

pub(crate) fn group_items(items: &[String]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|(name, _)| name == item) {
            Some((_, n)) => *n += 1,
            None => counts.push((item.clone(), 1)),
        }
    }
    counts
}

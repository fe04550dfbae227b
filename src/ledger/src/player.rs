//! 玩家账本：累计抽数、分稀有度背包与抽卡历史

use serde::Serialize;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

use crate::stats::group_items;
use crate::{PullRecord, Rarity, StatsSnapshot};

/// 单个玩家的抽卡账本
///
/// 背包、历史均只追加；各稀有度计数由背包长度推导，
/// 因此 `sum(count) == total_pulls == history.len()` 始终成立。
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    name: String,
    inventory: BTreeMap<Rarity, Vec<String>>,
    history: Vec<PullRecord>,
    total_pulls: u64,
}

impl Player {
    /// 创建空账本，每个稀有度都有一个空背包槽
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inventory: Rarity::iter().map(|r| (r, Vec::new())).collect(),
            history: Vec::new(),
            total_pulls: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_pulls(&self) -> u64 {
        self.total_pulls
    }

    pub fn inventory(&self) -> &BTreeMap<Rarity, Vec<String>> {
        &self.inventory
    }

    /// 某稀有度下已获得的物品（按获得顺序）
    pub fn items(&self, rarity: Rarity) -> &[String] {
        self.inventory
            .get(&rarity)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 某稀有度的获得次数
    pub fn count(&self, rarity: Rarity) -> u64 {
        self.items(rarity).len() as u64
    }

    pub fn history(&self) -> &[PullRecord] {
        &self.history
    }

    /// 记录一次抽卡结果，返回新追加的记录
    pub fn record(&mut self, rarity: Rarity, item: impl Into<String>) -> &PullRecord {
        self.total_pulls += 1;
        let record = PullRecord::new(rarity, item, self.total_pulls);

        self.inventory
            .entry(rarity)
            .or_default()
            .push(record.item.clone());
        self.history.push(record);

        &self.history[self.history.len() - 1]
    }

    /// 合并同名物品：返回 (物品名, 数量)，按首次获得顺序
    pub fn item_counts(&self, rarity: Rarity) -> Vec<(String, usize)> {
        group_items(self.items(rarity))
    }

    /// 生成统计快照
    pub fn snapshot(&self) -> StatsSnapshot {
        let stats: BTreeMap<Rarity, u64> = Rarity::iter().map(|r| (r, self.count(r))).collect();
        let rarity_rates = stats
            .iter()
            .map(|(&r, &n)| {
                let rate = if self.total_pulls > 0 {
                    n as f64 / self.total_pulls as f64 * 100.0
                } else {
                    0.0
                };
                (r, rate)
            })
            .collect();

        StatsSnapshot {
            name: self.name.clone(),
            total_pulls: self.total_pulls,
            inventory: self.inventory.clone(),
            stats,
            rarity_rates,
        }
    }
}

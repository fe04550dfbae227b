//! 保底计数与稀有度判定
//!
//! 每次抽卡先推进两个保底计数，再依次检查神话硬保底、普通硬保底；
//! 都未触发时掷一次 [0, 100) 的随机数，按软保底修正后的概率分段判定。

use ledger::Rarity;
use serde::{Deserialize, Serialize};

use crate::config::PityConfig;
use crate::rng::RollSource;
use crate::table::RarityTable;

/// 引擎全局的两个保底计数（所有玩家共享）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PityState {
    /// 距上次 SSR 或更高的抽数
    pub pull_pity: u32,
    /// 距上次 Mythic 的抽数
    pub mythic_pity: u32,
}

/// 本次稀有度是如何得出的
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PullPath {
    /// 神话硬保底
    MythicHardPity,
    /// 普通硬保底
    SsrHardPity,
    /// 随机判定（附带掷出的点数）
    Roll(f64),
}

/// 软保底修正后的实际概率（百分点）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveRates {
    pub mythic: f64,
    pub ssr: f64,
    pub sr: f64,
}

impl EffectiveRates {
    /// 按当前计数计算软保底修正后的概率
    pub fn compute(table: &RarityTable, pity: &PityState, config: &PityConfig) -> Self {
        let mythic_bonus = pity
            .mythic_pity
            .saturating_sub(config.mythic_soft_pity_start) as f64
            * config.mythic_soft_pity_step;
        let ssr_bonus = pity.pull_pity.saturating_sub(config.ssr_soft_pity_start) as f64
            * config.ssr_soft_pity_step;

        Self {
            mythic: table.weight(Rarity::Mythic) + mythic_bonus,
            ssr: table.weight(Rarity::Ssr) + ssr_bonus,
            sr: table.weight(Rarity::Sr),
        }
    }

    /// 按 Mythic、SSR、SR、R 的顺序分段，返回 `roll` 所在的档位；R 兜底
    pub fn select(&self, roll: f64) -> Rarity {
        let mut upper = 0.0;
        for (rarity, width) in [
            (Rarity::Mythic, self.mythic),
            (Rarity::Ssr, self.ssr),
            (Rarity::Sr, self.sr),
        ] {
            upper += width;
            if roll < upper {
                return rarity;
            }
        }
        Rarity::R
    }
}

impl PityState {
    /// 执行一次完整的稀有度判定，并按结果重置计数
    pub fn resolve<S>(
        &mut self,
        config: &PityConfig,
        table: &RarityTable,
        rolls: &mut S,
    ) -> (Rarity, PullPath)
    where
        S: RollSource + ?Sized,
    {
        self.pull_pity = self.pull_pity.saturating_add(1);
        self.mythic_pity = self.mythic_pity.saturating_add(1);

        if self.mythic_pity >= config.mythic_pity_limit {
            self.reset_for(Rarity::Mythic);
            return (Rarity::Mythic, PullPath::MythicHardPity);
        }
        if self.pull_pity >= config.pull_pity_limit {
            self.reset_for(Rarity::Ssr);
            return (Rarity::Ssr, PullPath::SsrHardPity);
        }

        let roll = rolls.roll_percent();
        let rarity = EffectiveRates::compute(table, self, config).select(roll);
        self.reset_for(rarity);
        (rarity, PullPath::Roll(roll))
    }

    /// Mythic 清空两个计数；SSR 只清空普通保底；SR/R 不变
    fn reset_for(&mut self, rarity: Rarity) {
        match rarity {
            Rarity::Mythic => *self = Self::default(),
            Rarity::Ssr => self.pull_pity = 0,
            Rarity::Sr | Rarity::R => {}
        }
    }
}

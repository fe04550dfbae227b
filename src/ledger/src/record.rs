//! 单次抽卡记录

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use crate::Rarity;

/// 一次抽卡的不可变结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRecord {
    pub rarity: Rarity,
    pub item: String,
    /// 记录创建时的系统时间
    pub timestamp: SystemTime,
    /// 该玩家的第几抽（从 1 开始）
    pub pull_number: u64,
}

impl PullRecord {
    pub fn new(rarity: Rarity, item: impl Into<String>, pull_number: u64) -> Self {
        Self {
            rarity,
            item: item.into(),
            timestamp: SystemTime::now(),
            pull_number,
        }
    }
}

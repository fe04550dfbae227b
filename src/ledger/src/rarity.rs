//! 稀有度定义

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// 物品稀有度（按价值排序：Mythic > SSR > SR > R）
///
/// 变体按从低到高声明，派生的 `Ord` 即为价值顺序。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum Rarity {
    #[strum(serialize = "R")]
    #[serde(rename = "R")]
    R,
    #[strum(serialize = "SR")]
    #[serde(rename = "SR")]
    Sr,
    #[strum(serialize = "SSR")]
    #[serde(rename = "SSR")]
    Ssr,
    #[strum(serialize = "Mythic")]
    #[serde(rename = "Mythic")]
    Mythic,
}

impl Rarity {
    /// 判定顺序：从最稀有到最常见
    pub const PRIORITY: [Rarity; 4] = [Rarity::Mythic, Rarity::Ssr, Rarity::Sr, Rarity::R];

    /// 是否为 SSR 或更高（会重置普通保底）
    pub fn is_ssr_or_better(self) -> bool {
        self >= Rarity::Ssr
    }
}

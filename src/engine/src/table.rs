//! 稀有度概率表与物品池

use error::GachaError;
use ledger::Rarity;
use serde::Serialize;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// 基础概率表（单位：百分点）
///
/// R 是兜底档位：判定时 R 占据剩余全部概率，其名义权重仅供展示。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RarityTable {
    mythic: f64,
    ssr: f64,
    sr: f64,
    r: f64,
}

impl Default for RarityTable {
    fn default() -> Self {
        Self {
            mythic: 0.1,
            ssr: 3.0,
            sr: 16.0,
            r: 80.9,
        }
    }
}

impl RarityTable {
    /// 创建自定义概率表，权重必须为非负有限值，且 Mythic+SSR+SR 不超过 100
    pub fn new(mythic: f64, ssr: f64, sr: f64, r: f64) -> Result<Self, GachaError> {
        let table = Self { mythic, ssr, sr, r };
        for rarity in Rarity::PRIORITY {
            let rate = table.weight(rarity);
            if !rate.is_finite() || rate < 0.0 {
                return Err(GachaError::InvalidRate {
                    rarity: rarity.to_string(),
                    rate,
                });
            }
        }

        let ranked = mythic + ssr + sr;
        if ranked > 100.0 {
            return Err(GachaError::RateOverflow(ranked));
        }
        Ok(table)
    }

    /// 某稀有度的基础权重
    pub fn weight(&self, rarity: Rarity) -> f64 {
        match rarity {
            Rarity::Mythic => self.mythic,
            Rarity::Ssr => self.ssr,
            Rarity::Sr => self.sr,
            Rarity::R => self.r,
        }
    }
}

/// 各稀有度的物品池
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemPool {
    items: BTreeMap<Rarity, Vec<String>>,
}

impl ItemPool {
    /// 创建自定义物品池，每个稀有度至少需要一件物品
    pub fn new(items: BTreeMap<Rarity, Vec<String>>) -> Result<Self, GachaError> {
        for rarity in Rarity::iter() {
            if items.get(&rarity).is_none_or(Vec::is_empty) {
                return Err(GachaError::EmptyPool(rarity.to_string()));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self, rarity: Rarity) -> &[String] {
        self.items.get(&rarity).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for ItemPool {
    fn default() -> Self {
        let catalogue: [(Rarity, &[&str]); 4] = [
            (
                Rarity::Mythic,
                &[
                    "Atiesh, Greatstaff of the Guardian",
                    "Val'anyr, Hammer of Ancient Kings",
                    "Dragonwrath, Tarecgosa's Rest",
                    "Fangs of the Father",
                    "Thunderfury, Blessed Blade of the Windseeker",
                ],
            ),
            (
                Rarity::Ssr,
                &[
                    "Frostmourne",
                    "Shadowmourne",
                    "Warglaives of Azzinoth",
                    "Thori'dal, the Stars' Fury",
                    "Invincible's Reins",
                    "Ashes of Al'ar",
                    "Time-Lost Proto-Drake",
                ],
            ),
            (
                Rarity::Sr,
                &[
                    "Sulfuras, Hand of Ragnaros",
                    "Val'anyr, Hammer of Ancient Kings",
                    "Swift Spectral Tiger",
                    "Mimiron's Head",
                    "Reins of the Blue Drake",
                    "Corrupted Ashbringer",
                    "Zin'rokh, Destroyer of Worlds",
                    "Swift Zulian Tiger",
                    "Feldrake",
                ],
            ),
            (
                Rarity::R,
                &[
                    "Swift White Ram",
                    "Azure Whelpling",
                    "Mechano-Hog",
                    "Hearthstone",
                    "Frostweave Bag",
                    "Flask of the Titans",
                    "Elixir of the Mongoose",
                    "Deviate Fish",
                    "Noggenfogger Elixir",
                ],
            ),
        ];

        let items = catalogue
            .into_iter()
            .map(|(rarity, names)| (rarity, names.iter().map(|s| s.to_string()).collect()))
            .collect();
        Self { items }
    }
}

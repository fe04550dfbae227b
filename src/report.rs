//! 终端输出格式化

use crate::{PullRecord, Rarity, StatsSnapshot};

/// 单抽结果，如 `Frostmourne (SSR)`
pub fn format_pull(record: &PullRecord) -> String {
    format!("{} ({})", record.item, record.rarity)
}

/// 批量抽卡结果，每行一抽
pub fn format_pulls(records: &[PullRecord]) -> String {
    let mut out = format!("{}x Pull Results:\n", records.len());
    for (i, record) in records.iter().enumerate() {
        out.push_str(&format!("Pull {}: {}\n", i + 1, format_pull(record)));
    }
    out
}

/// 统计报告：出货率保留两位小数，背包中重复物品合并为 `xN`
pub fn format_stats(stats: &StatsSnapshot) -> String {
    let mut out = format!(
        "Stats for {}\nTotal Pulls: {}\n\nRarity Rates:\n",
        stats.name, stats.total_pulls
    );
    for rarity in Rarity::PRIORITY {
        out.push_str(&format!("{}: {:.2}%\n", rarity, stats.rate(rarity)));
    }

    out.push_str("\nInventory:\n");
    for rarity in Rarity::PRIORITY {
        let counts = stats.item_counts(rarity);
        if counts.is_empty() {
            continue;
        }

        out.push_str(&format!("\n{}:\n", rarity));
        for (item, count) in counts {
            if count > 1 {
                out.push_str(&format!("- {} x{}\n", item, count));
            } else {
                out.push_str(&format!("- {}\n", item));
            }
        }
    }
    out
}

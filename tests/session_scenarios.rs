//! End-to-end scenarios against the public facade

use gacha_sim::{
    GachaConfig, GachaEngine, GachaError, ItemPool, PityState, Rarity, RarityTable, RollSource,
    handle_error, report::format_stats,
};
use pretty_assertions::assert_eq;

/// Never rolls into a ranked band, so only hard pity can produce SSR or Mythic
struct AlwaysCommon;

impl RollSource for AlwaysCommon {
    fn roll_percent(&mut self) -> f64 {
        99.9
    }

    fn pick_index(&mut self, _len: usize) -> usize {
        0
    }
}

#[test]
fn test_fresh_engine_guarantees_ssr_by_pull_110() {
    let mut engine = GachaEngine::with_seed(110);

    let records = engine.multi_pull("A", 110);
    let first_hit = records
        .iter()
        .position(|r| r.rarity.is_ssr_or_better())
        .expect("an SSR or better must appear within 110 pulls");

    assert!(first_hit < 110);
    assert_eq!(engine.get_player_stats("A").map(|s| s.total_pulls), Some(110));
}

#[test]
fn test_unlucky_player_hits_hard_pity_exactly() {
    let mut engine = GachaEngine::with_rolls(AlwaysCommon);

    let records = engine.multi_pull("A", 220);

    let ssr_numbers: Vec<u64> = records
        .iter()
        .filter(|r| r.rarity == Rarity::Ssr)
        .map(|r| r.pull_number)
        .collect();
    assert_eq!(ssr_numbers, vec![110, 220]);
    assert_eq!(
        engine.pity(),
        PityState {
            pull_pity: 0,
            mythic_pity: 220
        }
    );
}

#[test]
fn test_pull_5000_is_mythic() {
    let mut engine = GachaEngine::with_seed(5000);
    engine.set_pity(PityState {
        pull_pity: 0,
        mythic_pity: 4999,
    });

    let record = engine.pull_item("A");

    assert_eq!(record.rarity, Rarity::Mythic);
    assert_eq!(engine.pity(), PityState::default());
}

#[test]
fn test_multi_pull_returns_numbered_batch() {
    let mut engine = GachaEngine::with_seed(5);

    let records = engine.multi_pull("B", 5);

    assert_eq!(records.len(), 5);
    assert_eq!(
        records.iter().map(|r| r.pull_number).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5]
    );
    assert!(
        records
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp)
    );
    assert_eq!(engine.get_player_stats("B").map(|s| s.total_pulls), Some(5));
}

#[test]
fn test_mythic_for_one_player_resets_pity_for_another() {
    let mut engine = GachaEngine::with_rolls(AlwaysCommon);
    engine.multi_pull("Y", 50);
    engine.set_pity(PityState {
        pull_pity: 50,
        mythic_pity: 4999,
    });

    assert_eq!(engine.pull_item("X").rarity, Rarity::Mythic);

    // Y picks up from the counters X just cleared
    engine.pull_item("Y");
    assert_eq!(
        engine.pity(),
        PityState {
            pull_pity: 1,
            mythic_pity: 1
        }
    );
    assert_eq!(engine.player("Y").map(|p| p.total_pulls()), Some(51));
}

#[test]
fn test_stats_lookup_for_unknown_player() {
    let engine = GachaEngine::with_seed(0);

    let err = engine
        .get_player_stats("Nobody")
        .ok_or_else(|| GachaError::PlayerNotFound("Nobody".to_string()))
        .expect_err("unknown player has no stats");
    assert_eq!(handle_error(&err), "No stats found for Nobody");
}

#[test]
fn test_rates_and_report_after_session() {
    let mut engine = GachaEngine::with_seed(77);
    engine.multi_pull("Jaina", 1000);

    let stats = engine.get_player_stats("Jaina").expect("player exists");
    let rate_sum: f64 = stats.rarity_rates.values().sum();
    assert!((rate_sum - 100.0).abs() < 1e-6);

    // R dominates a thousand pulls at 80.9% base
    assert!(stats.rate(Rarity::R) > stats.rate(Rarity::Sr));
    assert!(stats.rate(Rarity::Sr) > stats.rate(Rarity::Mythic));

    let text = format_stats(&stats);
    assert!(text.starts_with("Stats for Jaina\nTotal Pulls: 1000\n"));
}

#[test]
fn test_custom_parts_feed_the_engine() {
    let mut config = GachaConfig::default();
    config.pity.pull_pity_limit = 3;
    config.max_multi_pull = 20;

    let mut engine = GachaEngine::from_parts(
        config,
        RarityTable::default(),
        ItemPool::default(),
        AlwaysCommon,
    )
    .expect("valid parts");

    let rarities: Vec<Rarity> = engine
        .multi_pull("A", 6)
        .into_iter()
        .map(|r| r.rarity)
        .collect();
    assert_eq!(
        rarities,
        vec![
            Rarity::R,
            Rarity::R,
            Rarity::Ssr,
            Rarity::R,
            Rarity::R,
            Rarity::Ssr
        ]
    );
    assert!(engine.config().validate_pull_count(21).is_err());
}

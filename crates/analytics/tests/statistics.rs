use analytics::{AnalyticsError, PeriodStatistics, StatisticsEngine};
use chrono::NaiveDate;
use core_types::Roll;
use database::MemoryRollStore;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn roll(id: i32, length: f64, weight: f64, added: NaiveDate, removed: Option<NaiveDate>) -> Roll {
    Roll {
        id,
        length,
        weight,
        date_added: added,
        date_removed: removed,
    }
}

fn january_store() -> MemoryRollStore {
    MemoryRollStore::with_rolls(vec![
        roll(1, 10.0, 2.0, day(2026, 1, 5), None),
        roll(2, 15.0, 3.0, day(2026, 1, 10), Some(day(2026, 1, 20))),
    ])
}

#[tokio::test]
async fn january_window_matches_hand_computed_figures() {
    let store = january_store();
    let stats = StatisticsEngine::new()
        .compute(&store, day(2026, 1, 1), day(2026, 1, 31))
        .await
        .unwrap();

    assert_eq!(stats.added_count, 2);
    assert_eq!(stats.removed_count, 1);
    assert_eq!(stats.avg_length, 12.5);
    assert_eq!(stats.avg_weight, 2.5);
    assert_eq!(stats.max_length, 15.0);
    assert_eq!(stats.min_length, 10.0);
    assert_eq!(stats.max_weight, 3.0);
    assert_eq!(stats.min_weight, 2.0);
    assert_eq!(stats.total_weight, 5.0);
    assert_eq!(stats.max_interval_days, 10);
    assert_eq!(stats.min_interval_days, 10);

    // Jan 1-4 are empty; Jan 10-19 hold both rolls.
    assert_eq!(stats.day_with_min_count, Some(day(2026, 1, 1)));
    assert_eq!(stats.day_with_max_count, Some(day(2026, 1, 10)));
    assert_eq!(stats.day_with_min_weight, Some(day(2026, 1, 1)));
    assert_eq!(stats.day_with_max_weight, Some(day(2026, 1, 10)));
}

#[tokio::test]
async fn empty_window_reports_sentinels() {
    let store = january_store();
    let stats = StatisticsEngine::new()
        .compute(&store, day(2025, 6, 1), day(2025, 6, 30))
        .await
        .unwrap();

    assert_eq!(stats, PeriodStatistics::new());
    assert_eq!(stats.min_interval_days, -1);
    assert_eq!(stats.max_interval_days, 0);
    assert_eq!(stats.day_with_max_count, None);
}

#[tokio::test]
async fn active_rolls_without_removals_keep_interval_sentinel() {
    let store = MemoryRollStore::with_rolls(vec![roll(1, 4.0, 1.0, day(2026, 3, 1), None)]);
    let stats = StatisticsEngine::new()
        .compute(&store, day(2026, 3, 1), day(2026, 3, 3))
        .await
        .unwrap();

    assert_eq!(stats.max_interval_days, 0);
    assert_eq!(stats.min_interval_days, -1);
    assert_eq!(stats.avg_length, 4.0);
    assert_eq!(stats.day_with_min_count, Some(day(2026, 3, 1)));
}

#[tokio::test]
async fn ties_resolve_to_the_earliest_day() {
    let store = MemoryRollStore::with_rolls(vec![roll(1, 4.0, 1.0, day(2025, 12, 1), None)]);
    let stats = StatisticsEngine::new()
        .compute(&store, day(2026, 1, 1), day(2026, 1, 7))
        .await
        .unwrap();

    let first = Some(day(2026, 1, 1));
    assert_eq!(stats.day_with_min_count, first);
    assert_eq!(stats.day_with_max_count, first);
    assert_eq!(stats.day_with_min_weight, first);
    assert_eq!(stats.day_with_max_weight, first);
}

#[tokio::test]
async fn reversed_window_is_rejected() {
    let store = january_store();
    let err = StatisticsEngine::new()
        .compute(&store, day(2026, 2, 1), day(2026, 1, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, AnalyticsError::InvalidRange { .. }));
}

#[test]
fn removal_takes_effect_on_the_removal_day() {
    let removed_on = day(2026, 1, 20);
    let active = vec![roll(1, 1.0, 4.0, day(2026, 1, 10), Some(removed_on))];
    let occupancy: Vec<_> = StatisticsEngine::new()
        .occupancy(day(2026, 1, 18), day(2026, 1, 21), &active)
        .collect();

    let counts: Vec<_> = occupancy.iter().map(|d| (d.date, d.count)).collect();
    assert_eq!(
        counts,
        vec![
            (day(2026, 1, 18), 1),
            (day(2026, 1, 19), 1),
            (removed_on, 0),
            (day(2026, 1, 21), 0),
        ]
    );
    assert_eq!(occupancy[1].weight, 4.0);
    assert_eq!(occupancy[2].weight, 0.0);
}

#[test]
fn single_day_window_has_one_occupancy_entry() {
    let active = vec![roll(1, 1.0, 1.0, day(2026, 1, 10), None)];
    let occupancy: Vec<_> = StatisticsEngine::new()
        .occupancy(day(2026, 1, 10), day(2026, 1, 10), &active)
        .collect();
    assert_eq!(occupancy.len(), 1);
    assert_eq!(occupancy[0].count, 1);
}

#[test]
fn weight_and_count_extremes_fall_on_different_days() {
    // One heavy roll leaves as two light ones arrive.
    let active = vec![
        roll(1, 5.0, 10.0, day(2026, 1, 1), Some(day(2026, 1, 3))),
        roll(2, 5.0, 1.0, day(2026, 1, 3), None),
        roll(3, 5.0, 1.0, day(2026, 1, 3), Some(day(2026, 1, 5))),
    ];
    let stats = StatisticsEngine::new().summarize(day(2026, 1, 1), day(2026, 1, 5), 3, 2, &active);

    // Per day (count, weight): 1/1 (1, 10), 1/2 (1, 10), 1/3 (2, 2), 1/4 (2, 2), 1/5 (1, 1).
    assert_eq!(stats.day_with_max_weight, Some(day(2026, 1, 1)));
    assert_eq!(stats.day_with_max_count, Some(day(2026, 1, 3)));
    assert_eq!(stats.day_with_min_weight, Some(day(2026, 1, 5)));
    assert_eq!(stats.day_with_min_count, Some(day(2026, 1, 1)));
}

#[test]
fn report_serializes_with_wire_names() {
    let json = serde_json::to_value(PeriodStatistics::new()).unwrap();
    assert_eq!(json["minIntervalDays"], -1);
    assert!(json["dayWithMaxWeight"].is_null());
}

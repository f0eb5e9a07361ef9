//! Unit tests for the category ranker.

use rstest::{fixture, rstest};

use lunchlist_core::{
    Category, InteractionRecord, MS_PER_DAY, NEVER_DISLIKED, Ranker, Venue,
    test_support::MemoryHistory,
};

use crate::{CategoryRanker, RankerSettings};

const NOW: i64 = 1_700_000_000_000;

fn venue(id: &str) -> Venue {
    match Venue::new(id, format!("Venue {id}")) {
        Ok(v) => v,
        Err(err) => panic!("venue fixture: {err}"),
    }
}

fn record(id: &str) -> InteractionRecord {
    match InteractionRecord::new(id) {
        Ok(r) => r,
        Err(err) => panic!("record fixture: {err}"),
    }
}

fn ids(venues: &[Venue]) -> Vec<&str> {
    venues.iter().map(|v| v.id.as_str()).collect()
}

#[fixture]
fn ranker() -> CategoryRanker {
    CategoryRanker::new(RankerSettings::default())
}

#[rstest]
fn empty_inputs_produce_empty_output(ranker: CategoryRanker) {
    assert!(ranker.rank(Vec::new(), &[], NOW).is_empty());
}

#[rstest]
fn no_history_preserves_order_and_defaults(ranker: CategoryRanker) {
    let venues = vec![venue("a"), venue("b"), venue("c")];
    let ranked = ranker.rank(venues, &[], NOW);
    assert_eq!(ids(&ranked), ["a", "b", "c"]);
    assert!(ranked.iter().all(|v| v.history.is_none()));
}

#[rstest]
fn scenario_table_orders_buckets() {
    // a: liked, no snooze -> preferred.
    // b: disliked yesterday, 30 day expiry -> don't like.
    // c: snoozed just now -> too soon.
    // d: no record -> neutral.
    let history = vec![
        record("a").with_liked(),
        record("b").with_dont_like(NOW - MS_PER_DAY),
        record("c").with_too_soon(NOW),
    ];
    let venues = vec![venue("a"), venue("b"), venue("c"), venue("d")];
    let ranker = CategoryRanker::new(RankerSettings::new().with_dont_like_expiry_days(30));
    let ranked = ranker.rank(venues, &history, NOW);
    assert_eq!(ids(&ranked), ["a", "c", "d", "b"]);
}

#[rstest]
#[case(30 * MS_PER_DAY - MS_PER_DAY, Category::DontLike)] // age 29 days
#[case(30 * MS_PER_DAY, Category::Neutral)] // age exactly at threshold
#[case(45 * MS_PER_DAY, Category::Neutral)]
fn dislike_expiry_boundary(#[case] age_ms: i64, #[case] expected: Category) {
    let ranker = CategoryRanker::new(RankerSettings::new().with_dont_like_expiry_days(30));
    let r = record("b").with_dont_like(NOW - age_ms);
    assert_eq!(ranker.categorise(&r, NOW), expected);
}

#[rstest]
fn liked_but_snoozed_files_under_too_soon(ranker: CategoryRanker) {
    let r = record("a").with_liked().with_too_soon(NOW - MS_PER_DAY);
    assert_eq!(ranker.categorise(&r, NOW), Category::TooSoon);
}

#[rstest]
fn liked_with_lapsed_snooze_is_preferred(ranker: CategoryRanker) {
    let r = record("a").with_liked().with_too_soon(NOW - 10 * MS_PER_DAY);
    assert_eq!(ranker.categorise(&r, NOW), Category::Preferred);
}

#[rstest]
fn active_dislike_outranks_active_snooze(ranker: CategoryRanker) {
    // Both rules fire; precedence files the venue under don't-like so it
    // cannot appear twice.
    let r = record("a").with_dont_like(NOW - MS_PER_DAY).with_too_soon(NOW);
    assert_eq!(ranker.categorise(&r, NOW), Category::DontLike);
}

#[rstest]
fn expired_dislike_with_active_snooze_is_too_soon(ranker: CategoryRanker) {
    let r = record("a")
        .with_dont_like(NOW - 90 * MS_PER_DAY)
        .with_too_soon(NOW);
    assert_eq!(ranker.categorise(&r, NOW), Category::TooSoon);
}

#[rstest]
fn fresh_record_is_neutral(ranker: CategoryRanker) {
    assert_eq!(ranker.categorise(&record("a"), NOW), Category::Neutral);
}

#[rstest]
fn first_record_wins_on_duplicate_ids(ranker: CategoryRanker) {
    let history = vec![record("a").with_liked(), record("a").with_dont_like(NOW)];
    let ranked = ranker.rank(vec![venue("a")], &history, NOW);
    let snapshot = ranked
        .first()
        .and_then(|v| v.history)
        .map(|s| s.dont_like_click_date);
    assert_eq!(snapshot, Some(NEVER_DISLIKED));
}

#[rstest]
fn enrichment_happens_on_every_match(ranker: CategoryRanker) {
    let history = vec![record("b").with_dont_like(NOW - MS_PER_DAY).with_dismissal(7, 3)];
    let ranked = ranker.rank(vec![venue("b")], &history, NOW);
    let snapshot = ranked.first().and_then(|v| v.history);
    assert_eq!(snapshot.map(|s| s.dismissed_count), Some(3));
    assert_eq!(
        snapshot.map(|s| s.dont_like_click_date),
        Some(NOW - MS_PER_DAY)
    );
}

#[rstest]
fn unmatched_venue_keeps_empty_history(ranker: CategoryRanker) {
    let history = vec![record("other").with_liked()];
    let ranked = ranker.rank(vec![venue("a")], &history, NOW);
    assert_eq!(ranked.first().and_then(|v| v.history), None);
}

#[rstest]
fn cap_truncates_only_the_neutral_tail() {
    let ranker = CategoryRanker::new(RankerSettings::new().with_display_cap(1));
    let history = vec![
        record("liked").with_liked(),
        record("disliked").with_dont_like(NOW),
        record("snoozed").with_too_soon(NOW),
    ];
    let venues = vec![
        venue("n1"),
        venue("liked"),
        venue("n2"),
        venue("disliked"),
        venue("snoozed"),
    ];
    let ranked = ranker.rank(venues, &history, NOW);
    // Preferred, too-soon, and don't-like survive; only one neutral remains.
    assert_eq!(ids(&ranked), ["liked", "snoozed", "n1", "disliked"]);
}

#[rstest]
fn neutral_overflow_keeps_the_first_hundred(ranker: CategoryRanker) {
    let venues: Vec<Venue> = (0..150).map(|i| venue(&format!("v{i:03}"))).collect();
    let expected: Vec<String> = (0..100).map(|i| format!("v{i:03}")).collect();
    let ranked = ranker.rank(venues, &[], NOW);
    assert_eq!(ranked.len(), 100);
    let got: Vec<&str> = ids(&ranked);
    assert_eq!(got, expected);
}

#[rstest]
fn zero_cap_drops_every_neutral_venue() {
    let ranker = CategoryRanker::new(RankerSettings::new().with_display_cap(0));
    let history = vec![record("liked").with_liked()];
    let ranked = ranker.rank(vec![venue("a"), venue("liked")], &history, NOW);
    assert_eq!(ids(&ranked), ["liked"]);
}

#[rstest]
fn zero_windows_disable_both_rules() {
    let settings = RankerSettings::new()
        .with_dont_like_expiry_days(0)
        .with_too_soon_window_days(0);
    let zero_window = CategoryRanker::new(settings);
    let r = record("a").with_dont_like(NOW).with_too_soon(NOW);
    assert_eq!(zero_window.categorise(&r, NOW), Category::Neutral);
}

#[rstest]
fn rank_from_store_matches_slice_ranking(ranker: CategoryRanker) {
    let history = vec![record("a").with_liked(), record("c").with_too_soon(NOW)];
    let store = MemoryHistory::with_records(history.clone());
    let venues = vec![venue("b"), venue("a"), venue("c")];
    let from_store = ranker.rank_from_store(venues.clone(), &store, NOW);
    let from_slice = ranker.rank(venues, &history, NOW);
    assert_eq!(from_store, from_slice);
    assert_eq!(ids(&from_store), ["a", "c", "b"]);
}

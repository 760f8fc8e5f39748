use chrono::NaiveDate;
use score_dashboard_wasm::application::{FeedStatus, FeedUpdate, ScoreFeed};
use score_dashboard_wasm::domain::errors::FetchError;
use score_dashboard_wasm::domain::scores::{RecordSet, ScoreRecord};

fn records(scores: &[i64]) -> RecordSet {
    let base = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    scores
        .iter()
        .enumerate()
        .map(|(i, &score)| ScoreRecord::new(i as i64, base + chrono::TimeDelta::minutes(i as i64), score))
        .collect()
}

fn transport() -> FetchError {
    FetchError::Transport("connection refused".to_string())
}

#[test]
fn starts_loading() {
    let feed = ScoreFeed::new();
    assert_eq!(feed.status(), FeedStatus::Loading);
    assert!(!feed.has_loaded());
    assert!(!feed.in_flight());
}

#[test]
fn first_load_failure_shows_error_without_data() {
    let mut feed = ScoreFeed::new();
    let ticket = feed.begin_request();
    assert!(feed.in_flight());

    assert_eq!(feed.apply(ticket, Err(transport())), FeedUpdate::Failed(transport()));
    assert_eq!(feed.status(), FeedStatus::Failed);
    assert!(feed.records().is_none());
}

#[test]
fn later_failure_keeps_previous_records() {
    let mut feed = ScoreFeed::new();
    let first = feed.begin_request();
    feed.apply(first, Ok(records(&[1, -2])));

    let second = feed.begin_request();
    let status_error = FetchError::UnexpectedStatus("ERROR".to_string());
    feed.apply(second, Err(status_error.clone()));

    assert_eq!(feed.status(), FeedStatus::ReadyWithError);
    assert_eq!(feed.records(), Some(&records(&[1, -2])));
    assert_eq!(feed.error(), Some(&status_error));
}

#[test]
fn success_clears_the_error_and_replaces_records() {
    let mut feed = ScoreFeed::new();
    let failed = feed.begin_request();
    feed.apply(failed, Err(transport()));

    let ok = feed.begin_request();
    assert_eq!(feed.apply(ok, Ok(records(&[5, 6, 7]))), FeedUpdate::Replaced(3));
    assert_eq!(feed.status(), FeedStatus::Ready);
    assert!(feed.error().is_none());
    assert_eq!(feed.records().map(RecordSet::len), Some(3));
}

#[test]
fn out_of_order_response_is_dropped() {
    let mut feed = ScoreFeed::new();
    let older = feed.begin_request();
    let newer = feed.begin_request();

    assert_eq!(feed.apply(newer, Ok(records(&[1, 2]))), FeedUpdate::Replaced(2));
    assert_eq!(feed.apply(older, Ok(records(&[9]))), FeedUpdate::Stale);
    assert_eq!(feed.records(), Some(&records(&[1, 2])));
    assert!(!feed.in_flight());
}

#[test]
fn stale_failure_does_not_set_error() {
    let mut feed = ScoreFeed::new();
    let older = feed.begin_request();
    let newer = feed.begin_request();

    feed.apply(newer, Ok(records(&[1])));
    assert_eq!(feed.apply(older, Err(transport())), FeedUpdate::Stale);
    assert_eq!(feed.status(), FeedStatus::Ready);
}

#[test]
fn tickets_increase() {
    let mut feed = ScoreFeed::new();
    let a = feed.begin_request();
    let b = feed.begin_request();
    assert!(b > a);
    assert_eq!(b.sequence(), a.sequence() + 1);
}

#[test]
fn abandoned_ticket_is_not_in_flight() {
    let mut feed = ScoreFeed::new();
    let ticket = feed.begin_request();
    assert!(feed.in_flight());

    feed.abandon(ticket);
    assert!(!feed.in_flight());
    assert_eq!(feed.status(), FeedStatus::Loading);
}

#[test]
fn abandoning_one_of_two_keeps_the_other_outstanding() {
    let mut feed = ScoreFeed::new();
    let cancelled = feed.begin_request();
    let live = feed.begin_request();

    feed.abandon(cancelled);
    assert!(feed.in_flight());
    assert_eq!(feed.apply(live, Ok(records(&[4]))), FeedUpdate::Replaced(1));
    assert!(!feed.in_flight());
}

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use quickcheck_macros::quickcheck;
use score_dashboard_wasm::domain::scores::{
    DateTimeRange, HourOfDay, RecordSet, ScoreRecord, aggregate_all, recompute, split_series,
};

fn timestamp(seconds: u32) -> NaiveDateTime {
    // Spread over roughly a month starting 2024-05-01.
    DateTime::from_timestamp(1_714_521_600 + i64::from(seconds % 2_678_400), 0)
        .unwrap()
        .naive_utc()
}

fn record_set(raw: &[(u32, i32)]) -> RecordSet {
    raw.iter()
        .enumerate()
        .map(|(i, &(secs, score))| ScoreRecord::new(i as i64, timestamp(secs), i64::from(score)))
        .collect()
}

fn day(offset: u8) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap() + chrono::Days::new(u64::from(offset % 31))
}

#[quickcheck]
fn record_set_is_sorted(raw: Vec<(u32, i32)>) -> bool {
    let records = record_set(&raw);
    records.records().windows(2).all(|pair| pair[0].created_at <= pair[1].created_at)
}

#[quickcheck]
fn series_lengths_match_record_count(raw: Vec<(u32, i32)>) -> bool {
    let records = record_set(&raw);
    let series = split_series(&records);
    series.len() == records.len() && series.fun.len() == records.len() && series.tired.len() == records.len()
}

#[quickcheck]
fn series_slots_are_exclusive(raw: Vec<(u32, i32)>) -> bool {
    let series = split_series(&record_set(&raw));
    series.fun.iter().zip(&series.tired).all(|(fun, tired)| !(fun.is_some() && tired.is_some()))
}

#[quickcheck]
fn series_sums_match_totals(raw: Vec<(u32, i32)>) -> bool {
    let records = record_set(&raw);
    let series = split_series(&records);
    let totals = aggregate_all(&records);
    series.fun.iter().flatten().sum::<u64>() == totals.fun
        && series.tired.iter().flatten().sum::<u64>() == totals.tired
}

#[quickcheck]
fn range_totals_never_exceed_all(raw: Vec<(u32, i32)>, start: u8, span: u8, hours: (u8, u8)) -> bool {
    let records = record_set(&raw);
    let start_date = day(start);
    let range = DateTimeRange::new(
        start_date,
        start_date + chrono::Days::new(u64::from(span % 10)),
        HourOfDay::new(hours.0 % 24).unwrap(),
        HourOfDay::new(hours.1 % 24).unwrap(),
    );
    let ranged = recompute(&records, &range);
    let all = aggregate_all(&records);
    ranged.fun <= all.fun && ranged.tired <= all.tired
}

#[quickcheck]
fn full_month_range_covers_everything(raw: Vec<(u32, i32)>) -> bool {
    let records = record_set(&raw);
    let range = DateTimeRange::new(
        NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
        HourOfDay::FIRST,
        HourOfDay::LAST,
    );
    recompute(&records, &range) == aggregate_all(&records)
}

#[quickcheck]
fn unfiltered_totals_sum_magnitudes(raw: Vec<(u32, i32)>) -> bool {
    let records = record_set(&raw);
    let totals = aggregate_all(&records);
    let magnitude: u64 = raw.iter().map(|&(_, score)| u64::from(score.unsigned_abs())).sum();
    totals.total() == magnitude
}

#[quickcheck]
fn inverted_range_is_always_empty(raw: Vec<(u32, i32)>, start: u8) -> bool {
    let records = record_set(&raw);
    let later = day(start) + chrono::Days::new(1);
    let range = DateTimeRange::new(later, day(start), HourOfDay::FIRST, HourOfDay::LAST);
    recompute(&records, &range).is_empty()
}

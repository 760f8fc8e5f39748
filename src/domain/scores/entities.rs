use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain entity - one timestamped score event from the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: i64,
    /// Offset-less timestamp as sent by the API, interpreted as UTC.
    pub created_at: NaiveDateTime,
    pub score: i64,
}

impl ScoreRecord {
    pub fn new(id: i64, created_at: NaiveDateTime, score: i64) -> Self {
        Self { id, created_at, score }
    }

    pub fn is_fun(&self) -> bool {
        self.score > 0
    }

    pub fn is_tired(&self) -> bool {
        self.score < 0
    }
}

/// Domain entity - the full record collection of one fetch, ascending by
/// `created_at`. Order among equal timestamps is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<ScoreRecord>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from API order; sorts ascending by `created_at`.
    pub fn from_unsorted(mut records: Vec<ScoreRecord>) -> Self {
        records.sort_by_key(|record| record.created_at);
        Self { records }
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoreRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Up to `count` most recent records, newest first.
    pub fn latest(&self, count: usize) -> Vec<ScoreRecord> {
        self.records.iter().rev().take(count).copied().collect()
    }

    pub fn first_timestamp(&self) -> Option<NaiveDateTime> {
        self.records.first().map(|record| record.created_at)
    }

    pub fn last_timestamp(&self) -> Option<NaiveDateTime> {
        self.records.last().map(|record| record.created_at)
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a ScoreRecord;
    type IntoIter = std::slice::Iter<'a, ScoreRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<ScoreRecord> for RecordSet {
    fn from_iter<I: IntoIterator<Item = ScoreRecord>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn sorts_ascending_on_construction() {
        let set = RecordSet::from_unsorted(vec![
            ScoreRecord::new(3, at(12, 0), 1),
            ScoreRecord::new(1, at(9, 30), 2),
            ScoreRecord::new(2, at(10, 15), -3),
        ]);
        let ids: Vec<i64> = set.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(set.first_timestamp(), Some(at(9, 30)));
        assert_eq!(set.last_timestamp(), Some(at(12, 0)));
    }

    #[test]
    fn latest_is_newest_first_and_bounded() {
        let set: RecordSet = (0..8).map(|i| ScoreRecord::new(i, at(8 + i as u32, 0), 1)).collect();
        let ids: Vec<i64> = set.latest(5).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![7, 6, 5, 4, 3]);
        assert_eq!(RecordSet::new().latest(5), Vec::new());
    }
}

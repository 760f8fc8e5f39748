use crate::domain::scores::{AggregateTotals, DateTimeRange, RecordSet, ScoreRecord};
use chrono::NaiveDateTime;

/// Two gap-preserving lines aligned on the record timestamps.
///
/// `None` is a gap: the chart must skip it, not draw a zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreSeries {
    pub timestamps: Vec<NaiveDateTime>,
    pub fun: Vec<Option<u64>>,
    pub tired: Vec<Option<u64>>,
}

impl ScoreSeries {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

/// Positive scores go to `fun`, negative magnitudes to `tired`; zero lands
/// in neither. This differs from [`recompute`] on purpose.
pub fn split_series(records: &RecordSet) -> ScoreSeries {
    let mut series = ScoreSeries {
        timestamps: Vec::with_capacity(records.len()),
        fun: Vec::with_capacity(records.len()),
        tired: Vec::with_capacity(records.len()),
    };

    for record in records {
        series.timestamps.push(record.created_at);
        series.fun.push(record.is_fun().then(|| record.score.unsigned_abs()));
        series.tired.push(record.is_tired().then(|| record.score.unsigned_abs()));
    }

    series
}

/// Range aggregation: totals of every record inside `range`.
///
/// Zero scores count toward `fun`. Always recomputed from scratch.
pub fn recompute(records: &RecordSet, range: &DateTimeRange) -> AggregateTotals {
    if range.is_inverted() {
        return AggregateTotals::default();
    }
    accumulate(records.iter().filter(|record| range.contains(record.created_at)))
}

/// Totals over every record, no range filter.
pub fn aggregate_all(records: &RecordSet) -> AggregateTotals {
    accumulate(records.iter())
}

fn accumulate<'a>(records: impl Iterator<Item = &'a ScoreRecord>) -> AggregateTotals {
    records.fold(AggregateTotals::default(), |mut totals, record| {
        if record.score >= 0 {
            totals.fun = totals.fun.saturating_add(record.score.unsigned_abs());
        } else {
            totals.tired = totals.tired.saturating_add(record.score.unsigned_abs());
        }
        totals
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn extreme_negative_score_does_not_overflow() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let records = RecordSet::from_unsorted(vec![ScoreRecord::new(1, at, i64::MIN)]);
        assert_eq!(aggregate_all(&records).tired, 1u64 << 63);
        assert_eq!(split_series(&records).tired, vec![Some(1u64 << 63)]);
    }
}

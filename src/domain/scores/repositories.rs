use crate::domain::errors::FetchResult;
use crate::domain::scores::RecordSet;
use futures::future::LocalBoxFuture;

/// Source of the full score record set.
///
/// One call is one request: no parameters, no paging. Implementations must
/// not touch shared state; the caller decides what to do with the result.
pub trait ScoreRepository {
    fn fetch_records(&self) -> LocalBoxFuture<'_, FetchResult<RecordSet>>;
}

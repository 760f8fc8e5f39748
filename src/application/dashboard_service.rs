use crate::application::feed::{FeedStore, FeedUpdate, RequestTicket};
use crate::domain::{
    errors::FetchResult,
    logging::LogComponent,
    scores::{RecordSet, ScoreRepository},
};

/// Runs fetch cycles against a repository and commits them into a feed store.
pub struct ScoreDashboardService<R: ScoreRepository> {
    repository: R,
}

impl<R: ScoreRepository> ScoreDashboardService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// One cycle: take a ticket, fetch, commit.
    ///
    /// Returns `None` when the store went away before or during the fetch.
    /// Dropping the future mid-fetch abandons its ticket.
    pub async fn refresh<S: FeedStore>(&self, store: &S) -> Option<FeedUpdate> {
        let ticket = store.begin()?;
        let pending = PendingTicket { store, ticket: Some(ticket) };
        let result = self.repository.fetch_records().await;
        let update = pending.commit(result)?;

        match &update {
            FeedUpdate::Replaced(count) => {
                crate::log_debug!(
                    LogComponent::Application("Dashboard"),
                    "🔄 Request #{} replaced records ({} total)",
                    ticket.sequence(),
                    count
                );
            }
            FeedUpdate::Failed(error) => {
                crate::log_warn!(
                    LogComponent::Application("Dashboard"),
                    "⚠️ Request #{} failed: {}",
                    ticket.sequence(),
                    error
                );
            }
            FeedUpdate::Stale => {
                crate::log_debug!(
                    LogComponent::Application("Dashboard"),
                    "Dropped stale response #{}",
                    ticket.sequence()
                );
            }
        }

        Some(update)
    }
}

/// Issued ticket that is handed back to the store if never committed.
struct PendingTicket<'a, S: FeedStore> {
    store: &'a S,
    ticket: Option<RequestTicket>,
}

impl<S: FeedStore> PendingTicket<'_, S> {
    fn commit(mut self, result: FetchResult<RecordSet>) -> Option<FeedUpdate> {
        let ticket = self.ticket.take()?;
        self.store.commit(ticket, result)
    }
}

impl<S: FeedStore> Drop for PendingTicket<'_, S> {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            self.store.abandon(ticket);
        }
    }
}

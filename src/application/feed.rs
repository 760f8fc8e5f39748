use crate::domain::{
    errors::{FetchError, FetchResult},
    scores::RecordSet,
};
use leptos::{RwSignal, SignalUpdate, SignalUpdateUntracked};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

/// Sequence number handed out when a fetch starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// What committing a fetch result did to the feed.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedUpdate {
    /// Records replaced wholesale; carries the new record count.
    Replaced(usize),
    /// Error recorded; previously loaded records, if any, are kept.
    Failed(FetchError),
    /// A newer request already landed; this result was dropped.
    Stale,
}

/// What the view should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    /// Nothing loaded yet and no error: first paint.
    Loading,
    /// The first load failed: error, no data.
    Failed,
    Ready,
    /// Data from an earlier fetch plus the latest error.
    ReadyWithError,
}

/// The shared record set plus fetch bookkeeping.
///
/// Results are applied last-issued-wins: a response whose ticket is not
/// newer than the last applied one is discarded. Every issued ticket is
/// outstanding until it is applied or abandoned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreFeed {
    records: Option<RecordSet>,
    error: Option<FetchError>,
    issued: u64,
    applied: u64,
    outstanding: BTreeSet<u64>,
}

impl ScoreFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_request(&mut self) -> RequestTicket {
        self.issued += 1;
        self.outstanding.insert(self.issued);
        RequestTicket(self.issued)
    }

    pub fn apply(&mut self, ticket: RequestTicket, result: FetchResult<RecordSet>) -> FeedUpdate {
        self.outstanding.remove(&ticket.0);
        if ticket.0 <= self.applied {
            return FeedUpdate::Stale;
        }
        self.applied = ticket.0;

        match result {
            Ok(records) => {
                let count = records.len();
                self.records = Some(records);
                self.error = None;
                FeedUpdate::Replaced(count)
            }
            Err(error) => {
                self.error = Some(error.clone());
                FeedUpdate::Failed(error)
            }
        }
    }

    /// The request behind `ticket` was cancelled and will never be applied.
    pub fn abandon(&mut self, ticket: RequestTicket) {
        self.outstanding.remove(&ticket.0);
    }

    /// Last successfully loaded records; `None` before the first success.
    pub fn records(&self) -> Option<&RecordSet> {
        self.records.as_ref()
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn has_loaded(&self) -> bool {
        self.records.is_some()
    }

    pub fn status(&self) -> FeedStatus {
        match (&self.records, &self.error) {
            (None, None) => FeedStatus::Loading,
            (None, Some(_)) => FeedStatus::Failed,
            (Some(_), None) => FeedStatus::Ready,
            (Some(_), Some(_)) => FeedStatus::ReadyWithError,
        }
    }

    pub fn in_flight(&self) -> bool {
        !self.outstanding.is_empty()
    }
}

/// Holder of a `ScoreFeed` that fetch cycles write into.
///
/// Returning `None` means the store is gone (the view was torn down) and
/// the cycle should stop.
pub trait FeedStore {
    fn begin(&self) -> Option<RequestTicket>;
    fn commit(&self, ticket: RequestTicket, result: FetchResult<RecordSet>) -> Option<FeedUpdate>;
    fn abandon(&self, ticket: RequestTicket);
}

impl FeedStore for RwSignal<ScoreFeed> {
    // the counter alone is not worth re-rendering for
    fn begin(&self) -> Option<RequestTicket> {
        self.try_update_untracked(|feed| feed.begin_request())
    }

    fn commit(&self, ticket: RequestTicket, result: FetchResult<RecordSet>) -> Option<FeedUpdate> {
        self.try_update(|feed| feed.apply(ticket, result))
    }

    fn abandon(&self, ticket: RequestTicket) {
        self.try_update_untracked(|feed| feed.abandon(ticket));
    }
}

impl FeedStore for Rc<RefCell<ScoreFeed>> {
    fn begin(&self) -> Option<RequestTicket> {
        Some(self.borrow_mut().begin_request())
    }

    fn commit(&self, ticket: RequestTicket, result: FetchResult<RecordSet>) -> Option<FeedUpdate> {
        Some(self.borrow_mut().apply(ticket, result))
    }

    fn abandon(&self, ticket: RequestTicket) {
        self.borrow_mut().abandon(ticket);
    }
}

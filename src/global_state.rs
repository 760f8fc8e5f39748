use crate::application::ScoreFeed;
use crate::view_state::DashboardView;
use leptos::*;
use once_cell::sync::OnceCell;

/// Page-wide signals shared by both views.
pub struct Globals {
    /// Last known-good record set and fetch state; survives view switches.
    pub score_feed: RwSignal<ScoreFeed>,
    pub active_view: RwSignal<DashboardView>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        score_feed: create_rw_signal(ScoreFeed::new()),
        active_view: create_rw_signal(DashboardView::default()),
    })
}

crate::global_signals! {
    pub score_feed => score_feed: ScoreFeed,
    pub active_view => active_view: DashboardView,
}

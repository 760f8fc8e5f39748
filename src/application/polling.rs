use crate::domain::logging::{LogComponent, get_logger};
use futures::future::{AbortHandle, Abortable};
use gloo_timers::future::sleep;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

/// Repeating `tick(); sleep(period)` loop running on the browser event loop.
///
/// Cancelling (explicitly or by dropping the task) aborts the loop and any
/// tick still in progress. The delay is measured from the end of a tick, so
/// one task never runs two ticks at once.
pub struct PollingTask {
    handle: AbortHandle,
    ticks: Rc<Cell<u64>>,
}

impl PollingTask {
    pub fn start<F, Fut>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let (handle, registration) = AbortHandle::new_pair();
        let ticks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&ticks);

        let running = async move {
            loop {
                tick().await;
                counter.set(counter.get() + 1);
                sleep(period).await;
            }
        };

        wasm_bindgen_futures::spawn_local(async move {
            if Abortable::new(running, registration).await.is_err() {
                get_logger().debug(LogComponent::Application("Polling"), "⏹️ Polling loop aborted");
            }
        });

        get_logger().debug(
            LogComponent::Application("Polling"),
            &format!("⏱️ Polling every {}s", period.as_secs()),
        );

        Self { handle, ticks }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Completed ticks so far.
    pub fn tick_count(&self) -> u64 {
        self.ticks.get()
    }
}

impl Drop for PollingTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

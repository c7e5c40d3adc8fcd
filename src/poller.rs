//! Background polling of the stats endpoint.
//!
//! The chat header shows aggregate usage counters that refresh on a fixed
//! interval for as long as the view is alive. [`StatsPoller`] owns the
//! timer: it fetches once immediately, then on every tick, and stops
//! cleanly when shut down so no timer outlives its owner.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::observability::{STATS_POLL_ERRORS, STATS_POLLS};
use crate::transport::Transport;
use crate::types::StatsSnapshot;

/// Default refresh interval for the stats header.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Periodically fetches the stats snapshot from the backend.
///
/// The latest snapshot lives behind a shared cell so a late in-flight
/// fetch can only ever write there, never into torn-down state. A failed
/// fetch is counted and the previous snapshot retained; before the first
/// success the cell holds the documented offline default.
pub struct StatsPoller {
    snapshot: Arc<Mutex<StatsSnapshot>>,
    shutdown: watch::Sender<bool>,
    handle: Option<JoinHandle<()>>,
}

impl StatsPoller {
    /// Spawns the polling task: one fetch immediately, then one per
    /// `interval` until shut down.
    pub fn spawn<T: Transport + 'static>(transport: Arc<T>, interval: Duration) -> Self {
        let snapshot = Arc::new(Mutex::new(StatsSnapshot::default()));
        let (shutdown, mut shutdown_rx) = watch::channel(false);

        let cell = Arc::clone(&snapshot);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        Self::poll_once(&*transport, &cell).await;
                    }
                    _ = shutdown_rx.changed() => {
                        if *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }
        });

        Self {
            snapshot,
            shutdown,
            handle: Some(handle),
        }
    }

    /// Spawns the polling task with the default 30-second interval.
    pub fn spawn_default<T: Transport + 'static>(transport: Arc<T>) -> Self {
        Self::spawn(transport, DEFAULT_POLL_INTERVAL)
    }

    async fn poll_once<T: Transport>(transport: &T, cell: &Mutex<StatsSnapshot>) {
        STATS_POLLS.click();
        match transport.stats().await {
            Ok(snapshot) => {
                *cell.lock().unwrap() = snapshot;
            }
            Err(_) => {
                STATS_POLL_ERRORS.click();
            }
        }
    }

    /// The most recent snapshot, or the offline default before the first
    /// successful fetch.
    pub fn latest(&self) -> StatsSnapshot {
        self.snapshot.lock().unwrap().clone()
    }

    /// Signals the polling task to stop and waits for it to exit. After
    /// this returns, no further fetches are issued.
    pub async fn shutdown(mut self) {
        let _ = self.shutdown.send(true);
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for StatsPoller {
    fn drop(&mut self) {
        // Backstop for owners that drop without calling shutdown.
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::error::{Error, Result};
    use crate::types::{ChatReply, FeedbackAck, Rating};

    struct CountingTransport {
        stats_calls: AtomicUsize,
        fail: std::sync::atomic::AtomicBool,
    }

    impl CountingTransport {
        fn new() -> Self {
            Self {
                stats_calls: AtomicUsize::new(0),
                fail: std::sync::atomic::AtomicBool::new(false),
            }
        }
    }

    #[async_trait::async_trait]
    impl Transport for CountingTransport {
        async fn chat(&self, _message: &str) -> Result<ChatReply> {
            Err(Error::connection("not under test", None))
        }

        async fn feedback(&self, _conversation_id: u64, _rating: Rating) -> Result<FeedbackAck> {
            Err(Error::connection("not under test", None))
        }

        async fn stats(&self) -> Result<StatsSnapshot> {
            let calls = self.stats_calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail.load(Ordering::SeqCst) {
                Err(Error::connection("refused", None))
            } else {
                Ok(StatsSnapshot {
                    online: true,
                    queries_today: calls as u64,
                    avg_response_time_ms: 500.0,
                })
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fetches_immediately_and_on_interval() {
        let transport = Arc::new(CountingTransport::new());
        let poller = StatsPoller::spawn(Arc::clone(&transport), Duration::from_secs(30));

        // The first tick fires immediately.
        tokio::time::advance(Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        assert_eq!(transport.stats_calls.load(Ordering::SeqCst), 1);
        assert!(poller.latest().online);

        tokio::time::advance(Duration::from_secs(30)).await;
        tokio::task::yield_now().await;
        assert_eq!(transport.stats_calls.load(Ordering::SeqCst), 2);

        poller.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn no_fetches_after_shutdown() {
        let transport = Arc::new(CountingTransport::new());
        let poller = StatsPoller::spawn(Arc::clone(&transport), Duration::from_secs(30));

        tokio::time::advance(Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        let before = transport.stats_calls.load(Ordering::SeqCst);
        assert!(before >= 1);

        poller.shutdown().await;

        // Advancing simulated time after teardown must not fetch again.
        tokio::time::advance(Duration::from_secs(300)).await;
        tokio::task::yield_now().await;
        assert_eq!(transport.stats_calls.load(Ordering::SeqCst), before);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_poll_retains_previous_snapshot() {
        let transport = Arc::new(CountingTransport::new());
        let poller = StatsPoller::spawn(Arc::clone(&transport), Duration::from_secs(30));

        tokio::time::advance(Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        let good = poller.latest();
        assert!(good.online);

        transport.fail.store(true, Ordering::SeqCst);
        tokio::time::advance(Duration::from_secs(30)).await;
        tokio::task::yield_now().await;
        assert_eq!(transport.stats_calls.load(Ordering::SeqCst), 2);
        assert_eq!(poller.latest(), good);

        poller.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn default_snapshot_before_first_success() {
        let transport = Arc::new(CountingTransport::new());
        transport.fail.store(true, Ordering::SeqCst);
        let poller = StatsPoller::spawn(Arc::clone(&transport), Duration::from_secs(30));

        tokio::time::advance(Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        assert_eq!(poller.latest(), StatsSnapshot::default());

        poller.shutdown().await;
    }
}

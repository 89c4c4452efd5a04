//! Fixed-interval dashboard refresh
//!
//! The poll task lives exactly as long as its [`PollHandle`]; dropping the
//! handle (the overview page unmounting, Ctrl-C in `saro watch`) aborts it.

use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::api::{ApiClient, ClientResult, Transport};

/// Default refresh period of the overview page
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Owns the background poll task
#[derive(Debug)]
pub struct PollHandle {
    task: JoinHandle<()>,
}

impl PollHandle {
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Fetch `/api/v1/dashboard` every `period`, starting one period from now.
///
/// Every result is handed to `on_update`, failures included; callers that
/// render the summary drop errors (see `OverviewPage::apply_poll`).
pub fn poll_dashboard<T, F>(
    client: Arc<ApiClient<T>>,
    period: Duration,
    mut on_update: F,
) -> PollHandle
where
    T: Transport + Send + Sync + 'static,
    F: FnMut(ClientResult<Value>) + Send + 'static,
{
    let task = tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let result = client.dashboard().await;
            if let Err(e) = &result {
                tracing::debug!(error = %e, "Dashboard poll failed");
            }
            on_update(result);
        }
    });

    PollHandle { task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::MockTransport;
    use crate::config::ApiBase;
    use std::sync::Mutex;

    fn client(transport: &MockTransport) -> Arc<ApiClient<MockTransport>> {
        Arc::new(ApiClient::new(
            ApiBase::new("https://api.example.com"),
            transport.clone(),
        ))
    }

    async fn advance(secs: u64) {
        tokio::time::advance(Duration::from_secs(secs)).await;
        // let the poll task run its request
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_polls_every_period_until_dropped() {
        let transport = MockTransport::new();
        let updates = Arc::new(Mutex::new(0usize));
        let seen = Arc::clone(&updates);

        let handle = poll_dashboard(client(&transport), DEFAULT_POLL_INTERVAL, move |_| {
            *seen.lock().unwrap() += 1;
        });

        advance(1).await;
        assert_eq!(transport.request_count(), 0);

        advance(29).await;
        assert_eq!(transport.request_count(), 1);
        advance(30).await;
        advance(30).await;
        assert_eq!(transport.request_count(), 3);
        assert_eq!(*updates.lock().unwrap(), 3);

        drop(handle);
        advance(120).await;
        assert_eq!(transport.request_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failures_keep_polling() {
        let transport = MockTransport::new();
        transport.fail("connection refused").respond(200, r#"{"total_documents": 4}"#);
        let results = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&results);

        let _handle = poll_dashboard(client(&transport), Duration::from_secs(5), move |r| {
            seen.lock().unwrap().push(r.is_ok());
        });

        advance(5).await;
        advance(5).await;

        assert_eq!(*results.lock().unwrap(), vec![false, true]);
        assert!(transport
            .requests()
            .iter()
            .all(|r| r.url.ends_with("/api/v1/dashboard")));
    }
}

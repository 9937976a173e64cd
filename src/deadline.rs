use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Fixed deadline armed alongside one dispatch.
///
/// When the timer fires the token is cancelled, which makes the in-flight
/// dispatch settle through its error path. Dropping the deadline disarms the
/// timer, so no callback outlives the request it was armed for.
pub struct Deadline {
    timeout: Duration,
    token: CancellationToken,
    timer: Option<JoinHandle<()>>,
}

impl Deadline {
    /// Start the timer. Must be called from within a tokio runtime.
    pub fn arm(timeout: Duration) -> Self {
        let token = CancellationToken::new();
        let signal = token.clone();
        // Fixed at arm time, not when the timer task first gets polled.
        let at = tokio::time::Instant::now() + timeout;
        let timer = tokio::spawn(async move {
            tokio::time::sleep_until(at).await;
            debug!("Deadline of {:?} elapsed, aborting request", timeout);
            signal.cancel();
        });
        Self {
            timeout,
            token,
            timer: Some(timer),
        }
    }

    /// Abort signal handed to the dispatcher.
    pub fn signal(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether the deadline has fired.
    pub fn expired(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn is_armed(&self) -> bool {
        self.timer.as_ref().map_or(false, |t| !t.is_finished())
    }

    /// Stop the timer. Safe to call after it already fired.
    pub fn disarm(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for Deadline {
    fn drop(&mut self) {
        self.disarm();
    }
}

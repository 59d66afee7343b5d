use async_trait::async_trait;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::BackendError;

/// Time budget for one request.
///
/// `elapsed` resolves once the budget is spent; the request racing it is
/// then dropped, which cancels it.
#[async_trait]
pub trait Deadline: Send + Sync {
    fn limit(&self) -> Duration;

    async fn elapsed(&self);
}

/// Wall-clock deadline backed by the tokio timer
#[derive(Debug, Clone)]
pub struct TimerDeadline {
    limit: Duration,
}

impl TimerDeadline {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }
}

#[async_trait]
impl Deadline for TimerDeadline {
    fn limit(&self) -> Duration {
        self.limit
    }

    async fn elapsed(&self) {
        tokio::time::sleep(self.limit).await;
    }
}

/// Deadline that only expires when told to.
///
/// Lets callers simulate a spent budget without waiting for it.
#[derive(Debug)]
pub struct ManualDeadline {
    limit: Duration,
    token: Mutex<CancellationToken>,
}

impl ManualDeadline {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            token: Mutex::new(CancellationToken::new()),
        }
    }

    /// Expire the current and every later wait until `rearm`
    pub fn fire(&self) {
        self.current().cancel();
    }

    pub fn rearm(&self) {
        if let Ok(mut token) = self.token.lock() {
            *token = CancellationToken::new();
        }
    }

    fn current(&self) -> CancellationToken {
        match self.token.lock() {
            Ok(token) => token.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl Deadline for ManualDeadline {
    fn limit(&self) -> Duration {
        self.limit
    }

    async fn elapsed(&self) {
        let token = self.current();
        token.cancelled().await;
    }
}

/// Race `request` against `deadline`; a request that is ready wins ties.
pub async fn with_deadline<T, F>(deadline: &dyn Deadline, request: F) -> Result<T, BackendError>
where
    F: Future<Output = Result<T, BackendError>>,
{
    tokio::select! {
        biased;
        result = request => result,
        _ = deadline.elapsed() => Err(BackendError::Timeout(deadline.limit())),
    }
}

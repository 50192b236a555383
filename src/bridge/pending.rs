//! Asynchronous operation handles.
//!
//! Every write operation returns a `PendingResult` immediately. Local
//! validation runs before the handle is created, so a malformed input
//! yields a handle that is already failed without any network I/O; a valid
//! input yields a handle backed by a spawned task that builds, submits,
//! and awaits confirmation. Either way the caller observes the outcome
//! through the same channel, exactly once.

use std::future::Future;

use tokio::task::JoinHandle;

use crate::bridge::error::{BridgeError, BridgeResult};

/// Handle to an in-flight or already-failed bridge operation.
///
/// Consumed by `wait`; one handle per submitted transaction, never reused.
#[derive(Debug)]
pub struct PendingResult<T> {
    inner: Inner<T>,
}

#[derive(Debug)]
enum Inner<T> {
    /// Local validation failed; no network call was issued.
    Failed(BridgeError),
    /// Operation is running on its own task.
    InFlight(JoinHandle<BridgeResult<T>>),
}

impl<T: Send + 'static> PendingResult<T> {
    /// A handle that is already resolved to a failure.
    pub(crate) fn failed(err: BridgeError) -> Self {
        Self {
            inner: Inner::Failed(err),
        }
    }

    /// Spawn the operation onto the runtime and hand back its handle.
    pub(crate) fn spawn<F>(fut: F) -> Self
    where
        F: Future<Output = BridgeResult<T>> + Send + 'static,
    {
        Self {
            inner: Inner::InFlight(tokio::spawn(fut)),
        }
    }

    /// True if the operation failed local validation and never reached the
    /// network.
    pub fn failed_early(&self) -> bool {
        matches!(self.inner, Inner::Failed(_))
    }

    /// Wait for the operation to complete.
    pub async fn wait(self) -> BridgeResult<T> {
        match self.inner {
            Inner::Failed(err) => Err(err),
            Inner::InFlight(handle) => match handle.await {
                Ok(result) => result,
                Err(err) => Err(BridgeError::Internal(format!("bridge task aborted: {}", err))),
            },
        }
    }
}

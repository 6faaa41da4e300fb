//! Fan-out/join helpers for provider calls.
//!
//! Every degradable provider call goes through [`settle`]: it is bounded by a
//! timeout and its failure is logged and turned into [`Settled::Failed`]
//! instead of propagating. [`settle_all`] issues a batch of such calls
//! concurrently and waits for every one of them, so one slow or failing call
//! never cancels its siblings.

use std::future::Future;
use std::time::Duration;

use futures::future::join_all;

use crate::providers::ProviderError;

/// Outcome of a provider call that has finished one way or another
#[derive(Debug, Clone)]
pub enum Settled<T> {
    Value(T),
    Failed(ProviderError),
}

impl<T> Settled<T> {
    pub fn ok(self) -> Option<T> {
        match self {
            Settled::Value(v) => Some(v),
            Settled::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Settled::Failed(_))
    }
}

/// Run a provider call under a time limit.
///
/// Elapsing maps to [`ProviderError::Timeout`]. Used directly for calls whose
/// failure is fatal to the request.
pub async fn bounded<T, F>(limit: Duration, call: F) -> Result<T, ProviderError>
where
    F: Future<Output = Result<T, ProviderError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(ProviderError::Timeout(limit.as_millis())),
    }
}

/// Run a degradable provider call, logging instead of propagating failure.
pub async fn settle<T, F>(provider: &'static str, limit: Duration, call: F) -> Settled<T>
where
    F: Future<Output = Result<T, ProviderError>>,
{
    match bounded(limit, call).await {
        Ok(value) => Settled::Value(value),
        Err(ProviderError::NoMatch) => {
            tracing::debug!(provider, "No match");
            Settled::Failed(ProviderError::NoMatch)
        }
        Err(e) => {
            tracing::warn!(provider, error = %e, "Provider degraded");
            Settled::Failed(e)
        }
    }
}

/// Settle a batch of calls concurrently. Results keep the input order.
pub async fn settle_all<T, F, I>(
    provider: &'static str,
    limit: Duration,
    calls: I,
) -> Vec<Settled<T>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, ProviderError>>,
{
    join_all(calls.into_iter().map(|call| settle(provider, limit, call))).await
}

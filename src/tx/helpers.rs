//! Concurrent fan-out plumbing shared by the aggregate operations

use futures::stream::{self, StreamExt, TryStreamExt};
use std::future::Future;

use crate::config::api;
use crate::error::Result;

/// Run one sub-request per input concurrently, failing fast on the first
/// error
///
/// Results come back in input order once every sub-request has completed.
/// The first error short-circuits the join and drops the sub-requests still
/// in flight, so the caller sees exactly one completion signal. Concurrency
/// is bounded by [`api::MAX_CONCURRENT_REQUESTS`].
pub async fn fan_out<I, T, F, Fut>(inputs: I, op: F) -> Result<Vec<T>>
where
    I: IntoIterator,
    F: Fn(I::Item) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    stream::iter(inputs.into_iter().map(op))
        .buffered(api::MAX_CONCURRENT_REQUESTS)
        .try_collect()
        .await
}

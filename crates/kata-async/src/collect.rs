use std::future::Future;

use futures::future::{join_all, try_join_all};

/// Wait for every deferred value and resolve with their values in input
/// order.
///
/// Rejects with the first rejection observed; the remaining inputs are
/// dropped at that point. An empty input resolves to an empty `Vec`.
///
/// # Errors
///
/// The error of the first input to reject.
pub async fn collect_all<I, F, T, E>(deferred: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    let values = try_join_all(deferred).await?;
    tracing::debug!(count = values.len(), "all deferred values resolved");
    Ok(values)
}

/// Wait for every deferred value to settle, keeping each outcome.
///
/// Never short-circuits: a rejection is recorded in place and the other
/// inputs keep running.
pub async fn settle_all<I, F, T, E>(deferred: I) -> Vec<Result<T, E>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    join_all(deferred).await
}

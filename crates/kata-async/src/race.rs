use std::future::Future;

use futures::future::select_all;

/// Settle with whichever deferred value settles first.
///
/// The winning outcome is returned as-is, so a rejection that wins the race
/// is returned as `Err`. The losing inputs are dropped (and so cancelled)
/// once a winner is known. Inputs that are ready on the same poll are won
/// by the earliest in input order.
///
/// Returns `None` for an empty input, since nothing could ever settle.
pub async fn race_first<I, F, T, E>(deferred: I) -> Option<Result<T, E>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    let racers: Vec<_> = deferred.into_iter().map(Box::pin).collect();
    if racers.is_empty() {
        return None;
    }

    let (outcome, index, losers) = select_all(racers).await;
    tracing::debug!(index, dropped = losers.len(), ok = outcome.is_ok(), "race settled");
    Some(outcome)
}

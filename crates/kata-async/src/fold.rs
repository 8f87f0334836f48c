use std::future::Future;

/// Fold deferred values strictly in order, skipping rejections.
///
/// Input `i + 1` is not polled until input `i` has settled. The first
/// resolved value seeds the accumulator; each later resolved value is merged
/// with `combine(accumulator, value)`. Rejected inputs leave the accumulator
/// unchanged.
///
/// Resolves to `None` when no input resolved.
///
/// ```
/// use futures::executor::block_on;
/// use futures::future::ready;
/// use kata_async::fold_settled;
///
/// let inputs = vec![ready(Ok::<_, ()>(1)), ready(Err(())), ready(Ok(2)), ready(Ok(3))];
/// assert_eq!(block_on(fold_settled(inputs, |a, b| a + b)), Some(6));
/// ```
pub async fn fold_settled<I, F, T, E, C>(deferred: I, mut combine: C) -> Option<T>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
    C: FnMut(T, T) -> T,
{
    let mut accumulator = None;
    for (index, value) in deferred.into_iter().enumerate() {
        match value.await {
            Ok(value) => {
                accumulator = Some(match accumulator.take() {
                    Some(acc) => combine(acc, value),
                    None => value,
                });
            }
            Err(_) => tracing::debug!(index, "skipping rejected value"),
        }
    }
    accumulator
}

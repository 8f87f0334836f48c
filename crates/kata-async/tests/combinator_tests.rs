//! Integration tests for the deferred-value combinators.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use futures::channel::oneshot;
use futures::executor::block_on;
use futures::future::{FutureExt, LocalBoxFuture, pending, ready};
use kata_async::{
    AnswerError, NO_MESSAGE, YES_MESSAGE, collect_all, fold_settled, race_first, settle_all,
    settle_answer,
};

/// Returns `Pending` for the given number of polls, waking itself each time.
struct Yield(u32);

impl Future for Yield {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 == 0 {
            return Poll::Ready(());
        }
        self.0 -= 1;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

type Deferred = LocalBoxFuture<'static, Result<i32, String>>;

fn after(polls: u32, outcome: Result<i32, String>) -> Deferred {
    async move {
        Yield(polls).await;
        outcome
    }
    .boxed_local()
}

fn never() -> Deferred {
    pending().boxed_local()
}

// Conditional settle

#[test]
fn test_settle_answer_yes() {
    assert_eq!(block_on(settle_answer(Some(true))), Ok(YES_MESSAGE));
    assert_eq!(YES_MESSAGE, "Hooray!!! She said \"Yes\"!");
}

#[test]
fn test_settle_answer_no() {
    assert_eq!(block_on(settle_answer(Some(false))), Ok(NO_MESSAGE));
    assert_eq!(NO_MESSAGE, "Oh no, she said \"No\".");
}

#[test]
fn test_settle_answer_missing_rejects() {
    let err = block_on(settle_answer(None)).unwrap_err();
    assert_eq!(err, AnswerError);
    assert_eq!(err.to_string(), "Wrong parameter is passed! Ask her again.");
}

// Collect-all

#[test]
fn test_collect_all_waits_for_slow_inputs() {
    let inputs = vec![after(3, Ok(1)), after(0, Ok(2)), after(1, Ok(3))];
    assert_eq!(block_on(collect_all(inputs)), Ok(vec![1, 2, 3]));
}

#[test]
fn test_collect_all_empty() {
    let inputs: Vec<Deferred> = Vec::new();
    assert_eq!(block_on(collect_all(inputs)), Ok(Vec::new()));
}

#[test]
fn test_collect_all_rejects_with_first_rejection() {
    let inputs = vec![
        after(0, Ok(1)),
        after(2, Err("late".to_string())),
        after(1, Err("early".to_string())),
    ];
    assert_eq!(block_on(collect_all(inputs)), Err("early".to_string()));
}

#[test]
fn test_settle_all_keeps_every_outcome() {
    let inputs = vec![after(2, Ok(1)), after(0, Err("bad".to_string())), after(1, Ok(3))];
    assert_eq!(
        block_on(settle_all(inputs)),
        vec![Ok(1), Err("bad".to_string()), Ok(3)]
    );
}

// Race-first

#[test]
fn test_race_first_takes_fastest_value() {
    let inputs = vec![after(3, Ok(1)), after(1, Ok(2)), never()];
    assert_eq!(block_on(race_first(inputs)), Some(Ok(2)));
}

#[test]
fn test_race_first_preserves_rejection() {
    let inputs = vec![after(2, Ok(1)), after(0, Err("first".to_string()))];
    assert_eq!(block_on(race_first(inputs)), Some(Err("first".to_string())));
}

#[test]
fn test_race_first_with_channels() {
    let (_slow_tx, slow_rx) = oneshot::channel::<i32>();
    let (fast_tx, fast_rx) = oneshot::channel::<i32>();
    fast_tx.send(7).unwrap();

    let inputs = vec![slow_rx, fast_rx];
    assert_eq!(block_on(race_first(inputs)), Some(Ok(7)));
}

#[test]
fn test_race_first_empty() {
    let inputs: Vec<Deferred> = Vec::new();
    assert_eq!(block_on(race_first(inputs)), None);
}

// Sequential fold

#[test]
fn test_fold_sums_resolved_values() {
    let inputs = vec![ready(Ok::<i32, String>(1)), ready(Ok(2)), ready(Ok(3))];
    assert_eq!(block_on(fold_settled(inputs, |a, b| a + b)), Some(6));
}

#[test]
fn test_fold_skips_rejections() {
    let inputs = vec![
        after(0, Err("skip me".to_string())),
        after(2, Ok(10)),
        after(0, Err("and me".to_string())),
        after(1, Ok(5)),
    ];
    assert_eq!(block_on(fold_settled(inputs, |a, b| a - b)), Some(5));
}

#[test]
fn test_fold_with_no_resolved_values() {
    let inputs = vec![after(0, Err("a".to_string())), after(1, Err("b".to_string()))];
    assert_eq!(block_on(fold_settled(inputs, |a, b| a + b)), None);

    let empty: Vec<Deferred> = Vec::new();
    assert_eq!(block_on(fold_settled(empty, |a, b| a + b)), None);
}

#[test]
fn test_fold_settles_inputs_one_at_a_time() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let inputs: Vec<_> = (0..3)
        .map(|i| {
            let log = Rc::clone(&log);
            async move {
                log.borrow_mut().push(format!("start {i}"));
                Yield(2).await;
                log.borrow_mut().push(format!("end {i}"));
                Ok::<String, ()>(i.to_string())
            }
        })
        .collect();

    let folded = block_on(fold_settled(inputs, |acc, next| format!("{acc},{next}")));
    assert_eq!(folded.as_deref(), Some("0,1,2"));
    assert_eq!(
        *log.borrow(),
        ["start 0", "end 0", "start 1", "end 1", "start 2", "end 2"]
    );
}

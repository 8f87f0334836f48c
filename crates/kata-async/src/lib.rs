//! Combinators over deferred values.
//!
//! A *deferred value* is any [`Future`](std::future::Future) whose output is
//! a `Result`: it settles exactly once, either resolving (`Ok`) or rejecting
//! (`Err`). Everything here is single-threaded and cooperative; nothing is
//! spawned, and inputs only make progress while the combinator is polled.
//!
//! - [`settle_answer`] - resolve or reject from a three-way input
//! - [`collect_all`] / [`settle_all`] - wait for every input
//! - [`race_first`] - take the outcome of whichever input settles first
//! - [`fold_settled`] - fold inputs strictly in order, skipping rejections

/// Conditional settle.
pub mod answer;
/// Wait-for-all combinators.
pub mod collect;
/// Sequential fold.
pub mod fold;
/// First-to-settle race.
pub mod race;

pub use answer::{AnswerError, NO_MESSAGE, YES_MESSAGE, settle_answer};
pub use collect::{collect_all, settle_all};
pub use fold::fold_settled;
pub use race::race_first;

use futures::future::{Ready, ready};
use thiserror::Error;

/// Resolution for an affirmative answer.
pub const YES_MESSAGE: &str = "Hooray!!! She said \"Yes\"!";

/// Resolution for a negative answer.
pub const NO_MESSAGE: &str = "Oh no, she said \"No\".";

/// Rejection when no answer was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Wrong parameter is passed! Ask her again.")]
pub struct AnswerError;

/// Settle on a yes/no answer.
///
/// `Some(true)` resolves to [`YES_MESSAGE`], `Some(false)` to
/// [`NO_MESSAGE`]. A missing answer rejects with [`AnswerError`]; it never
/// resolves.
#[must_use]
pub fn settle_answer(answer: Option<bool>) -> Ready<Result<&'static str, AnswerError>> {
    ready(match answer {
        Some(true) => Ok(YES_MESSAGE),
        Some(false) => Ok(NO_MESSAGE),
        None => Err(AnswerError),
    })
}

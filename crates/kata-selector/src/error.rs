use thiserror::Error;

use crate::fragment::FragmentKind;

/// Reasons a selector cannot be built.
///
/// Append errors leave the receiving [`Selector`](crate::Selector) untouched;
/// the caller decides whether to keep it or start over.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// An element, id or pseudo-element fragment was added to a selector
    /// that already has one.
    #[error("Element, id and pseudo-element should not occur more then one time inside the selector")]
    DuplicateSingleton {
        /// Kind of the rejected fragment.
        kind: FragmentKind,
    },

    /// A fragment was added after a fragment that must follow it.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrder {
        /// Kind of the rejected fragment.
        kind: FragmentKind,
        /// Highest-ranked kind already in the selector.
        after: FragmentKind,
    },

    /// The text is not one of the combinator symbols ` `, `>`, `+`, `~`.
    #[error("unknown combinator symbol {0:?}")]
    UnknownCombinator(String),
}

//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//!
//! "A compound selector is a sequence of simple selectors that are not
//! separated by a combinator, and represents a set of simultaneous
//! conditions on a single element."
//!
//! [`Selector`] accumulates fragments one call at a time and rejects a
//! fragment as soon as it would break the ordering or uniqueness rules,
//! rather than when the selector is rendered.

use std::fmt;

use crate::Stringify;
use crate::error::SelectorError;
use crate::fragment::{Fragment, FragmentKind};

/// An immutable, validated compound selector.
///
/// Every appending method takes `&self` and returns a new selector, so a
/// selector that has been handed out elsewhere can still be extended
/// without either copy observing the other's fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Selector {
    /// Fragments in append order.
    fragments: Vec<Fragment>,
    /// Highest kind appended so far; later fragments may not rank below it.
    cursor: Option<FragmentKind>,
}

impl Selector {
    /// The empty selector. Renders as an empty string.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
            cursor: None,
        }
    }

    /// Fragments in the order they were appended.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// `true` if no fragment has been appended.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Rank of the highest fragment appended so far, if any.
    #[must_use]
    pub fn max_rank(&self) -> Option<u8> {
        self.cursor.map(FragmentKind::rank)
    }

    /// Return a copy of this selector with one more fragment.
    ///
    /// Checks run in this order:
    /// 1. an element, id or pseudo-element already present fails with
    ///    [`SelectorError::DuplicateSingleton`]
    /// 2. a kind ranked below the highest kind so far fails with
    ///    [`SelectorError::OutOfOrder`]
    ///
    /// A kind equal to the highest kind so far is accepted, so classes,
    /// attributes and pseudo-classes may repeat.
    ///
    /// # Errors
    ///
    /// See above. `self` is never modified.
    pub fn append(&self, kind: FragmentKind, name: impl Into<String>) -> Result<Self, SelectorError> {
        if kind.is_singleton() && self.fragments.iter().any(|f| f.kind == kind) {
            tracing::debug!(%kind, selector = %self, "rejected repeated fragment");
            return Err(SelectorError::DuplicateSingleton { kind });
        }

        if let Some(after) = self.cursor.filter(|&highest| kind < highest) {
            tracing::debug!(%kind, %after, selector = %self, "rejected out-of-order fragment");
            return Err(SelectorError::OutOfOrder { kind, after });
        }

        let mut next = self.clone();
        next.fragments.push(Fragment::new(kind, name));
        next.cursor = Some(kind);
        Ok(next)
    }

    /// Append a type selector, e.g. `div`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSingleton`] if an element is already present.
    pub fn element(&self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Element, name)
    }

    /// Append an id selector, rendered `#name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSingleton`] if an id is already present,
    /// [`SelectorError::OutOfOrder`] after a class or later fragment.
    pub fn id(&self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Id, name)
    }

    /// Append a class selector, rendered `.name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] after an attribute or later fragment.
    pub fn class(&self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Class, name)
    }

    /// Append an attribute selector, rendered `[name]`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] after a pseudo-class or pseudo-element.
    pub fn attr(&self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Attribute, name)
    }

    /// Append a pseudo-class, rendered `:name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] after a pseudo-element.
    pub fn pseudo_class(&self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoClass, name)
    }

    /// Append a pseudo-element, rendered `::name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSingleton`] if a pseudo-element is already present.
    pub fn pseudo_element(&self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoElement, name)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fragments.iter().try_for_each(|fragment| write!(f, "{fragment}"))
    }
}

impl Stringify for Selector {
    fn stringify(&self) -> String {
        self.to_string()
    }
}

fn start(kind: FragmentKind, name: impl Into<String>) -> Selector {
    Selector {
        fragments: vec![Fragment::new(kind, name)],
        cursor: Some(kind),
    }
}

/// Start a selector with a type selector.
#[must_use]
pub fn element(name: impl Into<String>) -> Selector {
    start(FragmentKind::Element, name)
}

/// Start a selector with an id selector.
#[must_use]
pub fn id(name: impl Into<String>) -> Selector {
    start(FragmentKind::Id, name)
}

/// Start a selector with a class selector.
#[must_use]
pub fn class(name: impl Into<String>) -> Selector {
    start(FragmentKind::Class, name)
}

/// Start a selector with an attribute selector.
#[must_use]
pub fn attr(name: impl Into<String>) -> Selector {
    start(FragmentKind::Attribute, name)
}

/// Start a selector with a pseudo-class.
#[must_use]
pub fn pseudo_class(name: impl Into<String>) -> Selector {
    start(FragmentKind::PseudoClass, name)
}

/// Start a selector with a pseudo-element.
#[must_use]
pub fn pseudo_element(name: impl Into<String>) -> Selector {
    start(FragmentKind::PseudoElement, name)
}

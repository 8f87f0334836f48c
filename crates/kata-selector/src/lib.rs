//! Builder for CSS selector strings.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([Selectors Level 4 § 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, id, class, attribute, pseudo-class and pseudo-element fragments
//!   - Ordering enforced at append time: element, id, class, attribute,
//!     pseudo-class, pseudo-element
//!   - Element, id and pseudo-element at most once per compound
//!
//! - **Complex selectors** ([Selectors Level 4 § 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Descendant, child, next-sibling and subsequent-sibling combinators
//!   - Arbitrary nesting of combined selectors
//!
//! Builders are immutable: appending a fragment returns a new [`Selector`]
//! and leaves the receiver untouched.
//!
//! ```
//! use kata_selector::{Combinator, Stringify, combine, element, id};
//!
//! # fn main() -> Result<(), kata_selector::SelectorError> {
//! let compound = element("a").attr("href$=\".png\"")?.pseudo_class("focus")?;
//! assert_eq!(compound.stringify(), "a[href$=\".png\"]:focus");
//!
//! let nested = combine(id("main").class("list")?, Combinator::Child, element("li"));
//! assert_eq!(nested.stringify(), "#main.list > li");
//! # Ok(())
//! # }
//! ```

/// Combinators and combined selectors.
pub mod combinator;
/// Selector build errors.
pub mod error;
/// Typed selector fragments.
pub mod fragment;
/// The immutable compound selector builder.
pub mod selector;

pub use combinator::{Combinator, Combined, combine};
pub use error::SelectorError;
pub use fragment::{Fragment, FragmentKind};
pub use selector::{Selector, attr, class, element, id, pseudo_class, pseudo_element};

/// Anything that renders to a selector string.
///
/// Implemented by [`Selector`] and [`Combined`], so combined selectors can
/// be nested to any depth.
pub trait Stringify {
    /// Render the canonical selector text.
    fn stringify(&self) -> String;
}

impl<T: Stringify + ?Sized> Stringify for &T {
    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

impl<T: Stringify + ?Sized> Stringify for Box<T> {
    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

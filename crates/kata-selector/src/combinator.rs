//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
//!
//! "A combinator is punctuation that represents a particular kind of
//! relationship between the selectors on either side."

use std::fmt;
use std::str::FromStr;

use crate::Stringify;
use crate::error::SelectorError;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,
}

impl Combinator {
    /// The combinator's symbol. The descendant combinator is a single space.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol {
            " " => Ok(Self::Descendant),
            ">" => Ok(Self::Child),
            "+" => Ok(Self::NextSibling),
            "~" => Ok(Self::SubsequentSibling),
            other => Err(SelectorError::UnknownCombinator(other.to_string())),
        }
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Two renderable selectors joined by a combinator. Either side may itself
/// be a `Combined`, so complex selectors nest to any depth.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combined<L, R> {
    left: L,
    combinator: Combinator,
    right: R,
}

impl<L, R> Combined<L, R> {
    /// Selector on the left of the combinator.
    #[must_use]
    pub const fn left(&self) -> &L {
        &self.left
    }

    /// The joining combinator.
    #[must_use]
    pub const fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// Selector on the right of the combinator.
    #[must_use]
    pub const fn right(&self) -> &R {
        &self.right
    }
}

/// Join two selectors with a combinator.
///
/// The operands are not inspected. Rendering always puts one padding space
/// on each side of the symbol. [`Combinator::Descendant`]'s symbol is itself
/// a single space, so it comes out as three spaces in a row:
///
/// ```
/// use kata_selector::{Combinator, Stringify, combine, element};
///
/// let nav_links = combine(element("nav"), Combinator::Descendant, element("a"));
/// assert_eq!(nav_links.stringify(), "nav   a");
/// ```
#[must_use]
pub const fn combine<L, R>(left: L, combinator: Combinator, right: R) -> Combined<L, R>
where
    L: Stringify,
    R: Stringify,
{
    Combined {
        left,
        combinator,
        right,
    }
}

impl<L: Stringify, R: Stringify> fmt::Display for Combined<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.left.stringify(),
            self.combinator.symbol(),
            self.right.stringify()
        )
    }
}

impl<L: Stringify, R: Stringify> Stringify for Combined<L, R> {
    fn stringify(&self) -> String {
        self.to_string()
    }
}

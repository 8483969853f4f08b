//! CSS selector building
//!
//! A selector is assembled one simple selector at a time. Each part belongs to
//! a [`SelectorCategory`] with a fixed rank, and parts must be appended in
//! non-decreasing rank order:
//!
//! ```text
//!    element#id.class[attr]:pseudoClass::pseudoElement
//!              \----/\----/\----------/
//!              Can be several occurrences
//! ```

mod builder;
mod error;

pub use builder::{CssSelector, CssSelectorBuilder};
pub use error::SelectorError;

use std::fmt;

use strum_macros::{Display, EnumIter};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// The kind of a simple selector. Declaration order is rank order, so the
/// derived `Ord` is the order parts must be appended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum SelectorCategory {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Example: `div`
    Element = 0,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Example: `#main`
    Id = 1,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Example: `.container`
    Class = 2,

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Example: `[href$=".png"]`
    Attribute = 3,

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Example: `:nth-of-type(even)`
    PseudoClass = 4,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Example: `::before`
    PseudoElement = 5,
}

impl SelectorCategory {
    /// Element, id and pseudo-element may appear at most once per selector.
    #[must_use]
    pub const fn is_one_time(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Text written before the value.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// Text written after the value. Only attributes are closed.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }

    /// Append `value` to `out` in this category's textual form.
    pub fn write_part(self, out: &mut String, value: &str) {
        out.push_str(self.prefix());
        out.push_str(value);
        out.push_str(self.suffix());
    }
}

/// Where a selector stands in the append order.
///
/// `Combined` marks a selector produced by [`CssSelector::combine`]. It ranks
/// above every part, so nothing may be appended to a combined selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SelectorRank {
    /// Highest category appended so far.
    Part(SelectorCategory),
    /// Result of joining two selectors with a combinator.
    Combined,
}

impl fmt::Display for SelectorRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Part(category) => write!(f, "{category}"),
            Self::Combined => f.write_str("combined selector"),
        }
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// The four combinator symbols. [`CssSelector::combine`] takes anything that
/// is `AsRef<str>`, so a `Combinator` and a raw symbol are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// [§ 16.1](https://www.w3.org/TR/selectors-4/#descendant-combinators) `A B`
    Descendant,
    /// [§ 16.2](https://www.w3.org/TR/selectors-4/#child-combinators) `A > B`
    Child,
    /// [§ 16.3](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators) `A + B`
    NextSibling,
    /// [§ 16.4](https://www.w3.org/TR/selectors-4/#general-sibling-combinators) `A ~ B`
    SubsequentSibling,
}

impl Combinator {
    /// The combinator's symbol. The descendant combinator is a single space.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

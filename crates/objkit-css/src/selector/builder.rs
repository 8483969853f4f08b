use std::collections::BTreeSet;
use std::fmt;

use super::{SelectorCategory, SelectorError, SelectorRank};

/// A selector under construction.
///
/// Appending methods take the selector by value and hand it back on
/// success, so a chain reads `selector.id("main")?.class("a")?`. A failed
/// append consumes the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssSelector {
    text: String,
    rank: SelectorRank,
    /// One-time categories already appended.
    used: BTreeSet<SelectorCategory>,
}

impl CssSelector {
    /// Create a selector from existing text at an explicit rank.
    #[must_use]
    pub fn with_rank(text: impl Into<String>, rank: SelectorRank) -> Self {
        Self {
            text: text.into(),
            rank,
            used: BTreeSet::new(),
        }
    }

    /// An empty selector that accepts any first part.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_rank(String::new(), SelectorRank::Part(SelectorCategory::Element))
    }

    /// The rank reached so far.
    #[must_use]
    pub const fn rank(&self) -> SelectorRank {
        self.rank
    }

    /// Append a part of `category`.
    ///
    /// Repetition of a one-time category is checked before ordering.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::DuplicateCategory`] if `category` is one-time
    /// and already present, or [`SelectorError::OrderViolation`] if it ranks
    /// below the current rank.
    pub fn push(mut self, category: SelectorCategory, value: &str) -> Result<Self, SelectorError> {
        if category.is_one_time() && !self.used.insert(category) {
            return Err(SelectorError::DuplicateCategory { category });
        }

        if SelectorRank::Part(category) < self.rank {
            return Err(SelectorError::OrderViolation {
                category,
                current: self.rank,
            });
        }

        self.rank = SelectorRank::Part(category);
        category.write_part(&mut self.text, value);
        Ok(self)
    }

    /// Append a type selector, `value`.
    ///
    /// # Errors
    ///
    /// See [`CssSelector::push`].
    pub fn element(self, value: &str) -> Result<Self, SelectorError> {
        self.push(SelectorCategory::Element, value)
    }

    /// Append an id selector, `#value`.
    ///
    /// # Errors
    ///
    /// See [`CssSelector::push`].
    pub fn id(self, value: &str) -> Result<Self, SelectorError> {
        self.push(SelectorCategory::Id, value)
    }

    /// Append a class selector, `.value`.
    ///
    /// # Errors
    ///
    /// See [`CssSelector::push`].
    pub fn class(self, value: &str) -> Result<Self, SelectorError> {
        self.push(SelectorCategory::Class, value)
    }

    /// Append an attribute selector, `[value]`.
    ///
    /// # Errors
    ///
    /// See [`CssSelector::push`].
    pub fn attr(self, value: &str) -> Result<Self, SelectorError> {
        self.push(SelectorCategory::Attribute, value)
    }

    /// Append a pseudo-class, `:value`.
    ///
    /// # Errors
    ///
    /// See [`CssSelector::push`].
    pub fn pseudo_class(self, value: &str) -> Result<Self, SelectorError> {
        self.push(SelectorCategory::PseudoClass, value)
    }

    /// Append a pseudo-element, `::value`.
    ///
    /// # Errors
    ///
    /// See [`CssSelector::push`].
    pub fn pseudo_element(self, value: &str) -> Result<Self, SelectorError> {
        self.push(SelectorCategory::PseudoElement, value)
    }

    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    ///
    /// Join `self` and `other` as `"{self} {combinator} {other}"`. Neither
    /// operand is changed and the combinator is not validated. The result is
    /// at [`SelectorRank::Combined`], so no part can be appended to it.
    #[must_use]
    pub fn combine(&self, other: &Self, combinator: impl AsRef<str>) -> Self {
        let combinator = combinator.as_ref();
        let mut text =
            String::with_capacity(self.text.len() + combinator.len() + other.text.len() + 2);
        text.push_str(&self.text);
        text.push(' ');
        text.push_str(combinator);
        text.push(' ');
        text.push_str(&other.text);
        Self::with_rank(text, SelectorRank::Combined)
    }

    /// The selector text built so far.
    #[must_use]
    pub fn stringify(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for CssSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Stateless entry point: every call starts a fresh [`CssSelector`].
///
/// ```
/// use objkit_css::CssSelectorBuilder;
///
/// let builder = CssSelectorBuilder;
/// let link = builder.element("a")?.attr(r#"href$=".png""#)?.pseudo_class("focus")?;
/// assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
/// # Ok::<(), objkit_css::SelectorError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CssSelectorBuilder;

#[allow(clippy::unused_self)]
impl CssSelectorBuilder {
    /// Start a selector with a type selector.
    ///
    /// # Errors
    ///
    /// Never fails: a fresh selector accepts any part.
    pub fn element(self, value: &str) -> Result<CssSelector, SelectorError> {
        CssSelector::empty().element(value)
    }

    /// Start a selector with an id selector.
    ///
    /// # Errors
    ///
    /// Never fails: a fresh selector accepts any part.
    pub fn id(self, value: &str) -> Result<CssSelector, SelectorError> {
        CssSelector::empty().id(value)
    }

    /// Start a selector with a class selector.
    ///
    /// # Errors
    ///
    /// Never fails: a fresh selector accepts any part.
    pub fn class(self, value: &str) -> Result<CssSelector, SelectorError> {
        CssSelector::empty().class(value)
    }

    /// Start a selector with an attribute selector.
    ///
    /// # Errors
    ///
    /// Never fails: a fresh selector accepts any part.
    pub fn attr(self, value: &str) -> Result<CssSelector, SelectorError> {
        CssSelector::empty().attr(value)
    }

    /// Start a selector with a pseudo-class.
    ///
    /// # Errors
    ///
    /// Never fails: a fresh selector accepts any part.
    pub fn pseudo_class(self, value: &str) -> Result<CssSelector, SelectorError> {
        CssSelector::empty().pseudo_class(value)
    }

    /// Start a selector with a pseudo-element.
    ///
    /// # Errors
    ///
    /// Never fails: a fresh selector accepts any part.
    pub fn pseudo_element(self, value: &str) -> Result<CssSelector, SelectorError> {
        CssSelector::empty().pseudo_element(value)
    }

    /// Join two selectors: `left.combine(right, combinator)`.
    #[must_use]
    pub fn combine(
        self,
        left: &CssSelector,
        combinator: impl AsRef<str>,
        right: &CssSelector,
    ) -> CssSelector {
        left.combine(right, combinator)
    }
}

//! CSS selector construction for the objkit crates.
//!
//! # Scope
//!
//! This crate builds selector *strings*; it never parses or matches them.
//!
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - `element#id.class[attr]:pseudo-class::pseudo-element`, appended in that order
//!   - Element, id and pseudo-element at most once each
//!
//! - **Complex selectors** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Any two selectors joined as `left <combinator> right`
//!
//! # Example
//!
//! ```
//! use objkit_css::CssSelectorBuilder;
//!
//! let builder = CssSelectorBuilder;
//! let selector = builder.id("main")?.class("container")?.class("editable")?;
//! assert_eq!(selector.stringify(), "#main.container.editable");
//! # Ok::<(), objkit_css::SelectorError>(())
//! ```

/// Selector categories, ranks, combinators and the builder itself.
pub mod selector;

pub use selector::{
    Combinator, CssSelector, CssSelectorBuilder, SelectorCategory, SelectorError, SelectorRank,
};

use thiserror::Error;

use super::{SelectorCategory, SelectorRank};

/// Why a part could not be appended to a selector.
///
/// Either error ends the chain: the failing call consumed the builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Element, id or pseudo-element was appended a second time.
    #[error(
        "Element, id and pseudo-element should not occur more than one time inside the selector"
    )]
    DuplicateCategory {
        /// The repeated category.
        category: SelectorCategory,
    },

    /// A part ranked below the selector's current rank was appended.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation {
        /// The category that arrived too late.
        category: SelectorCategory,
        /// The rank the selector had already reached.
        current: SelectorRank,
    },
}

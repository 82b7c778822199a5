//! Event categories
//!
//! A category says what an event does to engagement (enable, disable, block
//! entry) or where its alert is shown (warnings while engaged, permanent
//! alerts in every state).

use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What an event means for engagement
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    Enable,
    PreEnable,
    NoEntry,
    Warning,
    UserDisable,
    SoftDisable,
    ImmediateDisable,
    Permanent,
}

impl Category {
    /// Every category in canonical order
    pub const ALL: [Category; 8] = [
        Category::Enable,
        Category::PreEnable,
        Category::NoEntry,
        Category::Warning,
        Category::UserDisable,
        Category::SoftDisable,
        Category::ImmediateDisable,
        Category::Permanent,
    ];

    /// Transition candidates, highest precedence first
    pub const TRANSITION_PRECEDENCE: [Category; 5] = [
        Category::ImmediateDisable,
        Category::SoftDisable,
        Category::UserDisable,
        Category::Enable,
        Category::PreEnable,
    ];

    /// Name used in alert type identifiers
    pub fn name(&self) -> &'static str {
        match self {
            Category::Enable => "enable",
            Category::PreEnable => "preEnable",
            Category::NoEntry => "noEntry",
            Category::Warning => "warning",
            Category::UserDisable => "userDisable",
            Category::SoftDisable => "softDisable",
            Category::ImmediateDisable => "immediateDisable",
            Category::Permanent => "permanent",
        }
    }

    /// Single-category flag set
    pub const fn flag(self) -> CategorySet {
        match self {
            Category::Enable => CategorySet::ENABLE,
            Category::PreEnable => CategorySet::PRE_ENABLE,
            Category::NoEntry => CategorySet::NO_ENTRY,
            Category::Warning => CategorySet::WARNING,
            Category::UserDisable => CategorySet::USER_DISABLE,
            Category::SoftDisable => CategorySet::SOFT_DISABLE,
            Category::ImmediateDisable => CategorySet::IMMEDIATE_DISABLE,
            Category::Permanent => CategorySet::PERMANENT,
        }
    }
}

bitflags! {
    /// Set of categories, as reported alongside each event
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CategorySet: u8 {
        const ENABLE = 1 << 0;
        const PRE_ENABLE = 1 << 1;
        const NO_ENTRY = 1 << 2;
        const WARNING = 1 << 3;
        const USER_DISABLE = 1 << 4;
        const SOFT_DISABLE = 1 << 5;
        const IMMEDIATE_DISABLE = 1 << 6;
        const PERMANENT = 1 << 7;
    }
}

impl CategorySet {
    /// Check membership of one category
    pub fn has(&self, category: Category) -> bool {
        self.contains(category.flag())
    }

    /// Categories in canonical order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(move |c| self.has(*c))
    }
}

impl From<Category> for CategorySet {
    fn from(category: Category) -> Self {
        category.flag()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CategorySet {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "CategorySet({=u8:#x})", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_distinct() {
        let mut all = CategorySet::empty();
        for category in Category::ALL {
            assert!(!all.has(category));
            all |= category.flag();
        }
        assert_eq!(all, CategorySet::all());
    }

    #[test]
    fn test_categories_canonical_order() {
        let set = CategorySet::PERMANENT | CategorySet::ENABLE | CategorySet::WARNING;
        let listed: Vec<Category> = set.categories().collect();
        assert_eq!(
            listed,
            vec![Category::Enable, Category::Warning, Category::Permanent]
        );
    }

    #[test]
    fn test_precedence_is_strict() {
        assert_eq!(Category::TRANSITION_PRECEDENCE[0], Category::ImmediateDisable);
        assert_eq!(Category::TRANSITION_PRECEDENCE[4], Category::PreEnable);
    }
}

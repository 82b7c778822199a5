//! Event taxonomy
//!
//! Static mapping from each [`EventKind`] to the categories it raises and
//! the alert shown for each. Built and validated once at startup, read-only
//! afterwards.

use super::alert::{AlertSource, AlertSpec};
use super::category::{Category, CategorySet};
use super::kind::EventKind;
use super::set::EventSet;
use super::table;
use crate::context::AlertContext;

/// Declaration of one event kind
#[derive(Debug, Clone)]
pub struct EventDecl {
    pub kind: EventKind,
    /// Categories this kind raises with their alerts; may be empty
    pub alerts: &'static [(Category, AlertSource)],
}

/// Taxonomy validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TaxonomyError {
    /// A kind has no declaration
    UndeclaredKind(EventKind),
    /// A kind is declared more than once
    DuplicateKind(EventKind),
    /// A kind declares the same category twice
    DuplicateCategory(EventKind, Category),
}

/// Validated, immutable taxonomy
#[derive(Debug, Clone)]
pub struct Taxonomy {
    decls: &'static [EventDecl],
    /// Position of each kind's declaration in `decls`
    rank: [usize; EventKind::COUNT],
    categories: [CategorySet; EventKind::COUNT],
}

impl Taxonomy {
    /// Validate a declaration table
    ///
    /// Every kind must be declared exactly once, and no declaration may
    /// repeat a category.
    pub fn new(decls: &'static [EventDecl]) -> Result<Self, TaxonomyError> {
        let mut seen = [None::<usize>; EventKind::COUNT];
        let mut categories = [CategorySet::empty(); EventKind::COUNT];

        for (pos, decl) in decls.iter().enumerate() {
            let slot = decl.kind.index();
            if seen[slot].is_some() {
                return Err(TaxonomyError::DuplicateKind(decl.kind));
            }

            let mut set = CategorySet::empty();
            for (category, _) in decl.alerts {
                if set.has(*category) {
                    return Err(TaxonomyError::DuplicateCategory(decl.kind, *category));
                }
                set |= category.flag();
            }

            seen[slot] = Some(pos);
            categories[slot] = set;
        }

        let mut rank = [0usize; EventKind::COUNT];
        for kind in EventKind::ALL {
            match seen[kind.index()] {
                Some(pos) => rank[kind.index()] = pos,
                None => return Err(TaxonomyError::UndeclaredKind(kind)),
            }
        }

        Ok(Self {
            decls,
            rank,
            categories,
        })
    }

    /// The built-in declaration table
    pub fn builtin() -> Result<Self, TaxonomyError> {
        Self::new(&table::DECLARATIONS)
    }

    /// Categories a kind can raise
    pub fn categories_for(&self, kind: EventKind) -> CategorySet {
        self.categories[kind.index()]
    }

    /// Alert source for a (kind, category) pair, if declared
    pub fn source_for(&self, kind: EventKind, category: Category) -> Option<&'static AlertSource> {
        let decls: &'static [EventDecl] = self.decls;
        decls[self.rank[kind.index()]]
            .alerts
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, source)| source)
    }

    /// Materialized alert for a (kind, category) pair, if declared
    pub fn spec_for(
        &self,
        kind: EventKind,
        category: Category,
        ctx: &AlertContext,
    ) -> Option<AlertSpec> {
        self.source_for(kind, category)
            .map(|source| source.materialize(ctx))
    }

    /// Position of a kind in the declaration table, used for tie-breaks
    pub fn declaration_rank(&self, kind: EventKind) -> usize {
        self.rank[kind.index()]
    }

    /// Whether any event in the set raises `category`
    pub fn any(&self, events: &EventSet, category: Category) -> bool {
        events
            .iter()
            .any(|kind| self.categories_for(kind).has(category))
    }

    /// Union of the categories raised by the set
    pub fn categories_of(&self, events: &EventSet) -> CategorySet {
        events
            .iter()
            .fold(CategorySet::empty(), |acc, kind| acc | self.categories_for(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::alert::{AlertSize, AlertStatus, AudibleAlert, Priority, VisualAlert};

    const PLAIN: AlertSource = AlertSource::Static(AlertSpec::new(
        "",
        "",
        AlertStatus::Normal,
        AlertSize::None,
        Priority::LOW,
        VisualAlert::None,
        AudibleAlert::None,
        0,
        0,
        0,
    ));

    static DUPLICATE_KIND: [EventDecl; 2] = [
        EventDecl {
            kind: EventKind::Startup,
            alerts: &[(Category::Permanent, PLAIN)],
        },
        EventDecl {
            kind: EventKind::Startup,
            alerts: &[],
        },
    ];

    static DUPLICATE_CATEGORY: [EventDecl; 1] = [EventDecl {
        kind: EventKind::DoorOpen,
        alerts: &[(Category::NoEntry, PLAIN), (Category::NoEntry, PLAIN)],
    }];

    static INCOMPLETE: [EventDecl; 1] = [EventDecl {
        kind: EventKind::Startup,
        alerts: &[(Category::Permanent, PLAIN)],
    }];

    #[test]
    fn test_builtin_valid() {
        assert!(Taxonomy::builtin().is_ok());
    }

    #[test]
    fn test_duplicate_kind_rejected() {
        assert_eq!(
            Taxonomy::new(&DUPLICATE_KIND).unwrap_err(),
            TaxonomyError::DuplicateKind(EventKind::Startup)
        );
    }

    #[test]
    fn test_duplicate_category_rejected() {
        assert_eq!(
            Taxonomy::new(&DUPLICATE_CATEGORY).unwrap_err(),
            TaxonomyError::DuplicateCategory(EventKind::DoorOpen, Category::NoEntry)
        );
    }

    #[test]
    fn test_undeclared_kind_rejected() {
        // DebugAlert is first in declaration order and missing here
        assert_eq!(
            Taxonomy::new(&INCOMPLETE).unwrap_err(),
            TaxonomyError::UndeclaredKind(EventKind::DebugAlert)
        );
    }

    #[test]
    fn test_categories_for() {
        let taxonomy = Taxonomy::builtin().unwrap();
        let door = taxonomy.categories_for(EventKind::DoorOpen);
        assert_eq!(door, CategorySet::SOFT_DISABLE | CategorySet::NO_ENTRY);

        let can = taxonomy.categories_for(EventKind::CanError);
        assert!(can.has(Category::ImmediateDisable));
        assert!(can.has(Category::Permanent));
        assert!(can.has(Category::NoEntry));
    }

    #[test]
    fn test_missing_pair_has_no_spec() {
        let taxonomy = Taxonomy::builtin().unwrap();
        let ctx = AlertContext::default();
        assert!(taxonomy
            .spec_for(EventKind::DoorOpen, Category::Warning, &ctx)
            .is_none());
        assert!(taxonomy
            .spec_for(EventKind::DoorOpen, Category::NoEntry, &ctx)
            .is_some());
    }

    #[test]
    fn test_computed_spec_uses_context() {
        let taxonomy = Taxonomy::builtin().unwrap();
        let ctx = AlertContext {
            metric: true,
            min_steer_speed: 10.0,
            ..Default::default()
        };
        let spec = taxonomy
            .spec_for(EventKind::BelowSteerSpeed, Category::Warning, &ctx)
            .unwrap();
        assert!(spec.text_2.as_str().contains("36 km/h"));
    }

    #[test]
    fn test_builtin_rank_follows_declaration_order() {
        let taxonomy = Taxonomy::builtin().unwrap();
        for kind in EventKind::ALL {
            assert_eq!(taxonomy.declaration_rank(kind), kind.index());
        }
    }
}

//! Alert arbitration
//!
//! Picks at most one alert per category per cycle. Candidates are active
//! events that declare the category and have been present long enough to
//! pass their creation delay. The highest priority wins; equal priorities
//! go to the kind declared first in the taxonomy.

use heapless::Vec;

use super::alert::Alert;
use super::category::{Category, CategorySet};
use super::set::{EventSet, Recurrence};
use super::taxonomy::Taxonomy;
use crate::context::AlertContext;

/// One alert per category, at most
pub type AlertList = Vec<Alert, { Category::ALL.len() }>;

/// Alert arbiter bound to a taxonomy and cycle period
#[derive(Debug, Clone, Copy)]
pub struct Arbiter<'t> {
    taxonomy: &'t Taxonomy,
    cycle_period_ms: u32,
}

impl<'t> Arbiter<'t> {
    pub fn new(taxonomy: &'t Taxonomy, cycle_period_ms: u32) -> Self {
        Self {
            taxonomy,
            cycle_period_ms,
        }
    }

    pub fn taxonomy(&self) -> &'t Taxonomy {
        self.taxonomy
    }

    /// Select the alert to surface for `category`
    pub fn select(
        &self,
        active: &EventSet,
        category: Category,
        recurrence: &Recurrence,
        ctx: &AlertContext,
    ) -> Option<Alert> {
        let mut best: Option<(usize, Alert)> = None;

        for kind in active.iter() {
            let Some(spec) = self.taxonomy.spec_for(kind, category, ctx) else {
                continue;
            };

            let elapsed = recurrence.elapsed_ms(kind, self.cycle_period_ms);
            if elapsed < u64::from(spec.creation_delay_ms) {
                continue;
            }

            let rank = self.taxonomy.declaration_rank(kind);
            let wins = match &best {
                None => true,
                Some((best_rank, best_alert)) => {
                    spec.priority > best_alert.priority()
                        || (spec.priority == best_alert.priority() && rank < *best_rank)
                }
            };

            if wins {
                best = Some((
                    rank,
                    Alert {
                        event: kind,
                        category,
                        spec,
                    },
                ));
            }
        }

        best.map(|(_, alert)| alert)
    }

    /// Select one alert for each requested category, in canonical order
    pub fn select_each(
        &self,
        active: &EventSet,
        categories: CategorySet,
        recurrence: &Recurrence,
        ctx: &AlertContext,
    ) -> AlertList {
        let mut alerts = AlertList::new();
        for category in categories.categories() {
            if let Some(alert) = self.select(active, category, recurrence, ctx) {
                // One slot per category
                let _ = alerts.push(alert);
            }
        }
        alerts
    }
}

//! Active event set and recurrence counters

use heapless::Vec;

use super::kind::EventKind;

/// Events active in one cycle
///
/// Insertion-ordered without duplicates. Capacity covers every kind, so
/// adding never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSet {
    kinds: Vec<EventKind, { EventKind::COUNT }>,
}

impl EventSet {
    pub const fn new() -> Self {
        Self { kinds: Vec::new() }
    }

    /// Add a kind; no-op if already present
    pub fn add(&mut self, kind: EventKind) {
        if !self.contains(kind) {
            // Capacity equals the number of kinds
            let _ = self.kinds.push(kind);
        }
    }

    /// Remove a kind, keeping the order of the rest
    pub fn remove(&mut self, kind: EventKind) {
        self.kinds.retain(|k| *k != kind);
    }

    pub fn contains(&self, kind: EventKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = EventKind> + '_ {
        self.kinds.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn clear(&mut self) {
        self.kinds.clear();
    }

    /// Add every kind from `other` in its order
    pub fn extend_from(&mut self, other: &EventSet) {
        for kind in other.iter() {
            self.add(kind);
        }
    }
}

impl FromIterator<EventKind> for EventSet {
    fn from_iter<I: IntoIterator<Item = EventKind>>(iter: I) -> Self {
        let mut set = EventSet::new();
        for kind in iter {
            set.add(kind);
        }
        set
    }
}

impl Extend<EventKind> for EventSet {
    fn extend<I: IntoIterator<Item = EventKind>>(&mut self, iter: I) {
        for kind in iter {
            self.add(kind);
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EventSet {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=[?]}", self.kinds.as_slice())
    }
}

/// Consecutive-cycle presence count per event kind
///
/// Updated once per cycle after the active set is rebuilt. Any absence
/// resets the count to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recurrence {
    counts: [u32; EventKind::COUNT],
}

impl Default for Recurrence {
    fn default() -> Self {
        Self::new()
    }
}

impl Recurrence {
    pub const fn new() -> Self {
        Self {
            counts: [0; EventKind::COUNT],
        }
    }

    /// Advance every counter by one cycle
    pub fn update(&mut self, active: &EventSet) {
        for kind in EventKind::ALL {
            let count = &mut self.counts[kind.index()];
            *count = if active.contains(kind) {
                count.saturating_add(1)
            } else {
                0
            };
        }
    }

    /// Consecutive cycles `kind` has been present, including this one
    pub fn count(&self, kind: EventKind) -> u32 {
        self.counts[kind.index()]
    }

    /// Continuous presence time at the given cycle period
    pub fn elapsed_ms(&self, kind: EventKind, period_ms: u32) -> u64 {
        u64::from(self.count(kind)) * u64::from(period_ms)
    }

    pub fn reset(&mut self) {
        self.counts = [0; EventKind::COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_set_deduplicates() {
        let mut set = EventSet::new();
        set.add(EventKind::DoorOpen);
        set.add(EventKind::CanError);
        set.add(EventKind::DoorOpen);
        assert_eq!(set.len(), 2);
        let order: std::vec::Vec<_> = set.iter().collect();
        assert_eq!(order, vec![EventKind::DoorOpen, EventKind::CanError]);
    }

    #[test]
    fn test_set_remove_keeps_order() {
        let mut set: EventSet = [EventKind::Fcw, EventKind::Ldw, EventKind::DoorOpen]
            .into_iter()
            .collect();
        set.remove(EventKind::Ldw);
        set.remove(EventKind::Startup);
        let order: std::vec::Vec<_> = set.iter().collect();
        assert_eq!(order, vec![EventKind::Fcw, EventKind::DoorOpen]);
    }

    #[test]
    fn test_set_holds_every_kind() {
        let set: EventSet = EventKind::ALL.into_iter().collect();
        assert_eq!(set.len(), EventKind::COUNT);
    }

    #[test]
    fn test_recurrence_counts_and_resets() {
        let mut rec = Recurrence::new();
        let present: EventSet = [EventKind::DoorOpen].into_iter().collect();
        let absent = EventSet::new();

        rec.update(&present);
        rec.update(&present);
        assert_eq!(rec.count(EventKind::DoorOpen), 2);
        assert_eq!(rec.elapsed_ms(EventKind::DoorOpen, 10), 20);

        rec.update(&absent);
        assert_eq!(rec.count(EventKind::DoorOpen), 0);

        rec.update(&present);
        assert_eq!(rec.count(EventKind::DoorOpen), 1);
    }

    proptest! {
        #[test]
        fn prop_recurrence_tracks_trailing_streak(pattern in proptest::collection::vec(any::<bool>(), 1..64)) {
            let mut rec = Recurrence::new();
            let present: EventSet = [EventKind::Fcw].into_iter().collect();
            let absent = EventSet::new();

            for &on in &pattern {
                rec.update(if on { &present } else { &absent });
            }

            let streak = pattern.iter().rev().take_while(|on| **on).count() as u32;
            prop_assert_eq!(rec.count(EventKind::Fcw), streak);
        }
    }
}

//! Per-cycle telemetry report
//!
//! A [`CycleReport`] records what one cycle decided: the authorization
//! state, every active event with its category flags, the surfaced alerts
//! and how many frames reached the bus. Reports serialize with postcard for
//! logging or streaming.

use serde::{Deserialize, Serialize};

use helm_core::events::{
    Alert, AlertSize, AlertStatus, AudibleAlert, Category, EventKind, Taxonomy, VisualAlert,
};
use helm_core::state::{ControlState, CycleOutcome};

/// An active event and the categories it carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedEvent {
    pub kind: EventKind,
    /// `CategorySet` bits
    pub categories: u8,
}

/// A surfaced alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportedAlert {
    /// `<eventName>/<category>`
    pub alert_type: String,
    pub event: EventKind,
    pub category: Category,
    pub text_1: String,
    pub text_2: String,
    pub status: AlertStatus,
    pub size: AlertSize,
    pub priority: u8,
    pub visual: VisualAlert,
    pub audible: AudibleAlert,
    pub duration_sound_ms: u32,
    pub duration_hud_ms: u32,
    pub duration_text_ms: u32,
    pub rate: Option<f32>,
}

impl From<&Alert> for ReportedAlert {
    fn from(alert: &Alert) -> Self {
        let spec = &alert.spec;
        Self {
            alert_type: alert.alert_type().as_str().to_owned(),
            event: alert.event,
            category: alert.category,
            text_1: spec.text_1.as_str().to_owned(),
            text_2: spec.text_2.as_str().to_owned(),
            status: spec.status,
            size: spec.size,
            priority: spec.priority.0,
            visual: spec.visual,
            audible: spec.audible,
            duration_sound_ms: spec.duration_sound_ms,
            duration_hud_ms: spec.duration_hud_ms,
            duration_text_ms: spec.duration_text_ms,
            rate: spec.rate,
        }
    }
}

/// Summary of one control cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleReport {
    /// Cycle number since start
    pub cycle: u64,
    pub state: ControlState,
    pub previous: ControlState,
    /// Active events, in evaluation order
    pub events: Vec<ReportedEvent>,
    /// Surfaced alerts, in category order
    pub alerts: Vec<ReportedAlert>,
    /// Frames produced by the encoder
    pub frames_built: usize,
    /// Frames accepted by the sink
    pub frames_sent: usize,
    /// The cycle missed its budget and its frames were dropped
    pub overrun: bool,
}

impl CycleReport {
    pub fn new(cycle: u64, outcome: &CycleOutcome, taxonomy: &Taxonomy, alerts: &[Alert]) -> Self {
        Self {
            cycle,
            state: outcome.state,
            previous: outcome.previous,
            events: outcome
                .events
                .iter()
                .map(|kind| ReportedEvent {
                    kind,
                    categories: taxonomy.categories_for(kind).bits(),
                })
                .collect(),
            alerts: alerts.iter().map(ReportedAlert::from).collect(),
            frames_built: 0,
            frames_sent: 0,
            overrun: false,
        }
    }

    /// Encode for telemetry
    pub fn encode(&self) -> Result<Vec<u8>, postcard::Error> {
        postcard::to_allocvec(self)
    }

    /// Decode a telemetry record
    pub fn decode(bytes: &[u8]) -> Result<Self, postcard::Error> {
        postcard::from_bytes(bytes)
    }

    /// Whether an event of this kind was active
    pub fn has_event(&self, kind: EventKind) -> bool {
        self.events.iter().any(|e| e.kind == kind)
    }

    /// Alert surfaced for a category, if any
    pub fn alert_for(&self, category: Category) -> Option<&ReportedAlert> {
        self.alerts.iter().find(|a| a.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helm_core::context::AlertContext;
    use helm_core::events::{CategorySet, EventSet};

    fn outcome(events: &[EventKind]) -> CycleOutcome {
        CycleOutcome {
            state: ControlState::Disabled,
            previous: ControlState::Enabled,
            events: events.iter().copied().collect::<EventSet>(),
            alert_categories: CategorySet::USER_DISABLE,
            cause: Some(Category::UserDisable),
            lockout: false,
        }
    }

    #[test]
    fn test_events_carry_category_bits() {
        let taxonomy = Taxonomy::builtin().unwrap();
        let report = CycleReport::new(
            4,
            &outcome(&[EventKind::ButtonCancel, EventKind::DoorOpen]),
            &taxonomy,
            &[],
        );

        assert_eq!(report.events.len(), 2);
        assert_eq!(report.events[0].kind, EventKind::ButtonCancel);
        assert_eq!(report.events[0].categories, CategorySet::USER_DISABLE.bits());
        assert_eq!(
            report.events[1].categories,
            (CategorySet::SOFT_DISABLE | CategorySet::NO_ENTRY).bits()
        );
        assert!(report.has_event(EventKind::DoorOpen));
        assert!(!report.has_event(EventKind::PedalPressed));
    }

    #[test]
    fn test_alert_fields() {
        let taxonomy = Taxonomy::builtin().unwrap();
        let ctx = AlertContext::default();
        let spec = taxonomy
            .spec_for(EventKind::ButtonCancel, Category::UserDisable, &ctx)
            .unwrap();
        let alert = Alert {
            event: EventKind::ButtonCancel,
            category: Category::UserDisable,
            spec,
        };
        let report = CycleReport::new(0, &outcome(&[EventKind::ButtonCancel]), &taxonomy, &[alert]);

        let surfaced = report.alert_for(Category::UserDisable).unwrap();
        assert_eq!(surfaced.alert_type, "buttonCancel/userDisable");
        assert!(report.alert_for(Category::Warning).is_none());
    }

    #[test]
    fn test_postcard_encoding() {
        let taxonomy = Taxonomy::builtin().unwrap();
        let mut report =
            CycleReport::new(9, &outcome(&[EventKind::ButtonCancel]), &taxonomy, &[]);
        report.frames_built = 2;
        report.frames_sent = 2;

        let bytes = report.encode().unwrap();
        assert_eq!(CycleReport::decode(&bytes).unwrap(), report);
        assert!(CycleReport::decode(&bytes[..bytes.len() - 1]).is_err());
    }
}

//! Engagement state machine
//!
//! Actuation authorization is a function of the current state and the
//! highest-precedence category raised this cycle. One instance owns every
//! piece of per-cycle history (previous snapshot, recurrence counters,
//! latched events, interlocks) and is stepped exactly once per cycle.

use crate::config::{ControlConfig, VehicleParams};
use crate::context::AlertContext;
use crate::events::{
    AlertList, Arbiter, Category, CategorySet, EventKind, EventSet, Recurrence, Taxonomy,
};
use crate::safety::{LinkMonitor, LinkStatus, SteerLockout};

use super::buttons::button_edges;
use super::conditions::Conditions;
use super::snapshot::{CycleInput, VehicleState};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Engagement states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ControlState {
    /// Not engaged; waiting for an enable
    #[default]
    Disabled,
    /// Engaged but held off by a pre-enable condition
    PreEnabled,
    /// Engaged and actuating
    Enabled,
    /// Still actuating while the driver is asked to take over
    SoftDisabling,
    /// Upstream input lost; outputs disabled
    Faulted,
}

impl ControlState {
    /// Check if the driver has engaged the system
    pub fn is_engaged(&self) -> bool {
        matches!(
            self,
            ControlState::PreEnabled | ControlState::Enabled | ControlState::SoftDisabling
        )
    }

    /// Check if this state allows actuator commands
    pub fn actuation_allowed(&self) -> bool {
        matches!(self, ControlState::Enabled | ControlState::SoftDisabling)
    }

    pub fn is_faulted(&self) -> bool {
        matches!(self, ControlState::Faulted)
    }
}

/// Result of one cycle
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleOutcome {
    pub state: ControlState,
    pub previous: ControlState,
    /// Events active this cycle, in evaluation order
    pub events: EventSet,
    /// Categories whose alerts should surface this cycle
    pub alert_categories: CategorySet,
    /// Transition category that drove this cycle, if any
    pub cause: Option<Category>,
    /// Low-speed steering lockout after this cycle
    pub lockout: bool,
}

impl CycleOutcome {
    pub fn changed(&self) -> bool {
        self.state != self.previous
    }
}

/// Engagement state machine
#[derive(Debug, Clone)]
pub struct ControlStateMachine {
    taxonomy: Taxonomy,
    config: ControlConfig,
    params: VehicleParams,
    state: ControlState,
    prev_snapshot: Option<VehicleState>,
    recurrence: Recurrence,
    latched: EventSet,
    lockout: SteerLockout,
    link: LinkMonitor,
    soft_disable_remaining_ms: u32,
    started: bool,
}

impl ControlStateMachine {
    pub fn new(taxonomy: Taxonomy, config: ControlConfig, params: VehicleParams) -> Self {
        let lockout = SteerLockout::new(&config);
        let link = LinkMonitor::new(config.fault_clear_cycles);
        Self {
            taxonomy,
            config,
            params,
            state: ControlState::Disabled,
            prev_snapshot: None,
            recurrence: Recurrence::new(),
            latched: EventSet::new(),
            lockout,
            link,
            soft_disable_remaining_ms: 0,
            started: false,
        }
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    pub fn params(&self) -> &VehicleParams {
        &self.params
    }

    pub fn recurrence(&self) -> &Recurrence {
        &self.recurrence
    }

    pub fn link(&self) -> &LinkMonitor {
        &self.link
    }

    /// Re-add `kind` to every cycle from now on
    pub fn latch(&mut self, kind: EventKind) {
        self.latched.add(kind);
    }

    pub fn unlatch(&mut self, kind: EventKind) {
        self.latched.remove(kind);
    }

    /// Arbiter over this machine's taxonomy and cycle period
    pub fn arbiter(&self) -> Arbiter<'_> {
        Arbiter::new(&self.taxonomy, self.config.cycle_period_ms)
    }

    /// Context for computed alerts, from the static configuration
    pub fn alert_context(&self) -> AlertContext {
        AlertContext {
            metric: self.config.metric,
            min_steer_speed: self.params.min_steer_speed,
            ..Default::default()
        }
    }

    /// Arbitrate the alerts an outcome asks for
    pub fn alerts(&self, outcome: &CycleOutcome, ctx: &AlertContext) -> AlertList {
        self.arbiter()
            .select_each(&outcome.events, outcome.alert_categories, &self.recurrence, ctx)
    }

    /// Run one cycle
    pub fn step(&mut self, input: &CycleInput) -> CycleOutcome {
        let previous = self.state;

        let Some(snapshot) = input.valid_snapshot() else {
            return self.step_lost(previous, input);
        };

        self.link.record_valid();

        let resting = VehicleState::default();
        let prev = self.prev_snapshot.as_ref().unwrap_or(&resting);
        let edges = button_edges(prev, snapshot);
        let lockout = self
            .lockout
            .update(snapshot.v_ego, self.params.min_steer_speed);

        let mut events =
            Conditions::new(&self.params, &self.config).evaluate(snapshot, prev, &edges, lockout);
        if !self.started {
            events.add(EventKind::Startup);
            self.started = true;
        }
        events.extend_from(&input.raised);
        events.extend_from(&self.latched);

        self.recurrence.update(&events);
        self.prev_snapshot = Some(snapshot.clone());

        let (state, cause, mut categories) = if previous.is_faulted() {
            match self.link.check() {
                LinkStatus::Healthy => (ControlState::Disabled, None, CategorySet::empty()),
                _ => (ControlState::Faulted, None, CategorySet::empty()),
            }
        } else {
            self.transition(previous, &events)
        };

        if state != ControlState::SoftDisabling {
            self.soft_disable_remaining_ms = 0;
        }
        if state.is_engaged() {
            categories |= CategorySet::WARNING;
        }
        categories |= CategorySet::PERMANENT;

        self.state = state;
        CycleOutcome {
            state,
            previous,
            events,
            alert_categories: categories,
            cause,
            lockout,
        }
    }

    /// Missing or invalid input: fault unconditionally
    fn step_lost(&mut self, previous: ControlState, input: &CycleInput) -> CycleOutcome {
        self.link.record_lost();
        self.prev_snapshot = None;
        self.soft_disable_remaining_ms = 0;

        let mut events = EventSet::new();
        events.add(EventKind::CanError);
        events.extend_from(&input.raised);
        events.extend_from(&self.latched);
        self.recurrence.update(&events);

        let mut categories = CategorySet::PERMANENT;
        let cause = if previous.is_engaged() {
            categories |= CategorySet::IMMEDIATE_DISABLE;
            Some(Category::ImmediateDisable)
        } else {
            None
        };

        self.state = ControlState::Faulted;
        CycleOutcome {
            state: ControlState::Faulted,
            previous,
            events,
            alert_categories: categories,
            cause,
            lockout: self.lockout.is_active(),
        }
    }

    fn transition(
        &mut self,
        current: ControlState,
        events: &EventSet,
    ) -> (ControlState, Option<Category>, CategorySet) {
        use Category::*;
        use ControlState::*;

        let taxonomy = &self.taxonomy;
        let candidate = Category::TRANSITION_PRECEDENCE
            .into_iter()
            .find(|category| taxonomy.any(events, *category));
        let no_entry = taxonomy.any(events, NoEntry);

        match (current, candidate) {
            (Disabled, _) if !taxonomy.any(events, Enable) => (Disabled, None, CategorySet::empty()),

            // An enable is refused by a concurrent no-entry or any disable
            (Disabled, _) if no_entry || candidate != Some(Enable) => {
                let shown = if no_entry {
                    CategorySet::NO_ENTRY
                } else {
                    CategorySet::empty()
                };
                (Disabled, None, shown)
            }

            (Disabled, _) => {
                if taxonomy.any(events, PreEnable) {
                    (PreEnabled, Some(Enable), CategorySet::ENABLE | CategorySet::PRE_ENABLE)
                } else {
                    (Enabled, Some(Enable), CategorySet::ENABLE)
                }
            }

            (Faulted, _) => (Faulted, None, CategorySet::empty()),

            (_, Some(ImmediateDisable)) => {
                (Disabled, Some(ImmediateDisable), CategorySet::IMMEDIATE_DISABLE)
            }
            (_, Some(UserDisable)) => (Disabled, Some(UserDisable), CategorySet::USER_DISABLE),

            (SoftDisabling, Some(SoftDisable)) => {
                self.soft_disable_remaining_ms = self
                    .soft_disable_remaining_ms
                    .saturating_sub(self.config.cycle_period_ms);
                if self.soft_disable_remaining_ms == 0 {
                    (Disabled, Some(SoftDisable), CategorySet::SOFT_DISABLE)
                } else {
                    (SoftDisabling, Some(SoftDisable), CategorySet::SOFT_DISABLE)
                }
            }
            // Not actuating yet; a soft disable must not start the countdown
            (PreEnabled, Some(SoftDisable)) => (PreEnabled, None, CategorySet::SOFT_DISABLE),
            (_, Some(SoftDisable)) => {
                self.soft_disable_remaining_ms = self.config.soft_disable_timeout_ms;
                (SoftDisabling, Some(SoftDisable), CategorySet::SOFT_DISABLE)
            }
            (SoftDisabling, _) => (Enabled, None, CategorySet::empty()),

            (PreEnabled, Some(PreEnable)) => {
                (PreEnabled, Some(PreEnable), CategorySet::PRE_ENABLE)
            }
            (PreEnabled, _) => (Enabled, None, CategorySet::empty()),

            (Enabled, _) => (Enabled, None, CategorySet::empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::snapshot::{CruiseState, GearShifter};
    use helm_protocol::CruiseButton;
    use proptest::prelude::*;

    fn machine() -> ControlStateMachine {
        machine_with(ControlConfig::default())
    }

    fn machine_with(config: ControlConfig) -> ControlStateMachine {
        let params = VehicleParams {
            enable_cruise: false,
            ..Default::default()
        };
        ControlStateMachine::new(Taxonomy::builtin().unwrap(), config, params)
    }

    fn ready() -> VehicleState {
        VehicleState {
            v_ego: 20.0,
            standstill: false,
            gear: GearShifter::Drive,
            cruise: CruiseState {
                enabled: true,
                available: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn input(state: VehicleState) -> CycleInput {
        CycleInput::new(state)
    }

    fn raised(kinds: &[EventKind]) -> CycleInput {
        CycleInput {
            snapshot: Some(ready()),
            raised: kinds.iter().copied().collect(),
        }
    }

    fn engage(m: &mut ControlStateMachine) {
        m.step(&input(ready()));
        let outcome = m.step(&raised(&[EventKind::ButtonEnable]));
        assert_eq!(outcome.state, ControlState::Enabled);
    }

    #[test]
    fn test_starts_disabled() {
        let mut m = machine();
        assert_eq!(m.state(), ControlState::Disabled);
        let outcome = m.step(&input(ready()));
        assert_eq!(outcome.state, ControlState::Disabled);
        assert!(outcome.events.contains(EventKind::Startup));

        // Startup is one-shot
        let outcome = m.step(&input(ready()));
        assert!(!outcome.events.contains(EventKind::Startup));
    }

    #[test]
    fn test_enable_without_no_entry() {
        let mut m = machine();
        m.step(&input(ready()));
        let outcome = m.step(&raised(&[EventKind::ButtonEnable]));
        assert_eq!(outcome.state, ControlState::Enabled);
        assert_eq!(outcome.cause, Some(Category::Enable));
        assert!(outcome.alert_categories.has(Category::Enable));
        assert!(outcome.state.actuation_allowed());
    }

    #[test]
    fn test_no_entry_blocks_enable() {
        let mut m = machine();
        m.step(&input(ready()));
        let door = VehicleState {
            door_open: true,
            ..ready()
        };
        let outcome = m.step(&CycleInput {
            snapshot: Some(door),
            raised: [EventKind::ButtonEnable].into_iter().collect(),
        });
        assert_eq!(outcome.state, ControlState::Disabled);
        assert!(outcome.alert_categories.has(Category::NoEntry));

        let alerts = m.alerts(&outcome, &m.alert_context());
        assert!(alerts
            .iter()
            .any(|a| a.category == Category::NoEntry && a.event == EventKind::DoorOpen));
    }

    #[test]
    fn test_no_entry_applies_only_to_its_cycle() {
        let mut m = machine();
        m.step(&input(ready()));
        m.step(&raised(&[EventKind::ButtonEnable, EventKind::BelowEngageSpeed]));
        assert_eq!(m.state(), ControlState::Disabled);

        let outcome = m.step(&raised(&[EventKind::ButtonEnable]));
        assert_eq!(outcome.state, ControlState::Enabled);
    }

    #[test]
    fn test_pre_enable_holds_then_enables() {
        let mut m = machine();
        m.step(&input(ready()));
        let gas = VehicleState {
            gas_pressed: true,
            ..ready()
        };
        // Gas held from the previous cycle so no pedal edge
        m.step(&input(gas.clone()));
        let outcome = m.step(&CycleInput {
            snapshot: Some(gas.clone()),
            raised: [EventKind::ButtonEnable].into_iter().collect(),
        });
        assert_eq!(outcome.state, ControlState::PreEnabled);
        assert!(!outcome.state.actuation_allowed());

        let outcome = m.step(&input(gas));
        assert_eq!(outcome.state, ControlState::PreEnabled);

        let outcome = m.step(&input(ready()));
        assert_eq!(outcome.state, ControlState::Enabled);
    }

    fn pre_enable(m: &mut ControlStateMachine) -> VehicleState {
        let gas = VehicleState {
            gas_pressed: true,
            ..ready()
        };
        m.step(&input(ready()));
        m.step(&input(gas.clone()));
        let outcome = m.step(&CycleInput {
            snapshot: Some(gas.clone()),
            raised: [EventKind::ButtonEnable].into_iter().collect(),
        });
        assert_eq!(outcome.state, ControlState::PreEnabled);
        gas
    }

    #[test]
    fn test_soft_disable_holds_pre_enabled() {
        let mut m = machine();
        let gas = pre_enable(&mut m);

        let outcome = m.step(&CycleInput {
            snapshot: Some(gas),
            raised: [EventKind::ControlsMismatch].into_iter().collect(),
        });
        assert_eq!(outcome.state, ControlState::PreEnabled);
        assert!(!outcome.state.actuation_allowed());
        assert!(outcome.alert_categories.has(Category::SoftDisable));

        // Still not actuating while the condition persists after the pedal lifts
        let outcome = m.step(&raised(&[EventKind::ControlsMismatch]));
        assert_eq!(outcome.state, ControlState::PreEnabled);
        assert!(!outcome.state.actuation_allowed());
    }

    #[test]
    fn test_pre_enabled_user_and_immediate_disable() {
        for kind in [EventKind::ButtonCancel, EventKind::PlannerError] {
            let mut m = machine();
            pre_enable(&mut m);
            let outcome = m.step(&raised(&[kind]));
            assert_eq!(outcome.state, ControlState::Disabled);
            assert!(!outcome.state.actuation_allowed());
        }
    }

    #[test]
    fn test_user_cancel_disengages() {
        let mut m = machine();
        engage(&mut m);
        let cancel = VehicleState {
            cruise_buttons: CruiseButton::Cancel,
            ..ready()
        };
        let outcome = m.step(&input(cancel));
        assert_eq!(outcome.state, ControlState::Disabled);
        assert_eq!(outcome.cause, Some(Category::UserDisable));
    }

    #[test]
    fn test_immediate_disable_beats_enable() {
        let mut m = machine();
        engage(&mut m);
        let outcome = m.step(&raised(&[EventKind::ButtonEnable, EventKind::PlannerError]));
        assert_eq!(outcome.state, ControlState::Disabled);
        assert!(outcome.alert_categories.has(Category::ImmediateDisable));
    }

    #[test]
    fn test_soft_disable_recovers() {
        let mut m = machine();
        engage(&mut m);
        let outcome = m.step(&raised(&[EventKind::ControlsMismatch]));
        assert_eq!(outcome.state, ControlState::SoftDisabling);
        assert!(outcome.state.actuation_allowed());

        let outcome = m.step(&input(ready()));
        assert_eq!(outcome.state, ControlState::Enabled);
    }

    #[test]
    fn test_soft_disable_times_out() {
        let config = ControlConfig {
            soft_disable_timeout_ms: 50,
            ..Default::default()
        };
        let mut m = machine_with(config);
        engage(&mut m);

        let mut states = std::vec::Vec::new();
        for _ in 0..6 {
            states.push(m.step(&raised(&[EventKind::ControlsMismatch])).state);
        }
        // Entry cycle, four countdown cycles, then disengage
        assert_eq!(
            states,
            vec![
                ControlState::SoftDisabling,
                ControlState::SoftDisabling,
                ControlState::SoftDisabling,
                ControlState::SoftDisabling,
                ControlState::SoftDisabling,
                ControlState::Disabled,
            ]
        );
    }

    #[test]
    fn test_lost_input_faults_and_recovers() {
        let mut m = machine();
        engage(&mut m);

        let outcome = m.step(&CycleInput::missing());
        assert_eq!(outcome.state, ControlState::Faulted);
        assert!(outcome.events.contains(EventKind::CanError));
        assert!(outcome.alert_categories.has(Category::ImmediateDisable));
        assert!(!outcome.state.actuation_allowed());

        let outcome = m.step(&input(ready()));
        assert_eq!(outcome.state, ControlState::Disabled);
    }

    #[test]
    fn test_invalid_can_faults() {
        let mut m = machine();
        m.step(&input(ready()));
        let bad = VehicleState {
            can_valid: false,
            ..ready()
        };
        let outcome = m.step(&input(bad));
        assert_eq!(outcome.state, ControlState::Faulted);
        assert!(!outcome.alert_categories.has(Category::ImmediateDisable));
    }

    #[test]
    fn test_fault_clearing_window() {
        let config = ControlConfig {
            fault_clear_cycles: 3,
            ..Default::default()
        };
        let mut m = machine_with(config);
        m.step(&CycleInput::missing());

        assert_eq!(m.step(&input(ready())).state, ControlState::Faulted);
        assert_eq!(m.step(&input(ready())).state, ControlState::Faulted);
        assert_eq!(m.step(&input(ready())).state, ControlState::Disabled);
    }

    #[test]
    fn test_latched_event_reappears() {
        let mut m = machine();
        m.latch(EventKind::CarUnrecognized);
        for _ in 0..3 {
            let outcome = m.step(&input(ready()));
            assert!(outcome.events.contains(EventKind::CarUnrecognized));
        }
        assert_eq!(m.recurrence().count(EventKind::CarUnrecognized), 3);

        m.unlatch(EventKind::CarUnrecognized);
        let outcome = m.step(&input(ready()));
        assert!(!outcome.events.contains(EventKind::CarUnrecognized));
        assert_eq!(m.recurrence().count(EventKind::CarUnrecognized), 0);
    }

    #[test]
    fn test_warnings_surface_only_while_engaged() {
        let mut m = machine();
        let outcome = m.step(&input(ready()));
        assert!(!outcome.alert_categories.has(Category::Warning));
        assert!(outcome.alert_categories.has(Category::Permanent));

        engage(&mut m);
        let outcome = m.step(&input(ready()));
        assert!(outcome.alert_categories.has(Category::Warning));
    }

    #[test]
    fn test_lockout_raises_below_steer_speed() {
        let mut m = ControlStateMachine::new(
            Taxonomy::builtin().unwrap(),
            ControlConfig::default(),
            VehicleParams {
                min_steer_speed: 10.0,
                enable_cruise: false,
                ..Default::default()
            },
        );
        let slow = VehicleState {
            v_ego: 10.19,
            ..ready()
        };
        let outcome = m.step(&input(slow));
        assert!(outcome.lockout);
        assert!(outcome.events.contains(EventKind::BelowSteerSpeed));

        let fast = VehicleState {
            v_ego: 10.71,
            ..ready()
        };
        let outcome = m.step(&input(fast));
        assert!(!outcome.lockout);
    }

    proptest! {
        #[test]
        fn prop_disable_never_raises_authorization(
            start in 0usize..4,
            disable in 0usize..3,
            extra in proptest::collection::vec(0..EventKind::COUNT, 0..8),
        ) {
            let mut m = machine();
            match start {
                0 => {
                    m.step(&input(ready()));
                }
                1 => engage(&mut m),
                2 => {
                    pre_enable(&mut m);
                }
                _ => {
                    engage(&mut m);
                    m.step(&raised(&[EventKind::ControlsMismatch]));
                }
            }
            let before = m.state().actuation_allowed();

            let mut kinds: std::vec::Vec<EventKind> =
                extra.iter().map(|i| EventKind::ALL[*i]).collect();
            kinds.push(
                [EventKind::ControlsMismatch, EventKind::ButtonCancel, EventKind::PlannerError][disable],
            );
            let outcome = m.step(&raised(&kinds));
            prop_assert!(before || !outcome.state.actuation_allowed());
        }

        #[test]
        fn prop_immediate_disable_never_leaves_enabled(
            extra in proptest::collection::vec(0..EventKind::COUNT, 0..8),
        ) {
            let mut m = machine();
            engage(&mut m);

            let mut kinds: std::vec::Vec<EventKind> =
                extra.iter().map(|i| EventKind::ALL[*i]).collect();
            kinds.push(EventKind::RelayMalfunction);
            let outcome = m.step(&raised(&kinds));
            prop_assert_ne!(outcome.state, ControlState::Enabled);
            prop_assert!(!outcome.state.is_engaged());
        }
    }
}

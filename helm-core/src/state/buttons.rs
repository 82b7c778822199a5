//! Button edges
//!
//! Edges come from comparing two consecutive snapshots. A change of the
//! stalk code produces one edge: a press of the new button, or a release of
//! the previous one when the stalk returns to rest.

use heapless::Vec;

use helm_protocol::CruiseButton;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::snapshot::VehicleState;

/// Edges per cycle: one stalk edge plus one main-switch edge
pub const MAX_BUTTON_EDGES: usize = 2;

/// Logical button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ButtonKind {
    Unknown,
    AccelCruise,
    DecelCruise,
    GapAdjust,
    Cancel,
    MainSwitch,
}

impl From<CruiseButton> for ButtonKind {
    fn from(button: CruiseButton) -> Self {
        match button {
            CruiseButton::ResAccel => ButtonKind::AccelCruise,
            CruiseButton::SetDecel => ButtonKind::DecelCruise,
            CruiseButton::GapDist => ButtonKind::GapAdjust,
            CruiseButton::Cancel => ButtonKind::Cancel,
            CruiseButton::None => ButtonKind::Unknown,
        }
    }
}

/// A press (false→true) or release (true→false)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonEdge {
    pub kind: ButtonKind,
    pub pressed: bool,
}

impl ButtonEdge {
    pub fn is_press(&self, kind: ButtonKind) -> bool {
        self.kind == kind && self.pressed
    }

    pub fn is_release(&self, kind: ButtonKind) -> bool {
        self.kind == kind && !self.pressed
    }
}

pub type ButtonEdges = Vec<ButtonEdge, MAX_BUTTON_EDGES>;

/// Derive this cycle's button edges
pub fn button_edges(prev: &VehicleState, curr: &VehicleState) -> ButtonEdges {
    let mut edges = ButtonEdges::new();

    if curr.cruise_buttons != prev.cruise_buttons {
        let pressed = curr.cruise_buttons != CruiseButton::None;
        let button = if pressed {
            curr.cruise_buttons
        } else {
            prev.cruise_buttons
        };
        let _ = edges.push(ButtonEdge {
            kind: button.into(),
            pressed,
        });
    }

    if curr.cruise_main_button != prev.cruise_main_button {
        let _ = edges.push(ButtonEdge {
            kind: ButtonKind::MainSwitch,
            pressed: curr.cruise_main_button,
        });
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_button(button: CruiseButton) -> VehicleState {
        VehicleState {
            cruise_buttons: button,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_change_no_edge() {
        let held = with_button(CruiseButton::SetDecel);
        assert!(button_edges(&held, &held).is_empty());
    }

    #[test]
    fn test_press_and_release() {
        let rest = with_button(CruiseButton::None);
        let decel = with_button(CruiseButton::SetDecel);

        let press = button_edges(&rest, &decel);
        assert_eq!(press.len(), 1);
        assert!(press[0].is_press(ButtonKind::DecelCruise));

        let release = button_edges(&decel, &rest);
        assert_eq!(release.len(), 1);
        assert!(release[0].is_release(ButtonKind::DecelCruise));
    }

    #[test]
    fn test_switching_buttons_reports_new_press() {
        let accel = with_button(CruiseButton::ResAccel);
        let cancel = with_button(CruiseButton::Cancel);
        let edges = button_edges(&accel, &cancel);
        assert_eq!(edges.len(), 1);
        assert!(edges[0].is_press(ButtonKind::Cancel));
    }

    #[test]
    fn test_main_switch_edge() {
        let off = VehicleState::default();
        let on = VehicleState {
            cruise_main_button: true,
            cruise_buttons: CruiseButton::GapDist,
            ..Default::default()
        };
        let edges = button_edges(&off, &on);
        assert_eq!(edges.len(), 2);
        assert!(edges[0].is_press(ButtonKind::GapAdjust));
        assert!(edges[1].is_press(ButtonKind::MainSwitch));
    }
}

//! Alert presentation
//!
//! An [`AlertSpec`] is what the driver sees and hears for one
//! (event, category) pair. Most are static table entries; a few depend on
//! runtime context and are produced by a function when requested.

use core::fmt::Write;

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::kind::EventKind;
use crate::context::AlertContext;

/// Maximum length of one formatted alert line
pub const MAX_ALERT_TEXT: usize = 80;

/// Maximum length of an alert type identifier
pub const MAX_ALERT_TYPE: usize = 48;

/// Alert urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlertStatus {
    Normal,
    UserPrompt,
    Critical,
}

/// Screen area used by an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlertSize {
    None,
    Small,
    Mid,
    Full,
}

/// Alert priority, higher wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Priority(pub u8);

impl Priority {
    pub const LOWEST: Priority = Priority(0);
    pub const LOWER: Priority = Priority(1);
    pub const LOW: Priority = Priority(2);
    pub const MID: Priority = Priority(3);
    pub const HIGH: Priority = Priority(4);
    pub const HIGHEST: Priority = Priority(5);
}

/// Cluster indication requested alongside an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VisualAlert {
    None,
    Fcw,
    SteerRequired,
    BrakePressed,
    WrongGear,
    SeatbeltUnbuckled,
    SpeedTooHigh,
}

/// Sound requested alongside an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AudibleAlert {
    None,
    ChimeEngage,
    ChimeDisengage,
    ChimeError,
    ChimePrompt,
    ChimeWarning1,
    ChimeWarning2,
    ChimeWarningRepeat,
    ChimeWarning2Repeat,
}

/// One line of alert text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertText {
    Static(&'static str),
    Owned(String<MAX_ALERT_TEXT>),
}

impl AlertText {
    pub fn as_str(&self) -> &str {
        match self {
            AlertText::Static(s) => s,
            AlertText::Owned(s) => s.as_str(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Format into an owned line
    ///
    /// Every built-in computed line fits in [`MAX_ALERT_TEXT`] for any
    /// context value; pieces past that length would be dropped.
    pub fn format(args: core::fmt::Arguments<'_>) -> Self {
        let mut text = String::new();
        let _ = text.write_fmt(args);
        AlertText::Owned(text)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AlertText {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str())
    }
}

/// Presentation of one (event, category) pair
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlertSpec {
    pub text_1: AlertText,
    pub text_2: AlertText,
    pub status: AlertStatus,
    pub size: AlertSize,
    pub priority: Priority,
    pub visual: VisualAlert,
    pub audible: AudibleAlert,
    /// How long the sound plays
    pub duration_sound_ms: u32,
    /// How long the cluster indication stays on
    pub duration_hud_ms: u32,
    /// How long the text stays on screen
    pub duration_text_ms: u32,
    /// Blink rate for repeating alerts (Hz)
    pub rate: Option<f32>,
    /// Continuous presence required before the alert surfaces
    pub creation_delay_ms: u32,
}

impl AlertSpec {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        text_1: &'static str,
        text_2: &'static str,
        status: AlertStatus,
        size: AlertSize,
        priority: Priority,
        visual: VisualAlert,
        audible: AudibleAlert,
        duration_sound_ms: u32,
        duration_hud_ms: u32,
        duration_text_ms: u32,
    ) -> Self {
        Self {
            text_1: AlertText::Static(text_1),
            text_2: AlertText::Static(text_2),
            status,
            size,
            priority,
            visual,
            audible,
            duration_sound_ms,
            duration_hud_ms,
            duration_text_ms,
            rate: None,
            creation_delay_ms: 0,
        }
    }

    pub const fn with_rate(mut self, rate: f32) -> Self {
        self.rate = Some(rate);
        self
    }

    pub const fn with_creation_delay(mut self, delay_ms: u32) -> Self {
        self.creation_delay_ms = delay_ms;
        self
    }

    pub const fn with_hud_duration(mut self, duration_ms: u32) -> Self {
        self.duration_hud_ms = duration_ms;
        self
    }

    pub const fn with_visual(mut self, visual: VisualAlert) -> Self {
        self.visual = visual;
        self
    }

    pub const fn with_audible(mut self, audible: AudibleAlert) -> Self {
        self.audible = audible;
        self
    }

    /// Replace the first line
    pub fn with_text_1(mut self, text: AlertText) -> Self {
        self.text_1 = text;
        self
    }

    /// Replace the second line
    pub fn with_text_2(mut self, text: AlertText) -> Self {
        self.text_2 = text;
        self
    }
}

/// Where an alert comes from
#[derive(Debug, Clone)]
pub enum AlertSource {
    /// Fixed presentation
    Static(AlertSpec),
    /// Built from runtime context when requested
    Computed(fn(&AlertContext) -> AlertSpec),
}

impl AlertSource {
    /// Produce the presentation for this cycle
    pub fn materialize(&self, ctx: &AlertContext) -> AlertSpec {
        match self {
            AlertSource::Static(spec) => spec.clone(),
            AlertSource::Computed(build) => build(ctx),
        }
    }
}

/// An arbitrated alert ready to surface
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Alert {
    pub event: EventKind,
    pub category: Category,
    pub spec: AlertSpec,
}

impl Alert {
    /// Identifier of the form `<eventName>/<category>`
    pub fn alert_type(&self) -> String<MAX_ALERT_TYPE> {
        let mut id = String::new();
        let _ = write!(id, "{}/{}", self.event.name(), self.category.name());
        id
    }

    pub fn priority(&self) -> Priority {
        self.spec.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: AlertSpec = AlertSpec::new(
        "Take Control",
        "",
        AlertStatus::UserPrompt,
        AlertSize::Mid,
        Priority::LOW,
        VisualAlert::None,
        AudibleAlert::None,
        0,
        0,
        200,
    );

    #[test]
    fn test_alert_type_identifier() {
        let alert = Alert {
            event: EventKind::PromptDriverUnresponsive,
            category: Category::ImmediateDisable,
            spec: SPEC,
        };
        assert_eq!(
            alert.alert_type().as_str(),
            "promptDriverUnresponsive/immediateDisable"
        );
    }

    #[test]
    fn test_priority_order() {
        assert!(Priority::HIGHEST > Priority::HIGH);
        assert!(Priority::LOWER > Priority::LOWEST);
    }

    #[test]
    fn test_builders() {
        let spec = SPEC.with_creation_delay(1000).with_rate(0.75);
        assert_eq!(spec.creation_delay_ms, 1000);
        assert_eq!(spec.rate, Some(0.75));
        assert_eq!(spec.text_1.as_str(), "Take Control");
    }

    #[test]
    fn test_formatted_text() {
        let text = AlertText::format(format_args!("Steer above {} {}", 32, "km/h"));
        assert_eq!(text.as_str(), "Steer above 32 km/h");
        assert!(AlertText::Static("").is_empty());
    }
}

//! Event kinds
//!
//! The declaration order of [`EventKind`] is the canonical event order. It
//! is also the order of the built-in taxonomy table, so equal-priority
//! alerts resolve to the kind declared first.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A detectable condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum EventKind {
    // Shown in every state
    DebugAlert,
    /// Controls started and ready to engage
    Startup,
    StartupNoControl,
    StartupNoCar,
    CarUnrecognized,
    InvalidLkasSetting,
    StockAeb,
    StockFcw,
    Fcw,
    Ldw,

    // Shown while engaged
    /// Gas held during engagement
    GasPressed,
    VehicleModelInvalid,
    SteerTempUnavailableMute,
    PreDriverDistracted,
    PromptDriverDistracted,
    DriverDistracted,
    PreDriverUnresponsive,
    PromptDriverUnresponsive,
    DriverUnresponsive,
    DriverMonitorLowAcc,
    ManualRestart,
    ResumeRequired,
    /// Speed under the steering cut-off while the lockout is active
    BelowSteerSpeed,
    PreLaneChangeLeft,
    PreLaneChangeRight,
    LaneChangeBlocked,
    LaneChange,
    SteerSaturated,
    /// Blinker on below lane-change speed
    TurningIndicatorOn,
    LkasButtonOff,
    /// Automatic lane change counting down
    AutoLaneChange,

    // Affect engagement transitions
    /// Stock cruise engaged this cycle
    PcmEnable,
    /// Cruise button released with engagement requested
    ButtonEnable,
    /// Stock cruise not engaged
    PcmDisable,
    /// Cancel button pressed
    ButtonCancel,
    BrakeHold,
    ParkBrake,
    /// Gas pressed, or brake pressed while moving
    PedalPressed,
    /// Cruise main switch off
    WrongCarMode,
    WrongCruiseMode,
    /// Steering rack reports a temporary fault
    SteerTempUnavailable,
    FocusRecoverActive,
    OutOfSpace,
    BelowEngageSpeed,
    SensorDataInvalid,
    /// No GPS fix
    NoGps,
    SoundsUnavailable,
    TooDistracted,
    Overheat,
    WrongGear,
    CalibrationInvalid,
    CalibrationIncomplete,
    DoorOpen,
    SeatbeltNotLatched,
    EspDisabled,
    LowBattery,
    CommIssue,
    RadarCommIssue,
    RadarCanError,
    RadarFault,
    ModelLagging,
    PosenetInvalid,
    DeviceFalling,
    LowMemory,
    ControlsFailed,
    ControlsMismatch,
    /// Vehicle snapshot missing or bus data invalid
    CanError,
    /// Steering rack reports a permanent fault
    SteerUnavailable,
    /// Radar cruise faulted under Helm longitudinal control
    BrakeUnavailable,
    GasUnavailable,
    ReverseGear,
    CruiseDisabled,
    PlannerError,
    RelayMalfunction,
    NoTarget,
    SpeedTooLow,
    SpeedTooHigh,
    LowSpeedLockout,
}

impl EventKind {
    /// Number of event kinds
    pub const COUNT: usize = 78;

    /// Every kind in declaration order
    pub const ALL: [EventKind; Self::COUNT] = [
        EventKind::DebugAlert,
        EventKind::Startup,
        EventKind::StartupNoControl,
        EventKind::StartupNoCar,
        EventKind::CarUnrecognized,
        EventKind::InvalidLkasSetting,
        EventKind::StockAeb,
        EventKind::StockFcw,
        EventKind::Fcw,
        EventKind::Ldw,
        EventKind::GasPressed,
        EventKind::VehicleModelInvalid,
        EventKind::SteerTempUnavailableMute,
        EventKind::PreDriverDistracted,
        EventKind::PromptDriverDistracted,
        EventKind::DriverDistracted,
        EventKind::PreDriverUnresponsive,
        EventKind::PromptDriverUnresponsive,
        EventKind::DriverUnresponsive,
        EventKind::DriverMonitorLowAcc,
        EventKind::ManualRestart,
        EventKind::ResumeRequired,
        EventKind::BelowSteerSpeed,
        EventKind::PreLaneChangeLeft,
        EventKind::PreLaneChangeRight,
        EventKind::LaneChangeBlocked,
        EventKind::LaneChange,
        EventKind::SteerSaturated,
        EventKind::TurningIndicatorOn,
        EventKind::LkasButtonOff,
        EventKind::AutoLaneChange,
        EventKind::PcmEnable,
        EventKind::ButtonEnable,
        EventKind::PcmDisable,
        EventKind::ButtonCancel,
        EventKind::BrakeHold,
        EventKind::ParkBrake,
        EventKind::PedalPressed,
        EventKind::WrongCarMode,
        EventKind::WrongCruiseMode,
        EventKind::SteerTempUnavailable,
        EventKind::FocusRecoverActive,
        EventKind::OutOfSpace,
        EventKind::BelowEngageSpeed,
        EventKind::SensorDataInvalid,
        EventKind::NoGps,
        EventKind::SoundsUnavailable,
        EventKind::TooDistracted,
        EventKind::Overheat,
        EventKind::WrongGear,
        EventKind::CalibrationInvalid,
        EventKind::CalibrationIncomplete,
        EventKind::DoorOpen,
        EventKind::SeatbeltNotLatched,
        EventKind::EspDisabled,
        EventKind::LowBattery,
        EventKind::CommIssue,
        EventKind::RadarCommIssue,
        EventKind::RadarCanError,
        EventKind::RadarFault,
        EventKind::ModelLagging,
        EventKind::PosenetInvalid,
        EventKind::DeviceFalling,
        EventKind::LowMemory,
        EventKind::ControlsFailed,
        EventKind::ControlsMismatch,
        EventKind::CanError,
        EventKind::SteerUnavailable,
        EventKind::BrakeUnavailable,
        EventKind::GasUnavailable,
        EventKind::ReverseGear,
        EventKind::CruiseDisabled,
        EventKind::PlannerError,
        EventKind::RelayMalfunction,
        EventKind::NoTarget,
        EventKind::SpeedTooLow,
        EventKind::SpeedTooHigh,
        EventKind::LowSpeedLockout,
    ];

    /// Position in declaration order
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Kind at a declaration index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Name used in alert type identifiers
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::DebugAlert => "debugAlert",
            EventKind::Startup => "startup",
            EventKind::StartupNoControl => "startupNoControl",
            EventKind::StartupNoCar => "startupNoCar",
            EventKind::CarUnrecognized => "carUnrecognized",
            EventKind::InvalidLkasSetting => "invalidLkasSetting",
            EventKind::StockAeb => "stockAeb",
            EventKind::StockFcw => "stockFcw",
            EventKind::Fcw => "fcw",
            EventKind::Ldw => "ldw",
            EventKind::GasPressed => "gasPressed",
            EventKind::VehicleModelInvalid => "vehicleModelInvalid",
            EventKind::SteerTempUnavailableMute => "steerTempUnavailableMute",
            EventKind::PreDriverDistracted => "preDriverDistracted",
            EventKind::PromptDriverDistracted => "promptDriverDistracted",
            EventKind::DriverDistracted => "driverDistracted",
            EventKind::PreDriverUnresponsive => "preDriverUnresponsive",
            EventKind::PromptDriverUnresponsive => "promptDriverUnresponsive",
            EventKind::DriverUnresponsive => "driverUnresponsive",
            EventKind::DriverMonitorLowAcc => "driverMonitorLowAcc",
            EventKind::ManualRestart => "manualRestart",
            EventKind::ResumeRequired => "resumeRequired",
            EventKind::BelowSteerSpeed => "belowSteerSpeed",
            EventKind::PreLaneChangeLeft => "preLaneChangeLeft",
            EventKind::PreLaneChangeRight => "preLaneChangeRight",
            EventKind::LaneChangeBlocked => "laneChangeBlocked",
            EventKind::LaneChange => "laneChange",
            EventKind::SteerSaturated => "steerSaturated",
            EventKind::TurningIndicatorOn => "turningIndicatorOn",
            EventKind::LkasButtonOff => "lkasButtonOff",
            EventKind::AutoLaneChange => "autoLaneChange",
            EventKind::PcmEnable => "pcmEnable",
            EventKind::ButtonEnable => "buttonEnable",
            EventKind::PcmDisable => "pcmDisable",
            EventKind::ButtonCancel => "buttonCancel",
            EventKind::BrakeHold => "brakeHold",
            EventKind::ParkBrake => "parkBrake",
            EventKind::PedalPressed => "pedalPressed",
            EventKind::WrongCarMode => "wrongCarMode",
            EventKind::WrongCruiseMode => "wrongCruiseMode",
            EventKind::SteerTempUnavailable => "steerTempUnavailable",
            EventKind::FocusRecoverActive => "focusRecoverActive",
            EventKind::OutOfSpace => "outOfSpace",
            EventKind::BelowEngageSpeed => "belowEngageSpeed",
            EventKind::SensorDataInvalid => "sensorDataInvalid",
            EventKind::NoGps => "noGps",
            EventKind::SoundsUnavailable => "soundsUnavailable",
            EventKind::TooDistracted => "tooDistracted",
            EventKind::Overheat => "overheat",
            EventKind::WrongGear => "wrongGear",
            EventKind::CalibrationInvalid => "calibrationInvalid",
            EventKind::CalibrationIncomplete => "calibrationIncomplete",
            EventKind::DoorOpen => "doorOpen",
            EventKind::SeatbeltNotLatched => "seatbeltNotLatched",
            EventKind::EspDisabled => "espDisabled",
            EventKind::LowBattery => "lowBattery",
            EventKind::CommIssue => "commIssue",
            EventKind::RadarCommIssue => "radarCommIssue",
            EventKind::RadarCanError => "radarCanError",
            EventKind::RadarFault => "radarFault",
            EventKind::ModelLagging => "modelLagging",
            EventKind::PosenetInvalid => "posenetInvalid",
            EventKind::DeviceFalling => "deviceFalling",
            EventKind::LowMemory => "lowMemory",
            EventKind::ControlsFailed => "controlsFailed",
            EventKind::ControlsMismatch => "controlsMismatch",
            EventKind::CanError => "canError",
            EventKind::SteerUnavailable => "steerUnavailable",
            EventKind::BrakeUnavailable => "brakeUnavailable",
            EventKind::GasUnavailable => "gasUnavailable",
            EventKind::ReverseGear => "reverseGear",
            EventKind::CruiseDisabled => "cruiseDisabled",
            EventKind::PlannerError => "plannerError",
            EventKind::RelayMalfunction => "relayMalfunction",
            EventKind::NoTarget => "noTarget",
            EventKind::SpeedTooLow => "speedTooLow",
            EventKind::SpeedTooHigh => "speedTooHigh",
            EventKind::LowSpeedLockout => "lowSpeedLockout",
        }
    }
}

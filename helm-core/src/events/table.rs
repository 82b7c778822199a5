//! Built-in event declarations
//!
//! Entries appear in [`EventKind`] declaration order.

use super::alert::AlertSource::{Computed, Static};
use super::alert::AlertStatus::{Critical, Normal, UserPrompt};
use super::alert::{AlertSize, AlertSpec, AlertText, AudibleAlert, Priority, VisualAlert};
use super::category::Category::*;
use super::kind::EventKind;
use super::taxonomy::EventDecl;
use crate::context::{round_positive, AlertContext, CALIBRATION_MIN_SPEED};

const TAKE_CONTROL_NOW: &str = "TAKE CONTROL IMMEDIATELY";
const HANDS_ON: &str = "Always keep hands on wheel and eyes on road";

const fn no_entry(text_2: &'static str) -> AlertSpec {
    AlertSpec::new(
        "Helm Unavailable",
        text_2,
        Normal,
        AlertSize::Mid,
        Priority::LOW,
        VisualAlert::None,
        AudibleAlert::ChimeError,
        400,
        2000,
        3000,
    )
}

const fn soft_disable(text_2: &'static str) -> AlertSpec {
    AlertSpec::new(
        TAKE_CONTROL_NOW,
        text_2,
        Critical,
        AlertSize::Full,
        Priority::MID,
        VisualAlert::SteerRequired,
        AudibleAlert::ChimeWarningRepeat,
        100,
        2000,
        2000,
    )
}

const fn immediate_disable(text_2: &'static str) -> AlertSpec {
    AlertSpec::new(
        TAKE_CONTROL_NOW,
        text_2,
        Critical,
        AlertSize::Full,
        Priority::HIGHEST,
        VisualAlert::SteerRequired,
        AudibleAlert::ChimeWarningRepeat,
        2200,
        3000,
        4000,
    )
}

const fn engagement(audible: AudibleAlert) -> AlertSpec {
    AlertSpec::new(
        "",
        "",
        Normal,
        AlertSize::None,
        Priority::MID,
        VisualAlert::None,
        audible,
        200,
        0,
        0,
    )
}

const fn startup(text_1: &'static str, status: super::alert::AlertStatus) -> AlertSpec {
    AlertSpec::new(
        text_1,
        HANDS_ON,
        status,
        AlertSize::Mid,
        Priority::LOWER,
        VisualAlert::None,
        AudibleAlert::None,
        0,
        0,
        15000,
    )
}

const fn fault_banner(text_1: &'static str, priority: Priority) -> AlertSpec {
    AlertSpec::new(
        text_1,
        "",
        Normal,
        AlertSize::Small,
        priority,
        VisualAlert::None,
        AudibleAlert::None,
        0,
        0,
        200,
    )
}

const fn device_notice(text_1: &'static str, text_2: &'static str) -> AlertSpec {
    AlertSpec::new(
        text_1,
        text_2,
        Normal,
        AlertSize::Mid,
        Priority::LOWER,
        VisualAlert::None,
        AudibleAlert::None,
        0,
        0,
        200,
    )
}

const fn take_control(text_2: &'static str, visual: VisualAlert) -> AlertSpec {
    AlertSpec::new(
        "TAKE CONTROL",
        text_2,
        UserPrompt,
        AlertSize::Mid,
        Priority::LOW,
        visual,
        AudibleAlert::None,
        0,
        0,
        200,
    )
}

const fn lane_change(text_1: &'static str) -> AlertSpec {
    AlertSpec::new(
        text_1,
        "Monitor Other Vehicles",
        Normal,
        AlertSize::Mid,
        Priority::LOW,
        VisualAlert::SteerRequired,
        AudibleAlert::None,
        0,
        100,
        100,
    )
}

const DISENGAGE: AlertSpec = engagement(AudibleAlert::ChimeDisengage);
const ENGAGE: AlertSpec = engagement(AudibleAlert::ChimeEngage);

fn below_steer_speed_alert(ctx: &AlertContext) -> AlertSpec {
    let speed = round_positive(ctx.display_speed(ctx.min_steer_speed));
    AlertSpec::new(
        "TAKE CONTROL",
        "",
        UserPrompt,
        AlertSize::Mid,
        Priority::MID,
        VisualAlert::SteerRequired,
        AudibleAlert::None,
        0,
        400,
        300,
    )
    .with_text_2(AlertText::format(format_args!(
        "Steer Unavailable Below {} {}",
        speed,
        ctx.speed_unit()
    )))
}

fn calibration_incomplete_alert(ctx: &AlertContext) -> AlertSpec {
    // Truncated, not rounded
    let speed = ctx.display_speed(CALIBRATION_MIN_SPEED) as u32;
    AlertSpec::new(
        "",
        "",
        Normal,
        AlertSize::Mid,
        Priority::LOWEST,
        VisualAlert::None,
        AudibleAlert::None,
        0,
        0,
        200,
    )
    .with_text_1(AlertText::format(format_args!(
        "Calibration in Progress: {}%",
        ctx.calibration_percent
    )))
    .with_text_2(AlertText::format(format_args!(
        "Drive Above {} {}",
        speed,
        ctx.speed_unit()
    )))
}

fn no_gps_alert(ctx: &AlertContext) -> AlertSpec {
    let hint = if ctx.gps_integrated {
        "If sky is visible, check the GPS connection"
    } else {
        "Check GPS antenna placement"
    };
    AlertSpec::new(
        "Poor GPS reception",
        hint,
        Normal,
        AlertSize::Mid,
        Priority::LOWER,
        VisualAlert::None,
        AudibleAlert::None,
        0,
        0,
        200,
    )
    .with_creation_delay(300_000)
}

fn wrong_car_mode_alert(_ctx: &AlertContext) -> AlertSpec {
    no_entry("Cruise Mode Disabled").with_hud_duration(0)
}

fn auto_lane_change_alert(ctx: &AlertContext) -> AlertSpec {
    lane_change("")
        .with_text_1(AlertText::format(format_args!(
            "Auto Lane Change starts in {} sec",
            ctx.lane_change_countdown_s
        )))
        .with_rate(0.75)
}

/// Built-in declaration table
pub static DECLARATIONS: [EventDecl; EventKind::COUNT] = [
    // Shown in every state
    EventDecl {
        kind: EventKind::DebugAlert,
        alerts: &[(
            Permanent,
            Static(AlertSpec::new(
                "DEBUG ALERT",
                "",
                UserPrompt,
                AlertSize::Mid,
                Priority::LOW,
                VisualAlert::None,
                AudibleAlert::None,
                100,
                100,
                100,
            )),
        )],
    },
    EventDecl {
        kind: EventKind::Startup,
        alerts: &[(Permanent, Static(startup("Be ready to take over at any time", Normal)))],
    },
    EventDecl {
        kind: EventKind::StartupNoControl,
        alerts: &[(Permanent, Static(startup("Dashcam mode", Normal)))],
    },
    EventDecl {
        kind: EventKind::StartupNoCar,
        alerts: &[(Permanent, Static(startup("Dashcam mode for unsupported car", Normal)))],
    },
    EventDecl {
        kind: EventKind::CarUnrecognized,
        alerts: &[(
            Permanent,
            Static(AlertSpec::new(
                "Dashcam Mode",
                "Car Unrecognized",
                Normal,
                AlertSize::Mid,
                Priority::LOWEST,
                VisualAlert::None,
                AudibleAlert::None,
                0,
                0,
                200,
            )),
        )],
    },
    EventDecl {
        kind: EventKind::InvalidLkasSetting,
        alerts: &[(
            Permanent,
            Static(device_notice("Stock LKAS is turned on", "Turn off stock LKAS to engage")),
        )],
    },
    EventDecl {
        kind: EventKind::StockAeb,
        alerts: &[(
            Permanent,
            Static(AlertSpec::new(
                "BRAKE!",
                "Stock AEB: Risk of Collision",
                Critical,
                AlertSize::Full,
                Priority::HIGHEST,
                VisualAlert::Fcw,
                AudibleAlert::None,
                1000,
                2000,
                2000,
            )),
        )],
    },
    EventDecl {
        kind: EventKind::StockFcw,
        alerts: &[(
            Permanent,
            Static(AlertSpec::new(
                "BRAKE!",
                "Stock FCW: Risk of Collision",
                Critical,
                AlertSize::Full,
                Priority::HIGHEST,
                VisualAlert::Fcw,
                AudibleAlert::None,
                1000,
                2000,
                2000,
            )),
        )],
    },
    EventDecl {
        kind: EventKind::Fcw,
        alerts: &[(
            Permanent,
            Static(AlertSpec::new(
                "BRAKE!",
                "Risk of Collision",
                Critical,
                AlertSize::Full,
                Priority::HIGHEST,
                VisualAlert::Fcw,
                AudibleAlert::ChimeWarningRepeat,
                1000,
                2000,
                2000,
            )),
        )],
    },
    EventDecl {
        kind: EventKind::Ldw,
        alerts: &[(
            Permanent,
            Static(AlertSpec::new(
                "TAKE CONTROL",
                "Lane Departure Detected",
                UserPrompt,
                AlertSize::Mid,
                Priority::LOW,
                VisualAlert::SteerRequired,
                AudibleAlert::ChimePrompt,
                1000,
                2000,
                3000,
            )),
        )],
    },
    // Shown while engaged
    EventDecl {
        kind: EventKind::GasPressed,
        alerts: &[(
            PreEnable,
            Static(AlertSpec::new(
                "Helm will not brake while gas pressed",
                "",
                Normal,
                AlertSize::Small,
                Priority::LOWEST,
                VisualAlert::None,
                AudibleAlert::None,
                0,
                0,
                100,
            )),
        )],
    },
    EventDecl {
        kind: EventKind::VehicleModelInvalid,
        alerts: &[(
            Warning,
            Static(AlertSpec::new(
                "Vehicle Parameter Identification Failed",
                "",
                Normal,
                AlertSize::Small,
                Priority::LOWEST,
                VisualAlert::SteerRequired,
                AudibleAlert::None,
                0,
                0,
                100,
            )),
        )],
    },
    EventDecl {
        kind: EventKind::SteerTempUnavailableMute,
        alerts: &[(
            Warning,
            Static(AlertSpec::new(
                "TAKE CONTROL",
                "Steering Temporarily Unavailable",
                UserPrompt,
                AlertSize::Mid,
                Priority::LOW,
                VisualAlert::None,
                AudibleAlert::None,
                200,
                200,
                200,
            )),
        )],
    },
    EventDecl {
        kind: EventKind::PreDriverDistracted,
        alerts: &[(
            Warning,
            Static(
                AlertSpec::new(
                    "KEEP EYES ON ROAD: Driver Distracted",
                    "",
                    Normal,
                    AlertSize::Small,
                    Priority::LOW,
                    VisualAlert::SteerRequired,
                    AudibleAlert::None,
                    0,
                    100,
                    100,
                )
                .with_rate(0.75),
            ),
        )],
    },
    EventDecl {
        kind: EventKind::PromptDriverDistracted,
        alerts: &[(
            Warning,
            Static(AlertSpec::new(
                "KEEP EYES ON ROAD",
                "Driver Appears Distracted",
                UserPrompt,
                AlertSize::Mid,
                Priority::MID,
                VisualAlert::SteerRequired,
                AudibleAlert::ChimeWarning2Repeat,
                100,
                100,
                100,
            )),
        )],
    },
    EventDecl {
        kind: EventKind::DriverDistracted,
        alerts: &[(
            Warning,
            Static(AlertSpec::new(
                "DISENGAGE IMMEDIATELY",
                "Driver Was Distracted",
                Critical,
                AlertSize::Full,
                Priority::HIGH,
                VisualAlert::SteerRequired,
                AudibleAlert::ChimeWarningRepeat,
                100,
                100,
                100,
            )),
        )],
    },
    EventDecl {
        kind: EventKind::PreDriverUnresponsive,
        alerts: &[(
            Warning,
            Static(
                AlertSpec::new(
                    "TOUCH STEERING WHEEL: No Face Detected",
                    "",
                    Normal,
                    AlertSize::Small,
                    Priority::LOW,
                    VisualAlert::SteerRequired,
                    AudibleAlert::None,
                    0,
                    100,
                    100,
                )
                .with_rate(0.75),
            ),
        )],
    },
    EventDecl {
        kind: EventKind::PromptDriverUnresponsive,
        alerts: &[(
            Warning,
            Static(AlertSpec::new(
                "TOUCH STEERING WHEEL",
                "Driver Is Unresponsive",
                UserPrompt,
                AlertSize::Mid,
                Priority::MID,
                VisualAlert::SteerRequired,
                AudibleAlert::ChimeWarning2Repeat,
                100,
                100,
                100,
            )),
        )],
    },
    EventDecl {
        kind: EventKind::DriverUnresponsive,
        alerts: &[(
            Warning,
            Static(AlertSpec::new(
                "DISENGAGE IMMEDIATELY",
                "Driver Was Unresponsive",
                Critical,
                AlertSize::Full,
                Priority::HIGH,
                VisualAlert::SteerRequired,
                AudibleAlert::ChimeWarningRepeat,
                100,
                100,
                100,
            )),
        )],
    },
    EventDecl {
        kind: EventKind::DriverMonitorLowAcc,
        alerts: &[(
            Warning,
            Static(AlertSpec::new(
                "CHECK DRIVER FACE VISIBILITY",
                "Driver Monitoring Uncertain",
                Normal,
                AlertSize::Small,
                Priority::LOW,
                VisualAlert::SteerRequired,
                AudibleAlert::None,
                400,
                0,
                1500,
            )),
        )],
    },
    EventDecl {
        kind: EventKind::ManualRestart,
        alerts: &[(
            Warning,
            Static(take_control("Resume Driving Manually", VisualAlert::None)),
        )],
    },
    EventDecl {
        kind: EventKind::ResumeRequired,
        alerts: &[(
            Warning,
            Static(AlertSpec::new(
                "STOPPED",
                "Press Resume to Move",
                UserPrompt,
                AlertSize::Mid,
                Priority::LOW,
                VisualAlert::None,
                AudibleAlert::None,
                0,
                0,
                200,
            )),
        )],
    },
    EventDecl {
        kind: EventKind::BelowSteerSpeed,
        alerts: &[(Warning, Computed(below_steer_speed_alert))],
    },
    EventDecl {
        kind: EventKind::PreLaneChangeLeft,
        alerts: &[(
            Warning,
            Static(lane_change("Steer Left to Start Lane Change").with_rate(0.75)),
        )],
    },
    EventDecl {
        kind: EventKind::PreLaneChangeRight,
        alerts: &[(
            Warning,
            Static(lane_change("Steer Right to Start Lane Change").with_rate(0.75)),
        )],
    },
    EventDecl {
        kind: EventKind::LaneChangeBlocked,
        alerts: &[(Warning, Static(lane_change("Car Detected in Blindspot")))],
    },
    EventDecl {
        kind: EventKind::LaneChange,
        alerts: &[(Warning, Static(lane_change("Changing Lane")))],
    },
    EventDecl {
        kind: EventKind::SteerSaturated,
        alerts: &[(
            Warning,
            Static(AlertSpec::new(
                "TAKE CONTROL",
                "Turn Exceeds Steering Limit",
                UserPrompt,
                AlertSize::Mid,
                Priority::LOW,
                VisualAlert::SteerRequired,
                AudibleAlert::ChimePrompt,
                1000,
                2000,
                3000,
            )),
        )],
    },
    EventDecl {
        kind: EventKind::TurningIndicatorOn,
        alerts: &[(
            Warning,
            Static(AlertSpec::new(
                "Keep Hands on Wheel While Signaling",
                "",
                UserPrompt,
                AlertSize::Small,
                Priority::LOW,
                VisualAlert::None,
                AudibleAlert::None,
                0,
                0,
                200,
            )),
        )],
    },
    EventDecl {
        kind: EventKind::LkasButtonOff,
        alerts: &[(
            Warning,
            Static(AlertSpec::new(
                "Check the LKAS Button",
                "",
                UserPrompt,
                AlertSize::Small,
                Priority::LOW,
                VisualAlert::None,
                AudibleAlert::None,
                0,
                0,
                100,
            )),
        )],
    },
    EventDecl {
        kind: EventKind::AutoLaneChange,
        alerts: &[(Warning, Computed(auto_lane_change_alert))],
    },
    // Affect engagement transitions
    EventDecl {
        kind: EventKind::PcmEnable,
        alerts: &[(Enable, Static(ENGAGE))],
    },
    EventDecl {
        kind: EventKind::ButtonEnable,
        alerts: &[(Enable, Static(ENGAGE))],
    },
    EventDecl {
        kind: EventKind::PcmDisable,
        alerts: &[(UserDisable, Static(DISENGAGE))],
    },
    EventDecl {
        kind: EventKind::ButtonCancel,
        alerts: &[(UserDisable, Static(DISENGAGE))],
    },
    EventDecl {
        kind: EventKind::BrakeHold,
        alerts: &[
            (UserDisable, Static(DISENGAGE)),
            (NoEntry, Static(no_entry("Brake Hold Active"))),
        ],
    },
    EventDecl {
        kind: EventKind::ParkBrake,
        alerts: &[
            (UserDisable, Static(DISENGAGE)),
            (NoEntry, Static(no_entry("Park Brake Engaged"))),
        ],
    },
    EventDecl {
        kind: EventKind::PedalPressed,
        alerts: &[
            (UserDisable, Static(DISENGAGE)),
            (
                NoEntry,
                Static(no_entry("Pedal Pressed").with_visual(VisualAlert::BrakePressed)),
            ),
        ],
    },
    EventDecl {
        kind: EventKind::WrongCarMode,
        alerts: &[
            (UserDisable, Static(DISENGAGE)),
            (NoEntry, Computed(wrong_car_mode_alert)),
        ],
    },
    EventDecl {
        kind: EventKind::WrongCruiseMode,
        alerts: &[
            (UserDisable, Static(DISENGAGE)),
            (NoEntry, Static(no_entry("Enable Adaptive Cruise"))),
        ],
    },
    EventDecl {
        kind: EventKind::SteerTempUnavailable,
        alerts: &[
            (
                Warning,
                Static(AlertSpec::new(
                    "TAKE CONTROL",
                    "Steering Temporarily Unavailable",
                    UserPrompt,
                    AlertSize::Mid,
                    Priority::LOW,
                    VisualAlert::SteerRequired,
                    AudibleAlert::ChimeWarning1,
                    400,
                    2000,
                    3000,
                )),
            ),
            (
                NoEntry,
                Static(no_entry("Steering Temporarily Unavailable").with_hud_duration(0)),
            ),
        ],
    },
    EventDecl {
        kind: EventKind::FocusRecoverActive,
        alerts: &[(
            Warning,
            Static(AlertSpec::new(
                "TAKE CONTROL",
                "Attempting Refocus: Camera Focus Invalid",
                UserPrompt,
                AlertSize::Mid,
                Priority::LOW,
                VisualAlert::SteerRequired,
                AudibleAlert::ChimeWarning1,
                400,
                2000,
                3000,
            )),
        )],
    },
    EventDecl {
        kind: EventKind::OutOfSpace,
        alerts: &[(
            NoEntry,
            Static(no_entry("Out of Storage Space").with_hud_duration(0)),
        )],
    },
    EventDecl {
        kind: EventKind::BelowEngageSpeed,
        alerts: &[(NoEntry, Static(no_entry("Speed Too Low")))],
    },
    EventDecl {
        kind: EventKind::SensorDataInvalid,
        alerts: &[
            (
                Permanent,
                Static(
                    device_notice("No Data from Device Sensors", "Reboot your Device")
                        .with_creation_delay(1000),
                ),
            ),
            (NoEntry, Static(no_entry("No Data from Device Sensors"))),
        ],
    },
    EventDecl {
        kind: EventKind::NoGps,
        alerts: &[(Permanent, Computed(no_gps_alert))],
    },
    EventDecl {
        kind: EventKind::SoundsUnavailable,
        alerts: &[
            (
                Permanent,
                Static(device_notice("Speaker not found", "Reboot your Device")),
            ),
            (NoEntry, Static(no_entry("Speaker not found"))),
        ],
    },
    EventDecl {
        kind: EventKind::TooDistracted,
        alerts: &[(NoEntry, Static(no_entry("Distraction Level Too High")))],
    },
    EventDecl {
        kind: EventKind::Overheat,
        alerts: &[
            (SoftDisable, Static(soft_disable("System Overheated"))),
            (NoEntry, Static(no_entry("System Overheated"))),
        ],
    },
    EventDecl {
        kind: EventKind::WrongGear,
        alerts: &[
            (UserDisable, Static(DISENGAGE)),
            (
                NoEntry,
                Static(no_entry("Gear not D").with_visual(VisualAlert::WrongGear)),
            ),
        ],
    },
    EventDecl {
        kind: EventKind::CalibrationInvalid,
        alerts: &[
            (
                SoftDisable,
                Static(soft_disable("Calibration Invalid: Reposition Device and Recalibrate")),
            ),
            (
                NoEntry,
                Static(no_entry("Calibration Invalid: Reposition Device and Recalibrate")),
            ),
        ],
    },
    EventDecl {
        kind: EventKind::CalibrationIncomplete,
        alerts: &[
            (SoftDisable, Static(soft_disable("Calibration in Progress"))),
            (Permanent, Computed(calibration_incomplete_alert)),
            (NoEntry, Static(no_entry("Calibration in Progress"))),
        ],
    },
    EventDecl {
        kind: EventKind::DoorOpen,
        alerts: &[
            (SoftDisable, Static(soft_disable("Door Open"))),
            (NoEntry, Static(no_entry("Door Open"))),
        ],
    },
    EventDecl {
        kind: EventKind::SeatbeltNotLatched,
        alerts: &[
            (SoftDisable, Static(soft_disable("Seatbelt Unlatched"))),
            (
                NoEntry,
                Static(no_entry("Seatbelt Unlatched").with_visual(VisualAlert::SeatbeltUnbuckled)),
            ),
        ],
    },
    EventDecl {
        kind: EventKind::EspDisabled,
        alerts: &[
            (SoftDisable, Static(soft_disable("ESP Off"))),
            (NoEntry, Static(no_entry("ESP Off"))),
        ],
    },
    EventDecl {
        kind: EventKind::LowBattery,
        alerts: &[
            (SoftDisable, Static(soft_disable("Low Battery"))),
            (NoEntry, Static(no_entry("Low Battery"))),
        ],
    },
    EventDecl {
        kind: EventKind::CommIssue,
        alerts: &[
            (SoftDisable, Static(soft_disable("Communication Issue between Processes"))),
            (
                NoEntry,
                Static(
                    no_entry("Communication Issue between Processes")
                        .with_audible(AudibleAlert::ChimeDisengage),
                ),
            ),
        ],
    },
    EventDecl {
        kind: EventKind::RadarCommIssue,
        alerts: &[
            (SoftDisable, Static(soft_disable("Radar Communication Issue"))),
            (
                NoEntry,
                Static(
                    no_entry("Radar Communication Issue").with_audible(AudibleAlert::ChimeDisengage),
                ),
            ),
        ],
    },
    EventDecl {
        kind: EventKind::RadarCanError,
        alerts: &[
            (SoftDisable, Static(soft_disable("Radar Error: Restart the Car"))),
            (NoEntry, Static(no_entry("Radar Error: Restart the Car"))),
        ],
    },
    EventDecl {
        kind: EventKind::RadarFault,
        alerts: &[
            (SoftDisable, Static(soft_disable("Radar Error: Restart the Car"))),
            (NoEntry, Static(no_entry("Radar Error: Restart the Car"))),
        ],
    },
    EventDecl {
        kind: EventKind::ModelLagging,
        alerts: &[
            (SoftDisable, Static(soft_disable("Driving model lagging"))),
            (NoEntry, Static(no_entry("Driving model lagging"))),
        ],
    },
    EventDecl {
        kind: EventKind::PosenetInvalid,
        alerts: &[
            (SoftDisable, Static(soft_disable("Vision Model Output Uncertain"))),
            (NoEntry, Static(no_entry("Vision Model Output Uncertain"))),
        ],
    },
    EventDecl {
        kind: EventKind::DeviceFalling,
        alerts: &[
            (SoftDisable, Static(soft_disable("Device Fell Off Mount"))),
            (NoEntry, Static(no_entry("Device Fell Off Mount"))),
        ],
    },
    EventDecl {
        kind: EventKind::LowMemory,
        alerts: &[
            (SoftDisable, Static(soft_disable("Low Memory: Reboot Your Device"))),
            (
                Permanent,
                Static(device_notice("RAM Critically Low", "Reboot your Device")),
            ),
            (
                NoEntry,
                Static(
                    no_entry("Low Memory: Reboot Your Device")
                        .with_audible(AudibleAlert::ChimeDisengage),
                ),
            ),
        ],
    },
    EventDecl {
        kind: EventKind::ControlsFailed,
        alerts: &[
            (SoftDisable, Static(soft_disable("Controls Failed"))),
            (NoEntry, Static(no_entry("Controls Failed"))),
        ],
    },
    EventDecl {
        kind: EventKind::ControlsMismatch,
        alerts: &[(SoftDisable, Static(soft_disable("Controls Mismatch")))],
    },
    EventDecl {
        kind: EventKind::CanError,
        alerts: &[
            (
                ImmediateDisable,
                Static(immediate_disable("CAN Error: Check Connections")),
            ),
            (
                Permanent,
                Static(
                    fault_banner("CAN Error: Check Connections", Priority::LOW)
                        .with_creation_delay(1000),
                ),
            ),
            (NoEntry, Static(no_entry("CAN Error: Check Connections"))),
        ],
    },
    EventDecl {
        kind: EventKind::SteerUnavailable,
        alerts: &[
            (
                ImmediateDisable,
                Static(immediate_disable("LKAS Fault: Restart the Car")),
            ),
            (
                Permanent,
                Static(fault_banner("LKAS Fault: Restart the car", Priority::LOWER)),
            ),
            (NoEntry, Static(no_entry("LKAS Fault: Restart the Car"))),
        ],
    },
    EventDecl {
        kind: EventKind::BrakeUnavailable,
        alerts: &[
            (
                ImmediateDisable,
                Static(immediate_disable("Cruise Fault: Restart the Car")),
            ),
            (
                Permanent,
                Static(fault_banner("Cruise Fault: Restart the car", Priority::LOWER)),
            ),
            (NoEntry, Static(no_entry("Cruise Fault: Restart the Car"))),
        ],
    },
    EventDecl {
        kind: EventKind::GasUnavailable,
        alerts: &[
            (
                ImmediateDisable,
                Static(immediate_disable("Gas Fault: Restart the Car")),
            ),
            (NoEntry, Static(no_entry("Gas Fault: Restart the Car"))),
        ],
    },
    EventDecl {
        kind: EventKind::ReverseGear,
        alerts: &[
            (UserDisable, Static(DISENGAGE)),
            (NoEntry, Static(no_entry("Reverse Gear"))),
        ],
    },
    EventDecl {
        kind: EventKind::CruiseDisabled,
        alerts: &[(ImmediateDisable, Static(immediate_disable("Cruise Is Off")))],
    },
    EventDecl {
        kind: EventKind::PlannerError,
        alerts: &[
            (ImmediateDisable, Static(immediate_disable("Planner Solution Error"))),
            (NoEntry, Static(no_entry("Planner Solution Error"))),
        ],
    },
    EventDecl {
        kind: EventKind::RelayMalfunction,
        alerts: &[
            (ImmediateDisable, Static(immediate_disable("Harness Malfunction"))),
            (
                Permanent,
                Static(device_notice("Harness Malfunction", "Check Hardware")),
            ),
            (NoEntry, Static(no_entry("Harness Malfunction"))),
        ],
    },
    EventDecl {
        kind: EventKind::NoTarget,
        alerts: &[
            (
                ImmediateDisable,
                Static(AlertSpec::new(
                    "Helm Canceled",
                    "No close lead car",
                    Normal,
                    AlertSize::Mid,
                    Priority::HIGH,
                    VisualAlert::None,
                    AudibleAlert::ChimeDisengage,
                    400,
                    2000,
                    3000,
                )),
            ),
            (NoEntry, Static(no_entry("No Close Lead Car"))),
        ],
    },
    EventDecl {
        kind: EventKind::SpeedTooLow,
        alerts: &[(
            ImmediateDisable,
            Static(AlertSpec::new(
                "Helm Canceled",
                "Speed too low",
                Normal,
                AlertSize::Mid,
                Priority::HIGH,
                VisualAlert::None,
                AudibleAlert::ChimeDisengage,
                400,
                2000,
                3000,
            )),
        )],
    },
    EventDecl {
        kind: EventKind::SpeedTooHigh,
        alerts: &[
            (
                Warning,
                Static(AlertSpec::new(
                    "Speed Too High",
                    "Slow down to resume operation",
                    Normal,
                    AlertSize::Mid,
                    Priority::HIGH,
                    VisualAlert::SteerRequired,
                    AudibleAlert::ChimeWarning2Repeat,
                    2200,
                    3000,
                    4000,
                )),
            ),
            (
                NoEntry,
                Static(AlertSpec::new(
                    "Speed Too High",
                    "Slow down to engage",
                    Normal,
                    AlertSize::Mid,
                    Priority::LOW,
                    VisualAlert::None,
                    AudibleAlert::ChimeError,
                    400,
                    2000,
                    3000,
                )),
            ),
        ],
    },
    EventDecl {
        kind: EventKind::LowSpeedLockout,
        alerts: &[
            (
                Permanent,
                Static(fault_banner("Cruise Fault: Restart the car", Priority::LOWER)),
            ),
            (NoEntry, Static(no_entry("Cruise Fault: Restart the Car"))),
        ],
    },
];

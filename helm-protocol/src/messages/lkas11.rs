//! LKAS11: steering torque command and lane-keeping HUD
//!
//! Sent every control cycle. The checksum occupies byte 6 and uses the
//! vehicle's assigned variant (A, B or C).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::checksum::ChecksumVariant;
use crate::counter::CounterWidth;
use crate::frame::CanFrame;
use crate::signal::{EncodeError, MessageLayout, Signal};

/// Arbitration identifier
pub const ADDRESS: u32 = 0x340;

/// Counter field width
pub const COUNTER_WIDTH: CounterWidth = CounterWidth::Nibble;

/// Largest torque request the field can carry
pub const STEER_MAX_RAW: i16 = 1023;

static SIGNALS: [Signal; 21] = [
    Signal::new("CF_Lkas_LdwsActivemode", 0, 2),
    Signal::new("CF_Lkas_LdwsSysState", 2, 4),
    Signal::new("CF_Lkas_SysWarning", 6, 4),
    Signal::new("CF_Lkas_LdwsLHWarning", 10, 2),
    Signal::new("CF_Lkas_LdwsRHWarning", 12, 2),
    Signal::new("CF_Lkas_HbaLamp", 14, 1),
    Signal::new("CF_Lkas_FcwBasReq", 15, 1),
    Signal::new("CR_Lkas_StrToqReq", 16, 11).scaled(1.0, -1024.0),
    Signal::new("CF_Lkas_ActToi", 27, 1),
    Signal::new("CF_Lkas_ToiFlt", 28, 1),
    Signal::new("CF_Lkas_HbaSysState", 29, 3),
    Signal::new("CF_Lkas_FcwOpt", 32, 2),
    Signal::new("CF_Lkas_HbaOpt", 34, 2),
    Signal::new("CF_Lkas_MsgCount", 36, 4),
    Signal::new("CF_Lkas_FcwSysState", 40, 3),
    Signal::new("CF_Lkas_FcwCollisionWarning", 43, 2),
    Signal::new("CF_Lkas_FusionState", 45, 2),
    Signal::new("CF_Lkas_Chksum", 48, 8),
    Signal::new("CF_Lkas_FcwOpt_USM", 56, 3),
    Signal::new("CF_Lkas_LdwsOpt_USM", 59, 3),
    Signal::new("CF_Lkas_Bca_R", 62, 2),
];

/// Signal table
pub static LAYOUT: MessageLayout = MessageLayout {
    name: "LKAS11",
    address: ADDRESS,
    size: 8,
    signals: &SIGNALS,
};

/// HUD conventions differ between camera generations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LkasHud {
    /// Older cameras: hands-on warning is code 3
    #[default]
    Legacy,
    /// Lane-following cameras with lane-line echo
    LaneFollowing,
    /// Lane-following cameras without lane-line echo
    LaneFollowingNoLanes,
}

/// Steering command values for one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Lkas11 {
    /// Torque request, -1024..=1023
    pub apply_steer: i16,
    /// Torque request is active
    pub steer_req: bool,
    /// Ask the driver to hold the wheel
    pub sys_warning: bool,
    /// Lane-departure system state shown on the cluster
    pub sys_state: u8,
    /// System engaged
    pub enabled: bool,
    /// Left lane line visible
    pub left_lane: bool,
    /// Right lane line visible
    pub right_lane: bool,
    /// Left lane departure warning
    pub left_lane_depart: bool,
    /// Right lane departure warning
    pub right_lane_depart: bool,
}

impl Lkas11 {
    /// Build the frame on top of the camera's stock payload
    pub fn encode(
        &self,
        stock: Option<&[u8]>,
        counter: u8,
        hud: LkasHud,
        checksum: ChecksumVariant,
        bus: u8,
    ) -> Result<CanFrame, EncodeError> {
        if !checksum.is_lkas_variant() {
            return Err(EncodeError::UnsupportedChecksum);
        }

        let mut payload = LAYOUT.base_payload(stock)?;
        let buf = &mut payload[..LAYOUT.size];

        LAYOUT.set_raw(buf, "CF_Lkas_LdwsSysState", self.sys_state as i64)?;
        LAYOUT.set_raw(buf, "CF_Lkas_SysWarning", if self.sys_warning { 3 } else { 0 })?;
        LAYOUT.set_flag(buf, "CF_Lkas_LdwsLHWarning", self.left_lane_depart)?;
        LAYOUT.set_flag(buf, "CF_Lkas_LdwsRHWarning", self.right_lane_depart)?;
        LAYOUT.set(buf, "CR_Lkas_StrToqReq", self.apply_steer as f64)?;
        LAYOUT.set_flag(buf, "CF_Lkas_ActToi", self.steer_req)?;
        LAYOUT.set_raw(buf, "CF_Lkas_ToiFlt", 0)?;
        LAYOUT.set_raw(buf, "CF_Lkas_MsgCount", counter as i64)?;
        LAYOUT.set_raw(buf, "CF_Lkas_Chksum", 0)?;

        match hud {
            LkasHud::Legacy => {}
            LkasHud::LaneFollowing => {
                let lanes = self.left_lane as i64 + ((self.right_lane as i64) << 1);
                LAYOUT.set_raw(buf, "CF_Lkas_Bca_R", lanes)?;
                LAYOUT.set_raw(buf, "CF_Lkas_LdwsOpt_USM", 2)?;
                // 2 = green car + lanes, 1 = white car + lanes
                LAYOUT.set_raw(buf, "CF_Lkas_FcwOpt_USM", if self.enabled { 2 } else { 1 })?;
                LAYOUT.set_raw(buf, "CF_Lkas_SysWarning", if self.sys_warning { 4 } else { 0 })?;
            }
            LkasHud::LaneFollowingNoLanes => {
                LAYOUT.set_raw(buf, "CF_Lkas_Bca_R", 0)?;
                LAYOUT.set_raw(buf, "CF_Lkas_LdwsOpt_USM", 2)?;
                LAYOUT.set_raw(buf, "CF_Lkas_FcwOpt_USM", if self.enabled { 2 } else { 1 })?;
                LAYOUT.set_raw(buf, "CF_Lkas_SysWarning", if self.sys_warning { 4 } else { 0 })?;
            }
        }

        let sum = checksum.compute(buf);
        LAYOUT.set_raw(buf, "CF_Lkas_Chksum", sum as i64)?;

        Ok(CanFrame::new(LAYOUT.address, bus, buf)?)
    }
}

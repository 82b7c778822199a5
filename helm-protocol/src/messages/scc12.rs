//! SCC12: longitudinal acceleration request
//!
//! Sent every other cycle when Helm owns longitudinal control. Carries a
//! 4-bit alive counter and a 4-bit nibble-complement checksum.

use crate::checksum::ChecksumVariant;
use crate::counter::CounterWidth;
use crate::frame::CanFrame;
use crate::signal::{EncodeError, MessageLayout, Signal};

/// Arbitration identifier
pub const ADDRESS: u32 = 0x421;

/// Counter field width
pub const COUNTER_WIDTH: CounterWidth = CounterWidth::Nibble;

/// Checksum used by this message
pub const CHECKSUM: ChecksumVariant = ChecksumVariant::NibbleComplement;

/// ACCMode value meaning the radar is actively controlling
pub const ACC_MODE_ACTIVE: i64 = 1;

static SIGNALS: [Signal; 21] = [
    Signal::new("CF_VSM_Prefill", 0, 1),
    Signal::new("CF_VSM_DecCmdAct", 1, 1),
    Signal::new("CF_VSM_HBACmd", 2, 2),
    Signal::new("CF_VSM_Warn", 4, 2),
    Signal::new("CF_VSM_Stat", 6, 2),
    Signal::new("CF_VSM_BeltCmd", 8, 3),
    Signal::new("ACCFailInfo", 11, 2),
    Signal::new("ACCMode", 13, 2),
    Signal::new("StopReq", 15, 1),
    Signal::new("CR_VSM_DecCmd", 16, 8).scaled(0.01, 0.0),
    Signal::new("aReqMax", 24, 11).scaled(0.01, -10.23),
    Signal::new("TakeOverReq", 35, 1),
    Signal::new("PreFill", 36, 1),
    Signal::new("aReqMin", 37, 11).scaled(0.01, -10.23),
    Signal::new("CF_VSM_ConfMode", 48, 2),
    Signal::new("AEB_Failinfo", 50, 2),
    Signal::new("AEB_Status", 52, 2),
    Signal::new("AEB_CmdAct", 54, 1),
    Signal::new("AEB_StopReq", 55, 1),
    Signal::new("CR_VSM_Alive", 56, 4),
    Signal::new("CR_VSM_ChkSum", 60, 4),
];

/// Signal table
pub static LAYOUT: MessageLayout = MessageLayout {
    name: "SCC12",
    address: ADDRESS,
    size: 8,
    signals: &SIGNALS,
};

/// Acceleration request for one cycle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scc12 {
    /// Requested acceleration in m/s²
    pub apply_accel: f64,
    /// System engaged
    pub enabled: bool,
}

impl Scc12 {
    /// Build the frame on top of the radar's stock payload
    ///
    /// The acceleration limits are only overwritten while engaged and the
    /// radar reports active control; otherwise the stock request passes
    /// through untouched.
    pub fn encode(&self, stock: Option<&[u8]>, counter: u8, bus: u8) -> Result<CanFrame, EncodeError> {
        let mut payload = LAYOUT.base_payload(stock)?;
        let buf = &mut payload[..LAYOUT.size];

        if self.enabled && LAYOUT.get_raw(buf, "ACCMode")? == ACC_MODE_ACTIVE {
            LAYOUT.set(buf, "aReqMax", self.apply_accel)?;
            LAYOUT.set(buf, "aReqMin", self.apply_accel)?;
        }
        LAYOUT.set_raw(buf, "CR_VSM_Alive", counter as i64)?;
        LAYOUT.set_raw(buf, "CR_VSM_ChkSum", 0)?;

        let sum = CHECKSUM.compute(buf);
        LAYOUT.set_raw(buf, "CR_VSM_ChkSum", sum as i64)?;

        Ok(CanFrame::new(LAYOUT.address, bus, buf)?)
    }
}

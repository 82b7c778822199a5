//! MDPS12: steering rack status, forwarded to the camera
//!
//! On vehicles where the rack sits on the camera-side bus, Helm relays the
//! rack's status with the torque-override flags masked so the camera does
//! not fault while Helm is steering. The counter is a full byte and the
//! checksum is the plain byte sum.

use crate::checksum::ChecksumVariant;
use crate::counter::CounterWidth;
use crate::frame::CanFrame;
use crate::signal::{EncodeError, MessageLayout, Signal};

/// Arbitration identifier
pub const ADDRESS: u32 = 0x251;

/// Counter field width
pub const COUNTER_WIDTH: CounterWidth = CounterWidth::Byte;

/// Checksum used by this message
pub const CHECKSUM: ChecksumVariant = ChecksumVariant::SumAll;

static SIGNALS: [Signal; 10] = [
    Signal::new("CR_Mdps_StrColTq", 0, 11).scaled(1.0, -1024.0),
    Signal::new("CF_Mdps_Def", 11, 1),
    Signal::new("CF_Mdps_ToiActive", 12, 1),
    Signal::new("CF_Mdps_ToiUnavail", 13, 1),
    Signal::new("CF_Mdps_ToiFlt", 14, 1),
    Signal::new("CF_Mdps_MsgCount2", 16, 8),
    Signal::new("CF_Mdps_Chksum2", 24, 8),
    Signal::new("CF_Mdps_SErr", 37, 1),
    Signal::new("CR_Mdps_StrTq", 40, 12).scaled(1.0, -2048.0),
    Signal::new("CR_Mdps_OutTq", 52, 12).scaled(1.0, -2048.0),
];

/// Signal table
pub static LAYOUT: MessageLayout = MessageLayout {
    name: "MDPS12",
    address: ADDRESS,
    size: 8,
    signals: &SIGNALS,
};

/// Relayed rack status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mdps12;

impl Mdps12 {
    /// Build the relayed frame from the rack's stock payload
    pub fn encode(&self, stock: Option<&[u8]>, counter: u8, bus: u8) -> Result<CanFrame, EncodeError> {
        let mut payload = LAYOUT.base_payload(stock)?;
        let buf = &mut payload[..LAYOUT.size];

        LAYOUT.set_raw(buf, "CF_Mdps_ToiActive", 0)?;
        LAYOUT.set_raw(buf, "CF_Mdps_ToiUnavail", 1)?;
        LAYOUT.set_raw(buf, "CF_Mdps_MsgCount2", counter as i64)?;
        LAYOUT.set_raw(buf, "CF_Mdps_Chksum2", 0)?;

        let sum = CHECKSUM.compute(buf);
        LAYOUT.set_raw(buf, "CF_Mdps_Chksum2", sum as i64)?;

        Ok(CanFrame::new(LAYOUT.address, bus, buf)?)
    }
}

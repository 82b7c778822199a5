//! CLU11: cluster status carrying the cruise stalk buttons
//!
//! Helm re-sends the cluster's own message with a spoofed button press to
//! cancel or resume stock cruise. There is no checksum.

use super::CruiseButton;
use crate::counter::CounterWidth;
use crate::frame::CanFrame;
use crate::signal::{EncodeError, MessageLayout, Signal};

/// Arbitration identifier
pub const ADDRESS: u32 = 0x4F1;

/// Counter field width
pub const COUNTER_WIDTH: CounterWidth = CounterWidth::Nibble;

static SIGNALS: [Signal; 12] = [
    Signal::new("CF_Clu_CruiseSwState", 0, 3),
    Signal::new("CF_Clu_CruiseSwMain", 3, 1),
    Signal::new("CF_Clu_SldMainSW", 4, 1),
    Signal::new("CF_Clu_ParityBit1", 5, 1),
    Signal::new("CF_Clu_VanzDecimal", 6, 2),
    Signal::new("CF_Clu_Vanz", 8, 9).scaled(0.5, 0.0),
    Signal::new("CF_Clu_SPEED_UNIT", 17, 1),
    Signal::new("CF_Clu_DetentOut", 18, 1),
    Signal::new("CF_Clu_RheostatLevel", 19, 5),
    Signal::new("CF_Clu_CluInfo", 24, 1),
    Signal::new("CF_Clu_AmpInfo", 25, 1),
    Signal::new("CF_Clu_AliveCnt1", 28, 4),
];

/// Signal table
pub static LAYOUT: MessageLayout = MessageLayout {
    name: "CLU11",
    address: ADDRESS,
    size: 4,
    signals: &SIGNALS,
};

/// Spoofed button press
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clu11 {
    pub button: CruiseButton,
    /// Displayed vehicle speed in cluster units
    pub speed: f64,
}

impl Clu11 {
    /// Build the frame on top of the cluster's stock payload
    pub fn encode(&self, stock: Option<&[u8]>, counter: u8, bus: u8) -> Result<CanFrame, EncodeError> {
        let mut payload = LAYOUT.base_payload(stock)?;
        let buf = &mut payload[..LAYOUT.size];

        LAYOUT.set_raw(buf, "CF_Clu_CruiseSwState", self.button.code() as i64)?;
        LAYOUT.set(buf, "CF_Clu_Vanz", self.speed)?;
        LAYOUT.set_raw(buf, "CF_Clu_AliveCnt1", counter as i64)?;

        Ok(CanFrame::new(LAYOUT.address, bus, buf)?)
    }
}

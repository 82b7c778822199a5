//! LFAHDA_MFC: lane-following and highway-assist cluster icons
//!
//! Built from zeros every fifth cycle on vehicles with the lane-following
//! HUD. No counter, no checksum.

use crate::frame::CanFrame;
use crate::signal::{EncodeError, MessageLayout, Signal};

/// Arbitration identifier
pub const ADDRESS: u32 = 0x485;

/// Highway-assist user setting shown as "available"
const HDA_USM_AVAILABLE: i64 = 2;

static SIGNALS: [Signal; 8] = [
    Signal::new("HDA_USM", 0, 2),
    Signal::new("HDA_Active", 2, 1),
    Signal::new("HDA_Icon_State", 3, 2),
    Signal::new("HDA_Chime", 7, 1),
    Signal::new("HDA_VSetReq", 8, 8),
    Signal::new("LFA_SysWarning", 16, 3),
    Signal::new("ACTIVE", 24, 2),
    Signal::new("ACTIVE2", 26, 2),
];

/// Signal table
pub static LAYOUT: MessageLayout = MessageLayout {
    name: "LFAHDA_MFC",
    address: ADDRESS,
    size: 4,
    signals: &SIGNALS,
};

/// Cluster icon state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Lfahda {
    /// Lane-following icon lit
    pub enabled: bool,
}

impl Lfahda {
    pub fn encode(&self, bus: u8) -> Result<CanFrame, EncodeError> {
        let mut payload = LAYOUT.base_payload(None)?;
        let buf = &mut payload[..LAYOUT.size];

        LAYOUT.set_raw(buf, "HDA_USM", HDA_USM_AVAILABLE)?;
        LAYOUT.set_flag(buf, "ACTIVE", self.enabled)?;

        Ok(CanFrame::new(LAYOUT.address, bus, buf)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_follows_engagement() {
        let on = Lfahda { enabled: true }.encode(0).unwrap();
        let off = Lfahda { enabled: false }.encode(0).unwrap();

        assert_eq!(on.len(), 4);
        assert_eq!(LAYOUT.get_raw(&on.data, "ACTIVE").unwrap(), 1);
        assert_eq!(LAYOUT.get_raw(&off.data, "ACTIVE").unwrap(), 0);
        assert_eq!(LAYOUT.get_raw(&off.data, "HDA_USM").unwrap(), 2);
        assert_eq!(&on.data[..], &[0x02, 0x00, 0x00, 0x01]);
    }
}

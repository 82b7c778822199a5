//! Actuation message layouts and builders
//!
//! Each builder starts from the stock payload last received from the
//! vehicle (when the message is forwarded) or from zeros, overwrites the
//! fields Helm controls, stamps the alive counter and finally writes the
//! checksum over the finished bytes.

pub mod clu11;
pub mod lfahda;
pub mod lkas11;
pub mod mdps12;
pub mod scc12;

pub use clu11::Clu11;
pub use lfahda::Lfahda;
pub use lkas11::{Lkas11, LkasHud};
pub use mdps12::Mdps12;
pub use scc12::Scc12;

use crate::signal::{EncodeError, MessageLayout};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cruise stalk button codes as reported on the cluster message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CruiseButton {
    #[default]
    None = 0,
    ResAccel = 1,
    SetDecel = 2,
    GapDist = 3,
    Cancel = 4,
}

impl CruiseButton {
    /// Decode a raw button code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(CruiseButton::None),
            1 => Some(CruiseButton::ResAccel),
            2 => Some(CruiseButton::SetDecel),
            3 => Some(CruiseButton::GapDist),
            4 => Some(CruiseButton::Cancel),
            _ => None,
        }
    }

    /// Raw button code
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

/// Every layout this crate can build, for startup validation
pub fn all_layouts() -> [&'static MessageLayout; 5] {
    [
        &lkas11::LAYOUT,
        &clu11::LAYOUT,
        &scc12::LAYOUT,
        &mdps12::LAYOUT,
        &lfahda::LAYOUT,
    ]
}

/// Validate every built-in layout
pub fn validate_layouts() -> Result<(), EncodeError> {
    for layout in all_layouts() {
        layout.validate()?;
    }
    Ok(())
}

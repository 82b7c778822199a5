//! Event taxonomy and alert arbitration

mod arbiter;
mod table;

pub mod alert;
pub mod category;
pub mod kind;
pub mod set;
pub mod taxonomy;

pub use alert::{
    Alert, AlertSize, AlertSource, AlertSpec, AlertStatus, AlertText, AudibleAlert, Priority,
    VisualAlert,
};
pub use arbiter::{AlertList, Arbiter};
pub use category::{Category, CategorySet};
pub use kind::EventKind;
pub use set::{EventSet, Recurrence};
pub use table::DECLARATIONS;
pub use taxonomy::{EventDecl, Taxonomy, TaxonomyError};

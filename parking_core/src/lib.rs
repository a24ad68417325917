pub mod clock;
pub mod elapsed;
pub mod error;
pub mod memory;
pub mod plate;
pub mod record;
pub mod registry;
pub mod report;
pub mod store;

pub use crate::clock::{Clock, ManualClock, SystemClock};
pub use crate::elapsed::Elapsed;
pub use crate::error::{RegistryError, Result};
pub use crate::memory::MemoryStore;
pub use crate::plate::{Plate, PlateError, PlateFormat};
pub use crate::record::{Slots, VehicleRecord};
pub use crate::registry::Registry;
pub use crate::report::{DailyReport, Report, ReportLine};
pub use crate::store::ParkingStore;

use crate::{
    clock::{Clock, SystemClock},
    elapsed::Elapsed,
    error::Result,
    plate::Plate,
    record::{Slots, VehicleRecord},
    report::Report,
    store::ParkingStore,
};
use std::sync::Arc;

/// Placeholder stored when an update carries no data.
pub const NO_NEW_DATA: &str = "No new data specified";

/// Entry point for every parking operation.
///
/// Plates are taken as typed by the user: each call normalizes and validates
/// its input before the store is consulted, so a malformed plate never reaches
/// the backend.
#[derive(Debug)]
pub struct Registry {
    store: Box<dyn ParkingStore>,
    clock: Arc<dyn Clock>,
}

impl Registry {
    pub fn new(store: impl ParkingStore + 'static) -> Self {
        Self::with_clock(store, SystemClock)
    }

    pub fn with_clock(store: impl ParkingStore + 'static, clock: impl Clock + 'static) -> Self {
        Self {
            store: Box::new(store),
            clock: Arc::new(clock),
        }
    }

    pub async fn register_entry(&mut self, raw: &str) -> Result<Plate> {
        let plate = Plate::parse(raw)?;
        let now = self.clock.now();
        self.store.register_entry(&plate, now).await?;
        tracing::info!("Registered entry of {plate}");
        Ok(plate)
    }

    pub async fn register_exit(&mut self, raw: &str) -> Result<Plate> {
        let plate = Plate::parse(raw)?;
        self.store.register_exit(&plate).await?;
        tracing::info!("Registered exit of {plate}");
        Ok(plate)
    }

    pub async fn check_presence(&self, raw: &str) -> Result<(Plate, bool)> {
        let plate = Plate::parse(raw)?;
        let present = self.store.is_present(&plate).await?;
        tracing::debug!("{plate} present: {present}");
        Ok((plate, present))
    }

    pub async fn duration(&self, raw: &str) -> Result<(Plate, Elapsed)> {
        let plate = Plate::parse(raw)?;
        let elapsed = self.store.elapsed(&plate, self.clock.now()).await?;
        Ok((plate, elapsed))
    }

    pub async fn list_active(&self) -> Result<Vec<VehicleRecord>> {
        let active = self.store.active().await?;
        tracing::debug!("{} active vehicles", active.len());
        Ok(active)
    }

    pub async fn check_slots(&self) -> Result<Slots> {
        self.store.slots().await
    }

    pub async fn cancel(&mut self, raw: &str) -> Result<Plate> {
        let plate = Plate::parse(raw)?;
        self.store.cancel(&plate).await?;
        tracing::info!("Cancelled registration of {plate}");
        Ok(plate)
    }

    /// Blank data is replaced by [`NO_NEW_DATA`].
    pub async fn update(&mut self, raw: &str, data: &str) -> Result<Plate> {
        let plate = Plate::parse(raw)?;
        let data = match data.trim() {
            "" => NO_NEW_DATA,
            _ => data,
        };
        self.store.update(&plate, data).await?;
        tracing::info!("Updated data of {plate}");
        Ok(plate)
    }

    pub async fn generate_report(&self) -> Result<Report> {
        self.store.report(self.clock.now()).await
    }
}

use crate::{
    elapsed::Elapsed,
    error::{RegistryError, Result},
    plate::Plate,
    record::{Slots, VehicleRecord},
    report::{DailyReport, Report},
    store::ParkingStore,
};
use async_trait::async_trait;
use std::time::SystemTime;

/// Capacity of the lot when nothing else is configured.
pub const DEFAULT_TOTAL_SLOTS: u32 = 50;

/// Parking records kept in insertion order, lost when the process ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryStore {
    vehicles: Vec<VehicleRecord>,
    total_slots: u32,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_TOTAL_SLOTS)
    }
}

impl MemoryStore {
    pub fn with_capacity(total_slots: u32) -> Self {
        Self {
            vehicles: Vec::new(),
            total_slots,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn available(&self) -> u32 {
        let occupied = u32::try_from(self.vehicles.len()).unwrap_or(u32::MAX);
        self.total_slots.saturating_sub(occupied)
    }

    fn find(&self, plate: &Plate) -> Option<&VehicleRecord> {
        self.vehicles.iter().find(|v| &v.plate == plate)
    }

    fn remove(&mut self, plate: &Plate) -> Result<VehicleRecord> {
        let index = self
            .vehicles
            .iter()
            .position(|v| &v.plate == plate)
            .ok_or_else(|| RegistryError::NotFound(plate.clone()))?;
        Ok(self.vehicles.remove(index))
    }
}

#[async_trait]
impl ParkingStore for MemoryStore {
    async fn register_entry(&mut self, plate: &Plate, at: SystemTime) -> Result<()> {
        if self.find(plate).is_some() {
            return Err(RegistryError::AlreadyParked(plate.clone()));
        }
        if self.available() == 0 {
            return Err(RegistryError::LotFull {
                total: self.total_slots,
            });
        }
        self.vehicles.push(VehicleRecord::new(plate.clone(), at));
        Ok(())
    }

    async fn register_exit(&mut self, plate: &Plate) -> Result<()> {
        let record = self.remove(plate)?;
        tracing::debug!("Removed {record:?} on exit");
        Ok(())
    }

    async fn is_present(&self, plate: &Plate) -> Result<bool> {
        Ok(self.find(plate).is_some())
    }

    async fn elapsed(&self, plate: &Plate, now: SystemTime) -> Result<Elapsed> {
        let record = self
            .find(plate)
            .ok_or_else(|| RegistryError::NotFound(plate.clone()))?;
        Ok(Elapsed::between(record.entry_time, now))
    }

    async fn active(&self) -> Result<Vec<VehicleRecord>> {
        Ok(self.vehicles.clone())
    }

    async fn slots(&self) -> Result<Slots> {
        Ok(Slots {
            available: self.available(),
            total: Some(self.total_slots),
        })
    }

    async fn cancel(&mut self, plate: &Plate) -> Result<()> {
        let record = self.remove(plate)?;
        tracing::debug!("Removed {record:?} on cancellation");
        Ok(())
    }

    async fn update(&mut self, plate: &Plate, data: &str) -> Result<()> {
        let record = self
            .vehicles
            .iter_mut()
            .find(|v| &v.plate == plate)
            .ok_or_else(|| RegistryError::NotFound(plate.clone()))?;
        record.additional_data = Some(data.to_string());
        Ok(())
    }

    async fn report(&self, now: SystemTime) -> Result<Report> {
        Ok(DailyReport::build(&self.vehicles, self.available(), now).into())
    }
}

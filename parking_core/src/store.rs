use crate::{
    elapsed::Elapsed,
    error::Result,
    plate::Plate,
    record::{Slots, VehicleRecord},
    report::Report,
};
use async_trait::async_trait;
use std::{fmt::Debug, time::SystemTime};

/// Backing storage for the registry. Plates arrive already validated;
/// instants come from the registry's clock so stores never read the time themselves.
#[async_trait]
pub trait ParkingStore: Debug + Send + Sync {
    async fn register_entry(&mut self, plate: &Plate, at: SystemTime) -> Result<()>;

    async fn register_exit(&mut self, plate: &Plate) -> Result<()>;

    async fn is_present(&self, plate: &Plate) -> Result<bool>;

    async fn elapsed(&self, plate: &Plate, now: SystemTime) -> Result<Elapsed>;

    async fn active(&self) -> Result<Vec<VehicleRecord>>;

    async fn slots(&self) -> Result<Slots>;

    async fn cancel(&mut self, plate: &Plate) -> Result<()>;

    async fn update(&mut self, plate: &Plate, data: &str) -> Result<()>;

    async fn report(&self, now: SystemTime) -> Result<Report>;
}

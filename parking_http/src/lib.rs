pub mod catalog;
pub mod endpoint;
pub mod remote;
pub mod wire;

pub use crate::catalog::{Catalog, CatalogVehicle, VehicleId};
pub use crate::endpoint::{Endpoint, Payload};
pub use crate::remote::RemoteStore;
pub use reqwest::Url;

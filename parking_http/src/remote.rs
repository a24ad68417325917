use crate::{
    endpoint::{Endpoint, Payload},
    wire::{CheckReply, EntryRequest, SlotsReply, TimeReply, UpdateRequest},
};
use async_trait::async_trait;
use parking_core::{
    Elapsed, ParkingStore, Plate, RegistryError, Report, Result, Slots, VehicleRecord,
};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::time::SystemTime;

/// Parking store delegating every operation to the remote service.
///
/// Business rules live on the server: capacity is never checked here, and a
/// double submission is not de-duplicated.
#[derive(Clone, Debug)]
pub struct RemoteStore {
    endpoint: Endpoint,
}

impl RemoteStore {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    async fn plate_call(
        &self,
        method: Method,
        route: &str,
        plate: &Plate,
        body: Option<&Value>,
    ) -> Result<Payload> {
        self.endpoint
            .call(method, &[route, plate.as_str()], body)
            .await
            .map_err(|e| not_found(e, plate))
    }
}

fn not_found(e: RegistryError, plate: &Plate) -> RegistryError {
    match e {
        RegistryError::Remote { status, .. } if status == StatusCode::NOT_FOUND.as_u16() => {
            RegistryError::NotFound(plate.clone())
        }
        e => e,
    }
}

fn to_value<T: serde::Serialize>(body: &T) -> Result<Value> {
    serde_json::to_value(body).map_err(RegistryError::Encoding)
}

#[async_trait]
impl ParkingStore for RemoteStore {
    async fn register_entry(&mut self, plate: &Plate, _at: SystemTime) -> Result<()> {
        let body = to_value(&EntryRequest {
            plate: plate.as_str(),
        })?;
        match self.endpoint.call(Method::POST, &["entry"], Some(&body)).await {
            Ok(_) => Ok(()),
            Err(RegistryError::Remote { status, .. }) if status == StatusCode::CONFLICT.as_u16() => {
                Err(RegistryError::AlreadyParked(plate.clone()))
            }
            Err(e) => Err(e),
        }
    }

    async fn register_exit(&mut self, plate: &Plate) -> Result<()> {
        self.plate_call(Method::PATCH, "exit", plate, None).await?;
        Ok(())
    }

    async fn is_present(&self, plate: &Plate) -> Result<bool> {
        match self.plate_call(Method::GET, "check", plate, None).await {
            Ok(payload) => Ok(payload.decode::<CheckReply>()?.is_present()),
            Err(RegistryError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn elapsed(&self, plate: &Plate, now: SystemTime) -> Result<Elapsed> {
        let reply: TimeReply = self
            .plate_call(Method::GET, "time", plate, None)
            .await?
            .decode()?;
        Ok(reply.elapsed(now))
    }

    async fn active(&self) -> Result<Vec<VehicleRecord>> {
        match self.endpoint.call(Method::GET, &["active"], None).await? {
            Payload::Empty => Ok(Vec::new()),
            payload => payload.decode(),
        }
    }

    async fn slots(&self) -> Result<Slots> {
        let reply: SlotsReply = self.endpoint.call(Method::GET, &["slots"], None).await?.decode()?;
        Ok(reply.into())
    }

    async fn cancel(&mut self, plate: &Plate) -> Result<()> {
        self.plate_call(Method::DELETE, "cancel", plate, None).await?;
        Ok(())
    }

    async fn update(&mut self, plate: &Plate, data: &str) -> Result<()> {
        let body = to_value(&UpdateRequest { data })?;
        self.plate_call(Method::PUT, "update", plate, Some(&body))
            .await?;
        Ok(())
    }

    async fn report(&self, _now: SystemTime) -> Result<Report> {
        let report = match self.endpoint.call(Method::GET, &["report"], None).await? {
            Payload::Empty => Report::NoData,
            Payload::Json(value) if is_blank(&value) => Report::NoData,
            Payload::Json(value) => Report::Remote(value),
            Payload::Text(text) => Report::Remote(Value::String(text)),
        };
        Ok(report)
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn unencodable_body_is_not_a_response_error() {
        let body = BTreeMap::from([((1, 2), "tuple keys have no JSON form")]);
        let err = to_value(&body).unwrap_err();
        assert!(matches!(err, RegistryError::Encoding(_)));
        assert!(!err.is_rejection());
    }
}

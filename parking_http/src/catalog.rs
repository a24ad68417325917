use crate::endpoint::{Endpoint, Payload};
use parking_core::{Plate, RegistryError, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned identifier, numeric or textual depending on the backend.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VehicleId {
    Number(u64),
    Text(String),
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleId::Number(n) => write!(f, "{n}"),
            VehicleId::Text(s) => f.write_str(s),
        }
    }
}

/// Entry of the vehicle catalog. Field names on the wire are Portuguese.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogVehicle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<VehicleId>,
    #[serde(rename = "placa")]
    pub plate: String,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "cor")]
    pub color: String,
}

impl fmt::Display for CatalogVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = &self.id {
            write!(f, "#{id} ")?;
        }
        write!(f, "{} {} ({})", self.plate, self.model, self.color)
    }
}

/// Plate/model/color registry living next to the parking service.
#[derive(Clone, Debug)]
pub struct Catalog {
    endpoint: Endpoint,
}

impl Catalog {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    /// Returns the stored vehicle when the server echoes it, the submitted one otherwise.
    pub async fn register(&self, raw_plate: &str, model: &str, color: &str) -> Result<CatalogVehicle> {
        let plate = Plate::parse(raw_plate)?;
        let vehicle = CatalogVehicle {
            id: None,
            plate: plate.to_string(),
            model: model.trim().to_string(),
            color: color.trim().to_string(),
        };
        let body = serde_json::to_value(&vehicle).map_err(RegistryError::Encoding)?;
        let payload = self
            .endpoint
            .call(Method::POST, &["veiculo"], Some(&body))
            .await?;
        tracing::info!("Registered {vehicle} in the catalog");
        Ok(stored_or_submitted(payload, vehicle))
    }

    pub async fn list(&self) -> Result<Vec<CatalogVehicle>> {
        match self.endpoint.call(Method::GET, &["veiculos"], None).await? {
            Payload::Empty => Ok(Vec::new()),
            payload => payload.decode(),
        }
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = id.trim();
        if id.is_empty() {
            return Err(RegistryError::InvalidRequest(
                "catalog id must not be blank".to_string(),
            ));
        }
        self.endpoint
            .call(Method::DELETE, &["veiculo", id], None)
            .await?;
        tracing::info!("Deleted catalog vehicle {id}");
        Ok(())
    }
}

fn stored_or_submitted(payload: Payload, submitted: CatalogVehicle) -> CatalogVehicle {
    let Payload::Json(value) = payload else {
        return submitted;
    };
    match serde_json::from_value(value) {
        Ok(stored) => stored,
        Err(e) => {
            tracing::debug!("Catalog echo is not a vehicle ({e}), keeping {submitted}");
            submitted
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn submitted() -> CatalogVehicle {
        CatalogVehicle {
            id: None,
            plate: "ABC1234".to_string(),
            model: "Uno".to_string(),
            color: "azul".to_string(),
        }
    }

    #[test]
    fn prefers_the_stored_echo() {
        let echo = Payload::Json(serde_json::json!({
            "id": 3, "placa": "ABC1234", "modelo": "Uno", "cor": "azul"
        }));
        assert_eq!(
            stored_or_submitted(echo, submitted()).id,
            Some(VehicleId::Number(3))
        );

        let ack = Payload::Json(serde_json::json!({"message": "created"}));
        assert_eq!(stored_or_submitted(ack, submitted()), submitted());
        assert_eq!(
            stored_or_submitted(Payload::Text("created".to_string()), submitted()),
            submitted()
        );
        assert_eq!(stored_or_submitted(Payload::Empty, submitted()), submitted());
    }

    #[tokio::test]
    async fn blank_id_is_rejected_before_any_request() {
        // Nothing listens on the discard port; a request would be a transport error.
        let catalog = Catalog::new(Endpoint::new(
            reqwest::Url::parse("http://127.0.0.1:9/").unwrap(),
        ));
        assert!(matches!(
            catalog.delete("  ").await,
            Err(RegistryError::InvalidRequest(_))
        ));
    }

    #[test]
    fn uses_portuguese_field_names() {
        let vehicle: CatalogVehicle =
            serde_json::from_str(r#"{"id":7,"placa":"ABC1234","modelo":"Uno","cor":"branco"}"#)
                .unwrap();
        assert_eq!(vehicle.id, Some(VehicleId::Number(7)));
        assert_eq!(vehicle.to_string(), "#7 ABC1234 Uno (branco)");

        let text_id: CatalogVehicle =
            serde_json::from_str(r#"{"id":"a1","placa":"ABC1D23","modelo":"Gol","cor":"preto"}"#)
                .unwrap();
        assert_eq!(text_id.id, Some(VehicleId::Text("a1".to_string())));

        let new = CatalogVehicle {
            id: None,
            plate: "ABC1234".to_string(),
            model: "Uno".to_string(),
            color: "azul".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&new).unwrap(),
            serde_json::json!({"placa": "ABC1234", "modelo": "Uno", "cor": "azul"})
        );
    }
}

use crate::plate::Plate;
use serde::{Deserialize, Serialize};
use std::{fmt, time::SystemTime};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub plate: Plate,
    #[serde(with = "timestamp")]
    pub entry_time: SystemTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<String>,
}

impl VehicleRecord {
    pub fn new(plate: Plate, entry_time: SystemTime) -> Self {
        Self {
            plate,
            entry_time,
            additional_data: None,
        }
    }
}

/// Free capacity. `total` is unknown when the remote service only reports a bare count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slots {
    pub available: u32,
    pub total: Option<u32>,
}

impl fmt::Display for Slots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.total {
            Some(total) => write!(f, "Available slots: {} of {total}", self.available),
            None => write!(f, "Available slots: {}", self.available),
        }
    }
}

/// Entry instants travel as RFC 3339 strings; epoch milliseconds are accepted on input.
pub mod timestamp {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::time::{Duration, SystemTime};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Text(String),
        EpochMillis(u64),
    }

    pub fn format(time: SystemTime) -> String {
        humantime::format_rfc3339_millis(time).to_string()
    }

    pub fn serialize<S>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(*time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SystemTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Wire::deserialize(deserializer)? {
            Wire::Text(text) => humantime::parse_rfc3339_weak(&text).map_err(de::Error::custom),
            Wire::EpochMillis(millis) => Ok(SystemTime::UNIX_EPOCH + Duration::from_millis(millis)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::time::Duration;

    #[test]
    fn accepts_both_timestamp_shapes() {
        let text: VehicleRecord = serde_json::from_str(
            r#"{"plate":"ABC1234","entryTime":"2024-03-01T12:00:00.000Z","additionalData":"blue"}"#,
        )
        .unwrap();
        let millis: VehicleRecord =
            serde_json::from_str(r#"{"plate":"ABC1234","entryTime":1709294400000}"#).unwrap();
        assert_eq!(text.entry_time, millis.entry_time);
        assert_eq!(text.additional_data.as_deref(), Some("blue"));
        assert_eq!(millis.additional_data, None);
    }

    #[test]
    fn serializes_camel_case() {
        let record = VehicleRecord::new(
            Plate::parse("abc1d23").unwrap(),
            SystemTime::UNIX_EPOCH + Duration::from_secs(1_709_294_400),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"plate": "ABC1D23", "entryTime": "2024-03-01T12:00:00.000Z"})
        );
    }

    #[test]
    fn displays_slots() {
        let known = Slots {
            available: 48,
            total: Some(50),
        };
        let bare = Slots {
            available: 7,
            total: None,
        };
        assert_eq!(known.to_string(), "Available slots: 48 of 50");
        assert_eq!(bare.to_string(), "Available slots: 7");
    }
}

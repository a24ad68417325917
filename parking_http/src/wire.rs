//! Response shapes accepted from the parking service.

use parking_core::{record::timestamp, Elapsed, Slots};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EntryRequest<'a> {
    pub plate: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateRequest<'a> {
    pub data: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CheckReply {
    Status { status: String },
    Found { found: bool },
}

impl CheckReply {
    pub fn is_present(&self) -> bool {
        match self {
            CheckReply::Status { status } => status.eq_ignore_ascii_case("parked"),
            CheckReply::Found { found } => *found,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TimeReply {
    /// Milliseconds since entry.
    Duration { duration: u64 },
    Entry {
        #[serde(rename = "entryTime", with = "timestamp")]
        entry_time: SystemTime,
    },
}

impl TimeReply {
    pub fn elapsed(&self, now: SystemTime) -> Elapsed {
        match self {
            TimeReply::Duration { duration } => Elapsed::from_millis(*duration),
            TimeReply::Entry { entry_time } => Elapsed::between(*entry_time, now),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SlotsReply {
    #[serde(rename_all = "camelCase")]
    Counts {
        available_slots: u32,
        #[serde(default)]
        total_slots: Option<u32>,
    },
    Bare(u32),
}

impl From<SlotsReply> for Slots {
    fn from(reply: SlotsReply) -> Self {
        match reply {
            SlotsReply::Counts {
                available_slots,
                total_slots,
            } => Slots {
                available: available_slots,
                total: total_slots,
            },
            SlotsReply::Bare(available) => Slots {
                available,
                total: None,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::time::Duration;

    #[test]
    fn check_shapes() {
        let parked: CheckReply = serde_json::from_str(r#"{"status":"parked"}"#).unwrap();
        let left: CheckReply = serde_json::from_str(r#"{"status":"left"}"#).unwrap();
        let found: CheckReply = serde_json::from_str(r#"{"found":true}"#).unwrap();
        assert!(parked.is_present());
        assert!(!left.is_present());
        assert!(found.is_present());
        assert!(serde_json::from_str::<CheckReply>(r#"{"parked":1}"#).is_err());
    }

    #[test]
    fn time_shapes() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_709_298_061);
        let duration: TimeReply = serde_json::from_str(r#"{"duration":3661000}"#).unwrap();
        let entry: TimeReply =
            serde_json::from_str(r#"{"entryTime":"2024-03-01T12:00:00Z"}"#).unwrap();
        assert_eq!(duration.elapsed(now).to_string(), "1h 1m 1s");
        assert_eq!(entry.elapsed(now).to_string(), "1h 1m 1s");
    }

    #[test]
    fn slot_shapes() {
        let counts: SlotsReply =
            serde_json::from_str(r#"{"availableSlots":12,"totalSlots":50}"#).unwrap();
        let bare: SlotsReply = serde_json::from_str("12").unwrap();
        assert_eq!(
            Slots::from(counts),
            Slots {
                available: 12,
                total: Some(50)
            }
        );
        assert_eq!(
            Slots::from(bare),
            Slots {
                available: 12,
                total: None
            }
        );
    }
}

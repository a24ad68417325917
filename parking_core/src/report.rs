use crate::{
    elapsed::{millis_between, Elapsed},
    plate::Plate,
    record::{timestamp, VehicleRecord},
};
use serde::Serialize;
use std::time::SystemTime;

#[derive(Clone, Debug, PartialEq)]
pub enum Report {
    /// Nothing parked, so there is nothing to report.
    NoData,
    Snapshot(DailyReport),
    /// Whatever the remote service returned, echoed as-is.
    Remote(serde_json::Value),
}

impl Report {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoData)
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<Option<String>> {
        match self {
            Self::NoData => Ok(None),
            Self::Snapshot(report) => serde_json::to_string_pretty(report).map(Some),
            Self::Remote(value) => serde_json::to_string_pretty(value).map(Some),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    pub total_vehicles_currently_parked: usize,
    pub available_slots: u32,
    pub parked_vehicles_details: Vec<ReportLine>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportLine {
    pub plate: Plate,
    pub entry_time: String,
    pub duration_ms: u64,
    pub elapsed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<String>,
}

impl ReportLine {
    pub fn new(record: &VehicleRecord, now: SystemTime) -> Self {
        let duration_ms = millis_between(record.entry_time, now);
        Self {
            plate: record.plate.clone(),
            entry_time: timestamp::format(record.entry_time),
            duration_ms,
            elapsed: Elapsed::from_millis(duration_ms).to_string(),
            additional_data: record.additional_data.clone(),
        }
    }
}

impl DailyReport {
    /// `None` when no vehicle is parked.
    pub fn build(records: &[VehicleRecord], available_slots: u32, now: SystemTime) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        Some(Self {
            total_vehicles_currently_parked: records.len(),
            available_slots,
            parked_vehicles_details: records.iter().map(|r| ReportLine::new(r, now)).collect(),
        })
    }
}

impl From<Option<DailyReport>> for Report {
    fn from(report: Option<DailyReport>) -> Self {
        report.map_or(Report::NoData, Report::Snapshot)
    }
}

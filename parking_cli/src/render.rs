use crate::notice::{Notice, Section};
use parking_core::{Elapsed, Plate, RegistryError, Report, Slots, VehicleRecord};
use parking_http::CatalogVehicle;
use std::{error::Error, fmt};

/// A status notice plus whatever content the operation displays below it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub notice: Notice,
    pub body: Option<String>,
}

impl From<Notice> for Rendered {
    fn from(notice: Notice) -> Self {
        Self { notice, body: None }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notice)?;
        if let Some(body) = &self.body {
            write!(f, "\n{body}")?;
        }
        Ok(())
    }
}

/// The error message followed by its chain of causes.
pub fn describe(error: &RegistryError) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        text.push_str(&format!(": {cause}"));
        source = cause.source();
    }
    text
}

fn failure(section: Section, error: &RegistryError) -> Rendered {
    if error.is_rejection() {
        tracing::debug!("{section} rejected: {error}");
    } else {
        tracing::warn!("{section} failed: {error:?}");
    }
    Notice::error(section, describe(error)).into()
}

pub fn entry(result: Result<Plate, RegistryError>) -> Rendered {
    match result {
        Ok(plate) => Notice::success(
            Section::EntryExit,
            format!("Entry of {plate} registered successfully!"),
        )
        .into(),
        Err(e) => failure(Section::EntryExit, &e),
    }
}

pub fn exit(result: Result<Plate, RegistryError>) -> Rendered {
    match result {
        Ok(plate) => Notice::success(
            Section::EntryExit,
            format!("Exit of {plate} registered successfully!"),
        )
        .into(),
        Err(e) => failure(Section::EntryExit, &e),
    }
}

pub fn check(result: Result<(Plate, bool), RegistryError>) -> Rendered {
    match result {
        Ok((plate, true)) => Notice::success(
            Section::Check,
            format!("Vehicle {plate} is in the parking lot."),
        )
        .into(),
        Ok((plate, false)) => Notice::info(
            Section::Check,
            format!("Vehicle {plate} is NOT in the parking lot."),
        )
        .into(),
        Err(e) => failure(Section::Check, &e),
    }
}

pub fn time(result: Result<(Plate, Elapsed), RegistryError>) -> Rendered {
    match result {
        Ok((plate, elapsed)) => Notice::success(
            Section::Time,
            format!("Vehicle {plate} has been parked for {elapsed}."),
        )
        .into(),
        Err(e) => failure(Section::Time, &e),
    }
}

pub fn active(result: Result<Vec<VehicleRecord>, RegistryError>) -> Rendered {
    let records = match result {
        Ok(records) => records,
        Err(e) => return failure(Section::Active, &e),
    };
    if records.is_empty() {
        return Notice::info(Section::Active, "No active vehicles at the moment.").into();
    }
    let lines: Vec<String> = records.iter().map(active_line).collect();
    Rendered {
        notice: Notice::success(
            Section::Active,
            format!("{} active vehicle(s):", records.len()),
        ),
        body: Some(lines.join("\n")),
    }
}

fn active_line(record: &VehicleRecord) -> String {
    let entry = humantime::format_rfc3339_seconds(record.entry_time);
    match &record.additional_data {
        Some(data) => format!("{} (Entry: {entry}) {data}", record.plate),
        None => format!("{} (Entry: {entry})", record.plate),
    }
}

pub fn slots(result: Result<Slots, RegistryError>) -> Rendered {
    match result {
        Ok(slots) => Notice::success(Section::Slots, slots.to_string()).into(),
        Err(e) => failure(Section::Slots, &e),
    }
}

pub fn cancel(result: Result<Plate, RegistryError>) -> Rendered {
    match result {
        Ok(plate) => Notice::success(
            Section::CancelUpdate,
            format!("Registration of vehicle {plate} cancelled successfully."),
        )
        .into(),
        Err(e) => failure(Section::CancelUpdate, &e),
    }
}

pub fn update(result: Result<Plate, RegistryError>) -> Rendered {
    match result {
        Ok(plate) => Notice::success(
            Section::CancelUpdate,
            format!("Data of vehicle {plate} updated successfully."),
        )
        .into(),
        Err(e) => failure(Section::CancelUpdate, &e),
    }
}

pub fn report(result: Result<Report, RegistryError>) -> Rendered {
    let report = match result {
        Ok(report) => report,
        Err(e) => return failure(Section::Report, &e),
    };
    match report.to_pretty_json() {
        Ok(None) => Notice::info(
            Section::Report,
            "There is no data to generate a report at the moment.",
        )
        .into(),
        Ok(Some(json)) => Rendered {
            notice: Notice::success(Section::Report, "Daily report generated:"),
            body: Some(json),
        },
        Err(e) => Notice::error(Section::Report, format!("Failed to format report: {e}")).into(),
    }
}

pub fn catalog_added(result: Result<CatalogVehicle, RegistryError>) -> Rendered {
    match result {
        Ok(vehicle) => Notice::success(
            Section::Catalog,
            format!("Vehicle {vehicle} added to the catalog."),
        )
        .into(),
        Err(e) => failure(Section::Catalog, &e),
    }
}

pub fn catalog_list(result: Result<Vec<CatalogVehicle>, RegistryError>) -> Rendered {
    let vehicles = match result {
        Ok(vehicles) => vehicles,
        Err(e) => return failure(Section::Catalog, &e),
    };
    if vehicles.is_empty() {
        return Notice::info(Section::Catalog, "The catalog is empty.").into();
    }
    let lines: Vec<String> = vehicles.iter().map(ToString::to_string).collect();
    Rendered {
        notice: Notice::success(
            Section::Catalog,
            format!("{} catalog vehicle(s):", vehicles.len()),
        ),
        body: Some(lines.join("\n")),
    }
}

pub fn catalog_deleted(id: &str, result: Result<(), RegistryError>) -> Rendered {
    match result {
        Ok(()) => Notice::success(
            Section::Catalog,
            format!("Vehicle #{} removed from the catalog.", id.trim()),
        )
        .into(),
        Err(e) => failure(Section::Catalog, &e),
    }
}

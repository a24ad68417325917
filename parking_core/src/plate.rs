use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

static NON_ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]").unwrap());

/// Three letters followed by four digits, e.g. `ABC1234`.
static LEGACY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{3}[0-9]{4}$").unwrap());

/// Three letters, one digit, one letter, two digits, e.g. `ABC1D23`.
static MERCOSUL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{3}[0-9][A-Z][0-9]{2}$").unwrap());

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlateFormat {
    Legacy,
    Mercosul,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlateError {
    #[error("please type the vehicle plate")]
    Empty,
    #[error("invalid plate {0}: expected ABC1234 or ABC1D23")]
    Malformed(String),
}

/// Strips everything outside `[A-Za-z0-9]` and upper-cases the rest.
pub fn normalize(raw: &str) -> String {
    NON_ALPHANUMERIC.replace_all(raw, "").to_ascii_uppercase()
}

/// Expects an already normalized plate: matching is case-sensitive.
pub fn classify(normalized: &str) -> Option<PlateFormat> {
    if LEGACY.is_match(normalized) {
        Some(PlateFormat::Legacy)
    } else if MERCOSUL.is_match(normalized) {
        Some(PlateFormat::Mercosul)
    } else {
        None
    }
}

pub fn is_valid(normalized: &str) -> bool {
    classify(normalized).is_some()
}

/// A normalized and validated licence plate, the unique key of a parking record.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plate(String);

impl Plate {
    pub fn parse(raw: &str) -> Result<Self, PlateError> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return Err(PlateError::Empty);
        }
        if !is_valid(&normalized) {
            return Err(PlateError::Malformed(normalized));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn format(&self) -> Option<PlateFormat> {
        classify(&self.0)
    }
}

impl FromStr for Plate {
    type Err = PlateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Plate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

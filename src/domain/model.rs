use crate::utils::error::UkpolError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Latitude/longitude pair returned by the postcode geocoder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Identifiers assigned by the policing data provider. Both are opaque and
/// must be passed to downstream endpoints verbatim; display formatting never
/// touches these values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicingContext {
    pub force: String,
    pub neighbourhood: String,
}

/// Neighbourhood-level details. `contact_details` keys are not enumerable in
/// advance (telephone, email, twitter, ...); a `BTreeMap` keeps rendering
/// deterministic. The description may carry HTML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AreaInfo {
    #[serde(default)]
    pub contact_details: BTreeMap<String, String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForceInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub engagement_methods: Vec<EngagementMethod>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementMethod {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// A single street-level crime record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrimeRecord {
    pub category: String,
    /// Reported month, `YYYY-MM`.
    pub month: String,
    pub location: CrimeLocation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrimeLocation {
    pub street: Street,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Street {
    pub name: String,
}

/// A month filter for crime listings, accepted from the CLI as `YYYYMM` and
/// rendered to the policing API as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrimeMonth(NaiveDate);

impl CrimeMonth {
    pub fn as_api_date(&self) -> String {
        self.0.format("%Y-%m").to_string()
    }
}

impl FromStr for CrimeMonth {
    type Err = UkpolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || UkpolError::ValidationError {
            message: format!("Invalid date '{}': expected YYYYMM, e.g. 201401", s),
        };

        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let date =
            NaiveDate::parse_from_str(&format!("{}01", s), "%Y%m%d").map_err(|_| invalid())?;
        Ok(Self(date))
    }
}

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use ukpol_cli::core::commands;
use ukpol_cli::domain::model::{
    AreaInfo, Coordinates, CrimeLocation, CrimeMonth, CrimeRecord, EngagementMethod, ForceInfo,
    PolicingContext, Street,
};
use ukpol_cli::{LookupService, Result, UkpolError};

/// Stub resolver with canned responses and a call log, so report content and
/// call ordering can be checked without HTTP.
#[derive(Clone)]
struct StubLookup {
    calls: Arc<Mutex<Vec<&'static str>>>,
    geocoder_has_location: bool,
    area_info: AreaInfo,
    force_info: ForceInfo,
    crimes: Vec<CrimeRecord>,
}

impl StubLookup {
    fn new() -> Self {
        let mut contact_details = BTreeMap::new();
        contact_details.insert("email".to_string(), "bromsgrove@example.police.uk".to_string());
        contact_details.insert("telephone".to_string(), "0345 113 5000".to_string());

        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            geocoder_has_location: true,
            area_info: AreaInfo {
                contact_details,
                description: Some("<p>Our team covers the <b>town centre</b>.</p>".to_string()),
            },
            force_info: ForceInfo {
                name: Some("West Midlands Police".to_string()),
                telephone: Some("0345 113 5000".to_string()),
                url: None,
                engagement_methods: vec![EngagementMethod {
                    title: "Twitter".to_string(),
                    url: "http://twitter.com/wmpolice".to_string(),
                }],
            },
            crimes: vec![CrimeRecord {
                category: "burglary".to_string(),
                month: "2014-01".to_string(),
                location: CrimeLocation {
                    street: Street {
                        name: "On or near Shops".to_string(),
                    },
                },
            }],
        }
    }

    fn without_location() -> Self {
        Self {
            geocoder_has_location: false,
            ..Self::new()
        }
    }

    fn without_telephone_contact(mut self) -> Self {
        self.area_info.contact_details.remove("telephone");
        self
    }

    async fn recorded_calls(&self) -> Vec<&'static str> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, name: &'static str) {
        self.calls.lock().await.push(name);
    }
}

#[async_trait]
impl LookupService for StubLookup {
    async fn resolve_coordinates(&self, postcode: &str) -> Result<Coordinates> {
        self.record("resolve_coordinates").await;
        if !self.geocoder_has_location {
            return Err(UkpolError::LocationNotFound {
                postcode: postcode.to_string(),
            });
        }
        Ok(Coordinates {
            lat: 52.489,
            lng: -1.898,
        })
    }

    async fn resolve_policing_context(&self, _coords: &Coordinates) -> Result<PolicingContext> {
        self.record("resolve_policing_context").await;
        Ok(PolicingContext {
            force: "west-midlands".to_string(),
            neighbourhood: "NC04".to_string(),
        })
    }

    async fn fetch_area_info(&self, _context: &PolicingContext) -> Result<AreaInfo> {
        self.record("fetch_area_info").await;
        Ok(self.area_info.clone())
    }

    async fn fetch_force_info(&self, _force: &str) -> Result<ForceInfo> {
        self.record("fetch_force_info").await;
        Ok(self.force_info.clone())
    }

    async fn fetch_street_crimes(
        &self,
        _coords: &Coordinates,
        _month: Option<&CrimeMonth>,
    ) -> Result<Vec<CrimeRecord>> {
        self.record("fetch_street_crimes").await;
        Ok(self.crimes.clone())
    }
}

#[tokio::test]
async fn test_area_report_content() {
    let lookup = StubLookup::new();
    let report = commands::area_report(&lookup, "B610PL").await.unwrap();

    assert!(report.contains("B610PL is covered by West Midlands Constabulary"));
    assert!(report.contains("Contact Info"));
    assert!(report.contains("telephone : 0345 113 5000"));
    assert!(report.contains("Description"));
    // HTML stripped from the description
    assert!(report.contains("Our team covers the town centre."));
    assert!(!report.contains("<p>"));
}

#[tokio::test]
async fn test_area_report_pipeline_order() {
    let lookup = StubLookup::new();
    commands::area_report(&lookup, "B610PL").await.unwrap();

    assert_eq!(
        lookup.recorded_calls().await,
        vec![
            "resolve_coordinates",
            "resolve_policing_context",
            "fetch_area_info"
        ]
    );
}

#[tokio::test]
async fn test_location_not_found_short_circuits_pipeline() {
    let lookup = StubLookup::without_location();
    let err = commands::area_report(&lookup, "XX999XX").await.unwrap_err();

    assert!(matches!(err, UkpolError::LocationNotFound { .. }));
    assert_eq!(err.exit_code(), 2);
    // The policing-context call must never be attempted.
    assert_eq!(lookup.recorded_calls().await, vec!["resolve_coordinates"]);
}

#[tokio::test]
async fn test_contact_report_defaults_telephone() {
    let lookup = StubLookup::new().without_telephone_contact();
    let report = commands::contact_report(&lookup, "PE227DB").await.unwrap();

    assert!(report.contains("Contact Info for West Midlands"));
    assert!(report.contains("telephone : 101"));
    assert!(report.contains("email     : bromsgrove@example.police.uk"));
}

#[tokio::test]
async fn test_force_report_content() {
    let lookup = StubLookup::new();
    let report = commands::force_report(&lookup, "SK224PL").await.unwrap();

    assert!(report.contains("SK224PL is covered by West Midlands Constabulary"));
    assert!(report.contains("Telephone : 0345 113 5000"));
    assert!(report.contains("Website   : (not listed)"));
    assert!(report.contains("Twitter   : http://twitter.com/wmpolice"));
}

#[tokio::test]
async fn test_crimes_report_columns() {
    let lookup = StubLookup::new();
    let report = commands::crimes_report(&lookup, "B458ES", None).await.unwrap();

    assert!(report.contains("Burglary"));
    assert!(report.contains("2014-01"));
    assert!(report.contains("On Or Near Shops"));
    assert_eq!(
        lookup.recorded_calls().await,
        vec!["resolve_coordinates", "fetch_street_crimes"]
    );
}

#[tokio::test]
async fn test_crimes_report_empty_list() {
    let mut lookup = StubLookup::new();
    lookup.crimes.clear();
    let report = commands::crimes_report(&lookup, "B458ES", None).await.unwrap();

    assert_eq!(report, "No street-level crimes found\n");
}

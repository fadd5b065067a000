use crate::utils::error::Result;
use crate::utils::validation::validate_url;

pub const DEFAULT_GEOCODER_URL: &str = "http://uk-postcodes.com/postcode";
pub const DEFAULT_POLICE_API_URL: &str = "http://data.police.uk/api";

/// Base URLs of the two upstream services, passed into the lookup pipeline
/// explicitly so tests can point it at mock servers.
#[derive(Debug, Clone)]
pub struct ApiEndpoints {
    geocoder_base: String,
    police_base: String,
}

impl ApiEndpoints {
    pub fn new(geocoder_base: impl Into<String>, police_base: impl Into<String>) -> Self {
        let trim = |s: String| s.trim_end_matches('/').to_string();
        Self {
            geocoder_base: trim(geocoder_base.into()),
            police_base: trim(police_base.into()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_url("geocoder-url", &self.geocoder_base)?;
        validate_url("police-api-url", &self.police_base)?;
        Ok(())
    }

    pub fn geocode(&self, postcode: &str) -> String {
        format!("{}/{}.json", self.geocoder_base, postcode)
    }

    pub fn locate_neighbourhood(&self) -> String {
        format!("{}/locate-neighbourhood", self.police_base)
    }

    pub fn neighbourhood(&self, force: &str, neighbourhood: &str) -> String {
        format!("{}/{}/{}", self.police_base, force, neighbourhood)
    }

    pub fn force(&self, force: &str) -> String {
        format!("{}/forces/{}", self.police_base, force)
    }

    pub fn street_crimes(&self) -> String {
        format!("{}/crimes-street/all-crime", self.police_base)
    }
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_GEOCODER_URL, DEFAULT_POLICE_API_URL)
    }
}

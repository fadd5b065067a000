use crate::config::ApiEndpoints;
use crate::core::{
    AreaInfo, Coordinates, CrimeMonth, CrimeRecord, ForceInfo, LookupService, PolicingContext,
    Result,
};
use crate::utils::error::UkpolError;
use async_trait::async_trait;
use reqwest::Client;

/// Resolution pipeline over the two upstream HTTP services. Each operation
/// issues a single request with no retry; non-2xx statuses surface as
/// `ApiError` via `error_for_status`.
pub struct HttpLookupService {
    client: Client,
    endpoints: ApiEndpoints,
}

impl HttpLookupService {
    pub fn new(endpoints: ApiEndpoints) -> Self {
        Self {
            client: Client::new(),
            endpoints,
        }
    }

    async fn get_json(&self, request: reqwest::RequestBuilder) -> Result<serde_json::Value> {
        let response = request.send().await?;
        tracing::debug!("API response status: {}", response.status());
        let response = response.error_for_status()?;
        Ok(response.json().await?)
    }
}

fn expect_str(
    body: &serde_json::Value,
    endpoint: &'static str,
    field: &'static str,
) -> Result<String> {
    body.get(field)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or(UkpolError::MissingField { endpoint, field })
}

#[async_trait]
impl LookupService for HttpLookupService {
    async fn resolve_coordinates(&self, postcode: &str) -> Result<Coordinates> {
        let url = self.endpoints.geocode(postcode);
        tracing::debug!("Geocoding postcode {} via {}", postcode, url);

        let body = self.get_json(self.client.get(&url)).await?;
        let geo = body.get("geo").ok_or_else(|| UkpolError::LocationNotFound {
            postcode: postcode.to_string(),
        })?;

        Ok(serde_json::from_value(geo.clone())?)
    }

    async fn resolve_policing_context(&self, coords: &Coordinates) -> Result<PolicingContext> {
        let url = self.endpoints.locate_neighbourhood();
        tracing::debug!("Locating neighbourhood for ({}, {})", coords.lat, coords.lng);

        let request = self
            .client
            .get(&url)
            .query(&[("q", format!("{},{}", coords.lat, coords.lng))]);
        let body = self.get_json(request).await?;

        // Identifiers are used verbatim for downstream calls.
        let force = expect_str(&body, "locate-neighbourhood", "force")?;
        let neighbourhood = expect_str(&body, "locate-neighbourhood", "neighbourhood")?;

        Ok(PolicingContext {
            force,
            neighbourhood,
        })
    }

    async fn fetch_area_info(&self, context: &PolicingContext) -> Result<AreaInfo> {
        let url = self
            .endpoints
            .neighbourhood(&context.force, &context.neighbourhood);
        tracing::debug!("Fetching area info from {}", url);

        let body = self.get_json(self.client.get(&url)).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn fetch_force_info(&self, force: &str) -> Result<ForceInfo> {
        let url = self.endpoints.force(force);
        tracing::debug!("Fetching force info from {}", url);

        let body = self.get_json(self.client.get(&url)).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn fetch_street_crimes(
        &self,
        coords: &Coordinates,
        month: Option<&CrimeMonth>,
    ) -> Result<Vec<CrimeRecord>> {
        let url = self.endpoints.street_crimes();
        tracing::debug!("Fetching street crimes from {}", url);

        let mut request = self.client.get(&url).query(&[
            ("lat", coords.lat.to_string()),
            ("lng", coords.lng.to_string()),
        ]);
        if let Some(month) = month {
            request = request.query(&[("date", month.as_api_date())]);
        }

        let body = self.get_json(request).await?;
        Ok(serde_json::from_value(body)?)
    }
}

use crate::domain::model::{
    AreaInfo, Coordinates, CrimeMonth, CrimeRecord, ForceInfo, PolicingContext,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Port for the postcode-to-policing-context resolution pipeline. The report
/// builders depend on this trait so tests can substitute stub resolvers.
#[async_trait]
pub trait LookupService: Send + Sync {
    /// Geocode a postcode. Fails with `LocationNotFound` when the geocoder
    /// has no location for it.
    async fn resolve_coordinates(&self, postcode: &str) -> Result<Coordinates>;

    /// Locate the force and neighbourhood covering the coordinates.
    async fn resolve_policing_context(&self, coords: &Coordinates) -> Result<PolicingContext>;

    async fn fetch_area_info(&self, context: &PolicingContext) -> Result<AreaInfo>;

    async fn fetch_force_info(&self, force: &str) -> Result<ForceInfo>;

    /// List crimes near the coordinates, optionally limited to one month.
    async fn fetch_street_crimes(
        &self,
        coords: &Coordinates,
        month: Option<&CrimeMonth>,
    ) -> Result<Vec<CrimeRecord>>;
}

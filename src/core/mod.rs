pub mod commands;
pub mod display;
pub mod lookup;

pub use crate::domain::model::{
    AreaInfo, Coordinates, CrimeLocation, CrimeMonth, CrimeRecord, EngagementMethod, ForceInfo,
    PolicingContext, Street,
};
pub use crate::domain::ports::LookupService;
pub use crate::utils::error::Result;

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{ApiEndpoints, Cli, Commands};
pub use core::lookup::HttpLookupService;
pub use domain::model::CrimeMonth;
pub use domain::ports::LookupService;
pub use utils::error::{Result, UkpolError};

pub mod cli;
pub mod endpoints;

pub use cli::{Cli, Commands};
pub use endpoints::ApiEndpoints;

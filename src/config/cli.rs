use crate::config::endpoints::{ApiEndpoints, DEFAULT_GEOCODER_URL, DEFAULT_POLICE_API_URL};
use crate::domain::model::CrimeMonth;
use crate::utils::error::Result;
use crate::utils::validation::{validate_postcode, Validate};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ukpol",
    version,
    about = "Find UK policing information for a postcode",
    long_about = "The UK Police CLI. Find out data and info based on a UK postcode.\n\n\
        Examples:\n  ukpol area B610PL\n  ukpol force SK224PL\n  ukpol contact PE227DB\n  ukpol crimes B458ES\n\n\
        Do not put a space inside the postcode!",
    disable_version_flag = true
)]
pub struct Cli {
    #[arg(short = 'v', long, action = ArgAction::Version, help = "Print version")]
    pub version: Option<bool>,

    #[arg(
        long,
        global = true,
        default_value = DEFAULT_GEOCODER_URL,
        help = "Base URL of the postcode geocoding API"
    )]
    pub geocoder_url: String,

    #[arg(
        long,
        global = true,
        default_value = DEFAULT_POLICE_API_URL,
        help = "Base URL of the UK Police data API"
    )]
    pub police_api_url: String,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the neighbourhood covering a postcode, with contact details and description
    Area { postcode: String },
    /// Show contact details for the neighbourhood covering a postcode
    Contact { postcode: String },
    /// Show details of the police force covering a postcode
    Force { postcode: String },
    /// List street-level crimes near a postcode
    Crimes {
        postcode: String,
        #[arg(long, help = "Optional. (YYYYMM) Limit results to a specific month")]
        date: Option<String>,
    },
}

impl Cli {
    pub fn endpoints(&self) -> ApiEndpoints {
        ApiEndpoints::new(self.geocoder_url.clone(), self.police_api_url.clone())
    }
}

impl Validate for Cli {
    fn validate(&self) -> Result<()> {
        self.endpoints().validate()?;

        match &self.command {
            Commands::Area { postcode }
            | Commands::Contact { postcode }
            | Commands::Force { postcode } => validate_postcode(postcode),
            Commands::Crimes { postcode, date } => {
                validate_postcode(postcode)?;
                if let Some(date) = date {
                    date.parse::<CrimeMonth>()?;
                }
                Ok(())
            }
        }
    }
}

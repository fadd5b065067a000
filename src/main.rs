use clap::Parser;
use ukpol_cli::core::commands;
use ukpol_cli::utils::{logger, validation::Validate};
use ukpol_cli::{Cli, Commands, CrimeMonth, HttpLookupService, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting ukpol CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("Input validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }

    let lookup = HttpLookupService::new(cli.endpoints());

    let report: Result<String> = match &cli.command {
        Commands::Area { postcode } => commands::area_report(&lookup, postcode).await,
        Commands::Contact { postcode } => commands::contact_report(&lookup, postcode).await,
        Commands::Force { postcode } => commands::force_report(&lookup, postcode).await,
        Commands::Crimes { postcode, date } => {
            // Already validated; re-parsed here to hand the typed month on.
            match date.as_deref().map(str::parse::<CrimeMonth>).transpose() {
                Ok(month) => commands::crimes_report(&lookup, postcode, month.as_ref()).await,
                Err(e) => Err(e),
            }
        }
    };

    match report {
        Ok(text) => print!("{}", text),
        Err(e) => {
            tracing::error!("Lookup failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}

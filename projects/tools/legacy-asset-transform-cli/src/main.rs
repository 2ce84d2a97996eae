#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;

#[derive(FromArgs, Debug)]
/// Extracts and converts the assets of a legacy game executable
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Extract(commands::extract::ExtractCmd),
    Convert(commands::convert::ConvertCmd),
    Catalog(commands::catalog::CatalogCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli: TopLevel = argh::from_env();

    match cli.command {
        Commands::Extract(cmd) => {
            commands::extract::handle_extract_command(cmd)?;
        }
        Commands::Convert(cmd) => {
            commands::convert::handle_convert_command(cmd)?;
        }
        Commands::Catalog(cmd) => {
            commands::catalog::handle_catalog_command(cmd);
        }
    }

    Ok(())
}

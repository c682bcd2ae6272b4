//! # cfmigrate
//!
//! Pre-migration sanity check: resolve a domain on AWS Route 53 and on
//! Cloudflare, page through both record sets, and dump the Cloudflare side.

pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;

use std::io::Write;

pub use cli::Cli;
pub use compare::{Comparison, Providers, compare};
pub use config::{ConfigField, ConfigLoader, ConfigValues, Credentials};
pub use error::{AppError, ConfigError};

/// Full run: load configuration, build clients, compare, print.
pub async fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<Comparison, AppError> {
    let credentials = ConfigLoader::new(cli.config.clone(), cli.overrides())
        .load()?
        .into_credentials()?;
    tracing::debug!("Credentials: {credentials:?}");

    let providers = Providers::from_credentials(&credentials)?;
    execute(&providers, &credentials.domain, out).await
}

/// Compare with already-built providers and dump the Cloudflare records.
pub async fn execute<W: Write>(
    providers: &Providers,
    domain: &str,
    out: &mut W,
) -> Result<Comparison, AppError> {
    let comparison = compare(providers, domain).await?;
    report::dump(&comparison.cloudflare, out).map_err(AppError::Output)?;
    Ok(comparison)
}

/// Turn the run's result into an exit code, printing any error to `out`.
pub fn finish<W: Write>(result: Result<Comparison, AppError>, out: &mut W) -> u8 {
    match result {
        Ok(_) => 0,
        Err(e) => {
            if e.is_expected() {
                tracing::warn!("Run failed: {e:?}");
            } else {
                tracing::error!("Run failed: {e:?}");
            }
            let _ = writeln!(out, "{}", e.report());
            AppError::EXIT_CODE
        }
    }
}

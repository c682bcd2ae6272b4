//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::config::ConfigValues;

/// CLI arguments for cfmigrate
///
/// Holds secrets, so it has no `Debug` impl.
#[derive(Parser, Default)]
#[command(name = "cfmigrate")]
#[command(version, about = "Compare a domain's DNS records between AWS Route 53 and Cloudflare")]
#[command(long_about = r#"
Resolves the domain to a zone on both providers, pages through every record
on each side, and prints the Cloudflare records for inspection.

Values are merged in priority order:
1. Command-line flags
2. Environment variables (CFEMAIL, CFKEY, AWSKEY, AWSSECRET, DOMAIN)
3. --config <path>, or the first cfmigrate.{yaml,yml,toml,json}
   (optionally dot-prefixed) found in $HOME, then the current directory

Example:
  cfmigrate -e ops@example.com -k $CF_GLOBAL_KEY -a AKIA... -s ... -d example.com
"#)]
pub struct Cli {
    /// Config file (default: search $HOME, then . for cfmigrate.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Cloudflare account email address
    #[arg(short = 'e', long, value_name = "EMAIL")]
    pub cfemail: Option<String>,

    /// Cloudflare global API key
    #[arg(short = 'k', long, value_name = "KEY")]
    pub cfkey: Option<String>,

    /// AWS access key id
    #[arg(short = 'a', long, value_name = "KEY")]
    pub awskey: Option<String>,

    /// AWS secret access key
    #[arg(short = 's', long, value_name = "SECRET")]
    pub awssecret: Option<String>,

    /// Domain name to compare
    #[arg(short = 'd', long, value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Flag values as the highest-priority configuration layer.
    ///
    /// Flags given as empty strings are treated as absent.
    pub fn overrides(&self) -> ConfigValues {
        let given = |value: &Option<String>| value.clone().filter(|v| !v.trim().is_empty());
        ConfigValues {
            cfemail: given(&self.cfemail),
            cfkey: given(&self.cfkey),
            awskey: given(&self.awskey),
            awssecret: given(&self.awssecret),
            domain: given(&self.domain),
        }
    }
}

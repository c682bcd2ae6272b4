//! Configuration loading with multi-source merging
//!
//! Priority (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables `CFEMAIL`, `CFKEY`, `AWSKEY`, `AWSSECRET`, `DOMAIN`
//! 3. Config file: `--config <path>`, or the first `cfmigrate.*` / `.cfmigrate.*`
//!    (`yaml`, `yml`, `toml`, `json`) found in `$HOME`, then `.`
//!
//! Empty values count as unset at every level. Environment values and flags
//! are taken verbatim; only file values go through the `non_blank` scalar
//! conversion.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Format, Json, Serialized, Toml, Yaml},
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppError, ConfigError};

/// Config file names searched for, without extension.
pub const CONFIG_BASENAMES: [&str; 2] = ["cfmigrate", ".cfmigrate"];
/// Config file extensions searched for, in order.
pub const CONFIG_EXTENSIONS: [&str; 4] = ["yaml", "yml", "toml", "json"];

// ============ Fields ============

/// One of the five mandatory settings, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    CfEmail,
    CfKey,
    AwsKey,
    AwsSecret,
    Domain,
}

impl ConfigField {
    /// Validation order.
    pub const ALL: [Self; 5] = [
        Self::CfEmail,
        Self::CfKey,
        Self::AwsKey,
        Self::AwsSecret,
        Self::Domain,
    ];

    /// Key in config files; upper-cased it is the environment variable.
    pub fn key(self) -> &'static str {
        match self {
            Self::CfEmail => "cfemail",
            Self::CfKey => "cfkey",
            Self::AwsKey => "awskey",
            Self::AwsSecret => "awssecret",
            Self::Domain => "domain",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CfEmail => "cloudflare email",
            Self::CfKey => "cloudflare api key",
            Self::AwsKey => "AWS key",
            Self::AwsSecret => "AWS Secret Key",
            Self::Domain => "domain name",
        })
    }
}

// ============ Values ============

/// Merged, not yet validated configuration values.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValues {
    #[serde(default, deserialize_with = "non_blank", skip_serializing_if = "Option::is_none")]
    pub cfemail: Option<String>,
    #[serde(default, deserialize_with = "non_blank", skip_serializing_if = "Option::is_none")]
    pub cfkey: Option<String>,
    #[serde(default, deserialize_with = "non_blank", skip_serializing_if = "Option::is_none")]
    pub awskey: Option<String>,
    #[serde(default, deserialize_with = "non_blank", skip_serializing_if = "Option::is_none")]
    pub awssecret: Option<String>,
    #[serde(default, deserialize_with = "non_blank", skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl ConfigValues {
    /// Validate that every field is present.
    ///
    /// Fails with [`AppError::MissingField`] naming the first absent field in
    /// [`ConfigField::ALL`] order.
    pub fn into_credentials(self) -> Result<Credentials, AppError> {
        let require =
            |value: Option<String>, field: ConfigField| value.ok_or(AppError::MissingField(field));

        Ok(Credentials {
            cf_email: require(self.cfemail, ConfigField::CfEmail)?,
            cf_key: require(self.cfkey, ConfigField::CfKey)?,
            aws_key: require(self.awskey, ConfigField::AwsKey)?,
            aws_secret: require(self.awssecret, ConfigField::AwsSecret)?,
            domain: require(self.domain, ConfigField::Domain)?,
        })
    }
}

impl fmt::Debug for ConfigValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("ConfigValues")
            .field("cfemail", &self.cfemail)
            .field("cfkey", &secret(&self.cfkey))
            .field("awskey", &self.awskey)
            .field("awssecret", &secret(&self.awssecret))
            .field("domain", &self.domain)
            .finish()
    }
}

/// Scalars a config file may hold for a string setting.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Bool(bool),
}

/// Accept any scalar as a string (`awskey: 12345` in YAML is a number) and map
/// blank strings to `None`.
///
/// Unquoted numbers lose their original spelling (`0123` becomes `123`); quote
/// such values in the file.
fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Text(s) => s,
        Scalar::Unsigned(n) => n.to_string(),
        Scalar::Signed(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    });
    Ok(value.filter(|s| !s.trim().is_empty()))
}

// ============ Credentials ============

/// Validated credential bundle. Built once, never mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub cf_email: String,
    pub cf_key: String,
    pub aws_key: String,
    pub aws_secret: String,
    pub domain: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("cf_email", &self.cf_email)
            .field("cf_key", &"<redacted>")
            .field("aws_key", &self.aws_key)
            .field("aws_secret", &"<redacted>")
            .field("domain", &self.domain)
            .finish()
    }
}

// ============ Loader ============

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader {
    explicit_path: Option<PathBuf>,
    search_dirs: Vec<PathBuf>,
    overrides: ConfigValues,
}

impl ConfigLoader {
    /// Loader with the default search directories (`$HOME`, then `.`).
    pub fn new(explicit_path: Option<PathBuf>, overrides: ConfigValues) -> Self {
        Self {
            explicit_path,
            search_dirs: Self::default_search_dirs(),
            overrides,
        }
    }

    /// Replace the directories searched when no explicit path is given.
    #[must_use]
    pub fn with_search_dirs(mut self, search_dirs: Vec<PathBuf>) -> Self {
        self.search_dirs = search_dirs;
        self
    }

    /// `$HOME`, then the current directory.
    pub fn default_search_dirs() -> Vec<PathBuf> {
        dirs::home_dir()
            .into_iter()
            .chain(std::env::current_dir().ok())
            .collect()
    }

    /// The config file that will be read, if any.
    pub fn config_file(&self) -> Option<PathBuf> {
        if let Some(path) = &self.explicit_path {
            if !path.is_file() {
                tracing::warn!("Config file {} does not exist, ignoring", path.display());
                return None;
            }
            return Some(path.clone());
        }

        self.search_dirs.iter().find_map(|dir| {
            CONFIG_BASENAMES.iter().find_map(|base| {
                CONFIG_EXTENSIONS
                    .iter()
                    .map(|ext| dir.join(format!("{base}.{ext}")))
                    .find(|candidate| candidate.is_file())
            })
        })
    }

    /// Build the layered figment: file < environment < flags.
    pub fn figment(&self) -> Figment {
        let mut figment = Figment::new();

        if let Some(path) = self.config_file() {
            tracing::info!("Using config file: {}", path.display());
            figment = merge_file(figment, &path);
        }

        figment
            .merge(Serialized::defaults(env_values()))
            .merge(Serialized::defaults(&self.overrides))
    }

    /// Load and merge all sources. Does not validate presence of fields.
    pub fn load(&self) -> Result<ConfigValues, ConfigError> {
        let values: ConfigValues = self
            .figment()
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))?;
        tracing::debug!("Merged configuration: {values:?}");
        Ok(values)
    }
}

/// The format is picked from the extension; anything unrecognised is read as YAML.
fn merge_file(figment: Figment, path: &Path) -> Figment {
    match path.extension().and_then(OsStr::to_str) {
        Some("toml") => figment.merge(Toml::file(path)),
        Some("json") => figment.merge(Json::file(path)),
        _ => figment.merge(Yaml::file(path)),
    }
}

/// `CFEMAIL`, `CFKEY`, `AWSKEY`, `AWSSECRET` and `DOMAIN`, read as strings.
/// Unset, blank and non-unicode values are skipped.
fn env_values() -> ConfigValues {
    let var = |field: ConfigField| {
        std::env::var(field.key().to_uppercase())
            .ok()
            .filter(|value| !value.trim().is_empty())
    };
    ConfigValues {
        cfemail: var(ConfigField::CfEmail),
        cfkey: var(ConfigField::CfKey),
        awskey: var(ConfigField::AwsKey),
        awssecret: var(ConfigField::AwsSecret),
        domain: var(ConfigField::Domain),
    }
}

// ============ Provider ============

/// Identifies a DNS provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderType {
    /// Cloudflare (CDN / DNS proxy).
    Cloudflare,
    /// AWS Route 53 (authoritative DNS host).
    Route53,
}

impl ProviderType {
    /// Stable lower-case identifier, identical to [`DnsProvider::id`](crate::DnsProvider::id).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cloudflare => "cloudflare",
            Self::Route53 => "route53",
        }
    }
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Records ============

/// A DNS resource record reshaped into a provider-independent form.
///
/// `ttl` is `0` and `values` is empty when a provider does not report them.
/// No uniqueness is implied: several records may share a name and type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedRecord {
    /// Fully-qualified record name as returned by the provider.
    pub name: String,
    /// Record type (`A`, `CNAME`, ...), passed through untouched.
    pub record_type: String,
    /// Time-to-live in seconds.
    pub ttl: u32,
    /// Record values, in provider order.
    pub values: Vec<String>,
}

impl NormalizedRecord {
    /// A record that only carries its name and type.
    pub fn name_and_type(name: impl Into<String>, record_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            ttl: 0,
            values: Vec::new(),
        }
    }
}

// ============ Credentials ============

/// Type-safe credential container for all supported DNS providers.
///
/// Each variant holds the authentication fields required by that provider.
/// Pass this to [`create_provider()`](crate::create_provider) to instantiate a provider.
/// The `Debug` output never contains secret values.
#[derive(Clone)]
pub enum ProviderCredentials {
    /// Cloudflare global API key credentials. Requires feature `cloudflare`.
    #[cfg(feature = "cloudflare")]
    Cloudflare {
        /// Account email address (`X-Auth-Email`).
        email: String,
        /// Global API key (`X-Auth-Key`).
        api_key: String,
    },

    /// AWS static credentials for Route 53. Requires feature `route53`.
    #[cfg(feature = "route53")]
    Route53 {
        /// AWS access key id.
        access_key_id: String,
        /// AWS secret access key.
        secret_access_key: String,
    },
}

impl ProviderCredentials {
    /// Which provider these credentials belong to.
    #[must_use]
    pub fn provider_type(&self) -> ProviderType {
        match self {
            #[cfg(feature = "cloudflare")]
            Self::Cloudflare { .. } => ProviderType::Cloudflare,
            #[cfg(feature = "route53")]
            Self::Route53 { .. } => ProviderType::Route53,
        }
    }
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "cloudflare")]
            Self::Cloudflare { email, .. } => f
                .debug_struct("Cloudflare")
                .field("email", email)
                .field("api_key", &"<redacted>")
                .finish(),
            #[cfg(feature = "route53")]
            Self::Route53 { access_key_id, .. } => f
                .debug_struct("Route53")
                .field("access_key_id", access_key_id)
                .field("secret_access_key", &"<redacted>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_type_display() {
        assert_eq!(ProviderType::Cloudflare.to_string(), "cloudflare");
        assert_eq!(ProviderType::Route53.to_string(), "route53");
    }

    #[test]
    fn name_and_type_leaves_ttl_and_values_empty() {
        let record = NormalizedRecord::name_and_type("www.example.com.", "CNAME");
        assert_eq!(record.name, "www.example.com.");
        assert_eq!(record.record_type, "CNAME");
        assert_eq!(record.ttl, 0);
        assert!(record.values.is_empty());
    }

    #[cfg(feature = "cloudflare")]
    #[test]
    fn debug_redacts_cloudflare_key() {
        let creds = ProviderCredentials::Cloudflare {
            email: "ops@example.com".to_string(),
            api_key: "super-secret".to_string(),
        };
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("ops@example.com"));
        assert!(!rendered.contains("super-secret"));
        assert_eq!(creds.provider_type(), ProviderType::Cloudflare);
    }

    #[cfg(feature = "route53")]
    #[test]
    fn debug_redacts_aws_secret() {
        let creds = ProviderCredentials::Route53 {
            access_key_id: "AKIDEXAMPLE".to_string(),
            secret_access_key: "wJalrXUtnFEMI".to_string(),
        };
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("AKIDEXAMPLE"));
        assert!(!rendered.contains("wJalrXUtnFEMI"));
        assert_eq!(creds.provider_type(), ProviderType::Route53);
    }
}

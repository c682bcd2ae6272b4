//! Log sanitization utilities
//!
//! Keeps API keys and long response bodies out of debug/error logs.

/// Maximum number of bytes of a response body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret left visible by [`mask_secret`].
const SECRET_VISIBLE_PREFIX: usize = 4;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Strings within the limit are returned unchanged; longer ones are cut at a
/// char boundary and suffixed with the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a credential for logging, e.g. `AKIA****`.
///
/// Secrets of at most twice the visible prefix are masked completely.
pub fn mask_secret(secret: &str) -> String {
    let chars = secret.chars().count();
    if chars <= SECRET_VISIBLE_PREFIX * 2 {
        "*".repeat(chars)
    } else {
        let prefix: String = secret.chars().take(SECRET_VISIBLE_PREFIX).collect();
        format!("{prefix}****")
    }
}

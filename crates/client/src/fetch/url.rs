//! Request URL normalization.

use tagbot_core::Error;
use url::Url;

/// Parse a user-supplied link into a fetchable URL.
///
/// Surrounding whitespace and angle brackets are stripped, a missing scheme
/// defaults to `https`, and any fragment is dropped since it never reaches
/// the server. Only `http` and `https` are accepted.
pub fn canonicalize(input: &str) -> Result<Url, Error> {
    let trimmed = input.trim().trim_start_matches('<').trim_end_matches('>');
    if trimmed.is_empty() {
        return Err(Error::NoLinkFound);
    }

    let with_scheme = if trimmed.contains("://") { trimmed.to_string() } else { format!("https://{trimmed}") };
    let mut parsed = Url::parse(&with_scheme).map_err(|e| Error::InvalidUrl(format!("{trimmed}: {e}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::InvalidUrl(format!("unsupported scheme: {}", parsed.scheme())));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(Error::InvalidUrl(format!("{trimmed}: missing host")));
    }

    parsed.set_fragment(None);
    Ok(parsed)
}

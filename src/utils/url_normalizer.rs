//! Redirect target validation and normalization.
//!
//! Link targets are stored in a canonical form: lowercase host, no default
//! port, no fragment. Only HTTP and HTTPS targets are accepted.

use url::Url;

/// Upper bound on stored target URL length.
pub const MAX_TARGET_URL_LEN: usize = 2048;

/// Reasons a redirect target is rejected.
#[derive(Debug, thiserror::Error)]
pub enum TargetUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS targets are allowed")]
    UnsupportedProtocol,

    #[error("Target URL must include a host")]
    MissingHost,

    #[error("Target URL exceeds {MAX_TARGET_URL_LEN} characters")]
    TooLong,
}

/// Normalizes a redirect target to its canonical form.
///
/// # Errors
///
/// Rejects malformed URLs, non-HTTP(S) schemes such as `javascript:` or
/// `data:`, URLs without a host, and URLs longer than [`MAX_TARGET_URL_LEN`].
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     normalize_target_url("HTTPS://EXAMPLE.COM:443/Path#top").unwrap(),
///     "https://example.com/Path"
/// );
/// ```
pub fn normalize_target_url(input: &str) -> Result<String, TargetUrlError> {
    let input = input.trim();
    if input.len() > MAX_TARGET_URL_LEN {
        return Err(TargetUrlError::TooLong);
    }

    let mut url = Url::parse(input).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(TargetUrlError::UnsupportedProtocol);
    }

    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or(TargetUrlError::MissingHost)?
        .to_ascii_lowercase();
    url.set_host(Some(&host))
        .map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    url.set_fragment(None);

    // Url::parse already drops the scheme's default port; this covers
    // explicit ports surviving host rewrites.
    if matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    ) {
        let _ = url.set_port(None);
    }

    Ok(url.to_string())
}

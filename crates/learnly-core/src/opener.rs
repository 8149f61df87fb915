//! External resource dispatch.
//!
//! Hands a validated URL to the platform opener (default browser). Failures
//! come back as a typed [`OpenError`] for the caller to surface; nothing
//! here is fatal.

use url::Url;

use crate::error::OpenError;

/// Validate `url` and open it with the platform's default handler.
///
/// Only http/https URLs are dispatched.
pub fn open_resource(url: &str) -> Result<(), OpenError> {
    let parsed = Url::parse(url).map_err(|e| OpenError::InvalidUrl {
        url: url.to_string(),
        message: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(OpenError::UnsupportedScheme {
                scheme: scheme.to_string(),
            })
        }
    }
    open::that(parsed.as_str()).map_err(|source| OpenError::LaunchFailed {
        url: url.to_string(),
        source,
    })
}

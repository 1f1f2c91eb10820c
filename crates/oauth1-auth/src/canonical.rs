//! Base string URI and normalized parameter string construction.
//!
//! These are the two request-derived components of the OAuth 1.0a signature
//! base string (RFC 5849, section 3.4.1):
//!
//! ```text
//! base string URI      = lower(scheme) "://" lower(host) lower(path)
//! normalized params    = sorted(encode(key) "=" encode(value)) joined by "&"
//! ```

use tracing::trace;

use crate::encoding::encode;
use crate::request::{ParameterPair, RequestView};

/// The parameter that carries the signature and is never itself signed.
pub const OAUTH_SIGNATURE_PARAM: &str = "oauth_signature";

/// Build the base string URI of a request.
///
/// Scheme, host and path are lower-cased with [`fold_lowercase`]. The host is
/// used verbatim otherwise, so an explicit port (even a default one) is kept.
///
/// # Examples
///
/// ```
/// use oauth1_auth::canonical::base_string_uri;
/// use oauth1_auth::request::OAuthRequest;
///
/// let request = OAuthRequest::new("GET", "HTTPS", "Example.com:8443", "/Resource");
/// assert_eq!(base_string_uri(&request), "https://example.com:8443/resource");
/// ```
#[must_use]
pub fn base_string_uri<R: RequestView + ?Sized>(request: &R) -> String {
    format!(
        "{}://{}{}",
        fold_lowercase(request.scheme()),
        fold_lowercase(request.host()),
        fold_lowercase(request.path())
    )
}

/// Lower-case one character at a time using the simple Unicode mapping.
///
/// Unlike [`str::to_lowercase`] this never looks at neighbouring characters
/// (a final `Σ` stays `σ`) and never expands a character (`İ` becomes `i`).
#[must_use]
pub fn fold_lowercase(s: &str) -> String {
    s.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Upper-case one character at a time, keeping any character whose upper
/// case is more than one character (`ß` stays `ß`).
#[must_use]
pub fn fold_uppercase(s: &str) -> String {
    s.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .collect()
}

/// Collect every query parameter followed by every form parameter.
///
/// Duplicates are preserved and nothing is filtered or encoded.
#[must_use]
pub fn collect_parameters<R: RequestView + ?Sized>(request: &R) -> Vec<ParameterPair> {
    request
        .query_parameters()
        .iter()
        .chain(request.form_parameters())
        .cloned()
        .collect()
}

/// Build the normalized parameter string of a request.
///
/// Every `oauth_signature` pair is dropped, the remaining keys and values are
/// percent-encoded, and the pairs are sorted by encoded key and then by
/// encoded value using byte-wise comparison.
///
/// # Examples
///
/// ```
/// use oauth1_auth::canonical::normalized_parameter_string;
/// use oauth1_auth::request::OAuthRequest;
///
/// let request = OAuthRequest::new("GET", "https", "example.com", "/")
///     .with_query_parameters([("b", "2"), ("a", "2"), ("a", "1")])
///     .with_form_parameter("oauth_signature", "ignored");
///
/// assert_eq!(normalized_parameter_string(&request), "a=1&a=2&b=2");
/// ```
#[must_use]
pub fn normalized_parameter_string<R: RequestView + ?Sized>(request: &R) -> String {
    let mut params: Vec<(String, String)> = collect_parameters(request)
        .into_iter()
        .filter(|(key, _)| key != OAUTH_SIGNATURE_PARAM)
        .map(|(key, value)| (encode(&key), encode(&value)))
        .collect();

    params.sort_unstable();

    trace!(count = params.len(), "Normalized request parameters");

    params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

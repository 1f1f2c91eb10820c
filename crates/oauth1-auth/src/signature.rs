//! OAuth 1.0a HMAC-SHA1 signing and verification.
//!
//! ```text
//! SignatureBaseString = UPPER(method) "&" encode(base string URI) "&" encode(normalized params)
//! SigningKey          = encode(client_shared_secret) "&" encode(token_shared_secret)
//! Signature           = Base64(HMAC-SHA1(SigningKey, SignatureBaseString))
//! ```
//!
//! Verification recomputes the signature and compares it with the
//! `oauth_signature` form parameter supplied by the client.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, KeyInit, Mac};
use sha1::Sha1;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::canonical::{
    OAUTH_SIGNATURE_PARAM, base_string_uri, fold_uppercase, normalized_parameter_string,
};
use crate::encoding::encode;
use crate::error::AuthError;
use crate::request::RequestView;

/// The only signature method supported by this implementation.
pub const HMAC_SHA1_METHOD: &str = "HMAC-SHA1";

type HmacSha1 = Hmac<Sha1>;

/// Build the signature base string of a request.
///
/// # Examples
///
/// ```
/// use oauth1_auth::request::OAuthRequest;
/// use oauth1_auth::signature::signature_base_string;
///
/// let request = OAuthRequest::new("get", "HTTPS", "Example.com", "/Resource")
///     .with_query_parameters([("b", "2"), ("a", "1")]);
///
/// assert_eq!(
///     signature_base_string(&request),
///     "GET&https%3A%2F%2Fexample.com%2Fresource&a%3D1%26b%3D2"
/// );
/// ```
#[must_use]
pub fn signature_base_string<R: RequestView + ?Sized>(request: &R) -> String {
    let method = fold_uppercase(request.method());
    let uri = encode(&base_string_uri(request));
    let params = encode(&normalized_parameter_string(request));

    format!("{method}&{uri}&{params}")
}

/// Build the HMAC-SHA1 signing key from the two shared secrets.
///
/// The `&` separator is always present, so an empty token secret (as used
/// while requesting temporary credentials) leaves a trailing `&`.
///
/// # Examples
///
/// ```
/// use oauth1_auth::signature::signing_key;
///
/// assert_eq!(
///     signing_key("kd94hf93k423kf44", "pfkkdhi9sl3r4s00"),
///     "kd94hf93k423kf44&pfkkdhi9sl3r4s00"
/// );
/// assert_eq!(signing_key("a b", ""), "a%20b&");
/// ```
#[must_use]
pub fn signing_key(client_shared_secret: &str, token_shared_secret: &str) -> String {
    format!(
        "{}&{}",
        encode(client_shared_secret),
        encode(token_shared_secret)
    )
}

/// Sign a signature base string: `Base64(HMAC-SHA1(key, base_string))`.
///
/// # Errors
///
/// Returns [`AuthError::InvalidSigningKey`] if the MAC primitive rejects the
/// key. HMAC accepts keys of any length, so this indicates a defect in the
/// crypto backend rather than a bad request.
pub fn sign_base_string(
    base_string: &str,
    client_shared_secret: &str,
    token_shared_secret: &str,
) -> Result<String, AuthError> {
    let key = signing_key(client_shared_secret, token_shared_secret);
    let mut mac =
        HmacSha1::new_from_slice(key.as_bytes()).map_err(|_| AuthError::InvalidSigningKey)?;
    mac.update(base_string.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

/// Compute the `HMAC-SHA1` signature of a request.
///
/// The caller attaches the result as the `oauth_signature` parameter.
///
/// # Errors
///
/// Returns [`AuthError::InvalidSigningKey`] if the MAC primitive rejects the key.
pub fn sign<R: RequestView + ?Sized>(
    request: &R,
    client_shared_secret: &str,
    token_shared_secret: &str,
) -> Result<String, AuthError> {
    let base_string = signature_base_string(request);

    debug!(base_string = %base_string, "Built OAuth signature base string");

    sign_base_string(&base_string, client_shared_secret, token_shared_secret)
}

/// Verify the `oauth_signature` form parameter of a request.
///
/// Returns `Ok(false)` when the signature is missing or does not match.
///
/// # Errors
///
/// Returns [`AuthError::InvalidSigningKey`] if the MAC primitive rejects the key.
pub fn verify<R: RequestView + ?Sized>(
    request: &R,
    client_shared_secret: &str,
    token_shared_secret: &str,
) -> Result<bool, AuthError> {
    let provided = request.form_parameter(OAUTH_SIGNATURE_PARAM).unwrap_or("");
    let expected = sign(request, client_shared_secret, token_shared_secret)?;

    let matches = signatures_match(provided, &expected);
    if !matches {
        debug!(
            expected = %expected,
            provided = %provided,
            "OAuth signature mismatch"
        );
    }

    Ok(matches)
}

/// Constant-time equality of two base64 signatures.
pub(crate) fn signatures_match(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}

//! Error types for OAuth 1.0a authentication.
//!
//! A plain signature mismatch reported by [`crate::signature::verify`] is a
//! `false`, not an error. [`AuthError`] covers the failure modes of the
//! server-facing [`crate::verifier::OAuth1Verifier`] and the rare fatal case
//! where the HMAC primitive rejects its key.

/// Errors that can occur while signing or authenticating an OAuth 1.0a request.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The HMAC-SHA1 primitive rejected the signing key.
    #[error("HMAC-SHA1 rejected the signing key")]
    InvalidSigningKey,

    /// A required OAuth protocol parameter is missing from the request.
    #[error("Missing required OAuth parameter: {0}")]
    MissingParameter(String),

    /// The `oauth_signature` form parameter is missing.
    #[error("Missing oauth_signature form parameter")]
    MissingSignature,

    /// The signature method is not supported (only `HMAC-SHA1` is supported).
    #[error("Unsupported signature method: {0}")]
    UnsupportedSignatureMethod(String),

    /// The consumer key was not found in the credential store.
    #[error("Consumer key not found: {0}")]
    ConsumerKeyNotFound(String),

    /// The token was not found in the credential store.
    #[error("Token not found: {0}")]
    TokenNotFound(String),

    /// The computed signature does not match the provided signature.
    #[error("Signature does not match")]
    SignatureDoesNotMatch,

    /// The HTTP request could not be turned into a signable view.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

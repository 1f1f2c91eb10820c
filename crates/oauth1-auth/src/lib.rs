//! OAuth 1.0a `HMAC-SHA1` request signing and verification.
//!
//! This crate computes and checks OAuth 1.0a signatures (RFC 5849) for HTTP
//! requests whose OAuth parameters travel in the query string and/or an
//! `application/x-www-form-urlencoded` body. `Authorization` header
//! parameters and signature methods other than `HMAC-SHA1` are not supported.
//!
//! # Overview
//!
//! The signature pipeline runs in one direction:
//!
//! ```text
//! RequestView -> base string URI + normalized parameters
//!             -> signature base string
//!             -> Base64(HMAC-SHA1(encode(client_secret) & encode(token_secret), base string))
//! ```
//!
//! Every step is a pure function of its inputs, so signing and verification
//! can run concurrently without coordination.
//!
//! # Usage
//!
//! ```rust
//! use oauth1_auth::request::OAuthRequest;
//! use oauth1_auth::signature::{sign, verify};
//!
//! let request = OAuthRequest::new("GET", "HTTPS", "Example.com", "/Resource")
//!     .with_query_parameters([("b", "2"), ("a", "1")]);
//!
//! let signature = sign(&request, "secret1", "secret2").unwrap();
//! assert_eq!(signature, "rNq1/NRgkJJcze+yMo9GjqPPv/M=");
//!
//! let signed = request.with_form_parameter("oauth_signature", signature);
//! assert!(verify(&signed, "secret1", "secret2").unwrap());
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Base string URI and normalized parameter string
//! - [`config`] - Verifier configuration
//! - [`credentials`] - Credential provider trait and in-memory implementation
//! - [`encoding`] - OAuth percent-encoding
//! - [`error`] - Authentication error types
//! - [`http_request`] - `RequestView` adapter for `http::Request`
//! - [`request`] - The `RequestView` trait and an owned request type
//! - [`signature`] - Signature base string, signing and verification
//! - [`verifier`] - Credential-backed request authentication

pub mod canonical;
pub mod config;
pub mod credentials;
pub mod encoding;
pub mod error;
pub mod http_request;
pub mod request;
pub mod signature;
pub mod verifier;

pub use config::VerifierConfig;
pub use credentials::{CredentialProvider, StaticCredentialProvider};
pub use error::AuthError;
pub use http_request::HttpRequestView;
pub use request::{OAuthRequest, ParameterPair, RequestView};
pub use signature::{sign, sign_base_string, signature_base_string, verify};
pub use verifier::{AuthResult, OAuth1Verifier};

//! Server-side authentication of OAuth 1.0a signed requests.
//!
//! [`OAuth1Verifier`] resolves the shared secrets of an incoming request
//! through a [`CredentialProvider`] and checks its `HMAC-SHA1` signature:
//!
//! 1. Read `oauth_consumer_key` (form body first, then query string).
//! 2. Reject any `oauth_signature_method` other than `HMAC-SHA1`.
//! 3. Resolve the client shared secret and, when `oauth_token` is present,
//!    the token shared secret. Without a token the secret is empty.
//! 4. Recompute the signature and compare it with the `oauth_signature`
//!    form parameter in constant time.
//!
//! Nonce and timestamp replay protection is left to the caller.

use tracing::debug;

use crate::canonical::OAUTH_SIGNATURE_PARAM;
use crate::config::VerifierConfig;
use crate::credentials::CredentialProvider;
use crate::error::AuthError;
use crate::request::RequestView;
use crate::signature::{HMAC_SHA1_METHOD, sign, signatures_match};

const OAUTH_CONSUMER_KEY_PARAM: &str = "oauth_consumer_key";
const OAUTH_TOKEN_PARAM: &str = "oauth_token";
const OAUTH_SIGNATURE_METHOD_PARAM: &str = "oauth_signature_method";

/// The result of a successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult {
    /// The consumer key that signed the request.
    pub consumer_key: String,
    /// The token the request was made with, if any.
    pub token: Option<String>,
}

/// Authenticates OAuth 1.0a signed requests against a credential store.
///
/// # Examples
///
/// ```
/// use oauth1_auth::config::VerifierConfig;
/// use oauth1_auth::credentials::StaticCredentialProvider;
/// use oauth1_auth::request::OAuthRequest;
/// use oauth1_auth::signature::sign;
/// use oauth1_auth::verifier::OAuth1Verifier;
///
/// let provider = StaticCredentialProvider::new(vec![("ck".to_owned(), "cs".to_owned())]);
/// let verifier = OAuth1Verifier::new(VerifierConfig::default(), provider);
///
/// let request = OAuthRequest::new("POST", "https", "api.example.com", "/initiate")
///     .with_form_parameter("oauth_consumer_key", "ck");
/// let signature = sign(&request, "cs", "").unwrap();
/// let request = request.with_form_parameter("oauth_signature", signature);
///
/// let result = verifier.authenticate(&request).unwrap();
/// assert_eq!(result.consumer_key, "ck");
/// assert_eq!(result.token, None);
/// ```
#[derive(Debug, Clone)]
pub struct OAuth1Verifier<P> {
    config: VerifierConfig,
    credential_provider: P,
}

impl<P: CredentialProvider> OAuth1Verifier<P> {
    /// Create a verifier from a configuration and a credential provider.
    pub fn new(config: VerifierConfig, credential_provider: P) -> Self {
        Self {
            config,
            credential_provider,
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Authenticate a signed request.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if a required OAuth parameter is missing, the
    /// signature method is unsupported, a credential is unknown, or the
    /// signature does not match.
    pub fn authenticate<R: RequestView + ?Sized>(
        &self,
        request: &R,
    ) -> Result<AuthResult, AuthError> {
        let consumer_key = oauth_parameter(request, OAUTH_CONSUMER_KEY_PARAM)
            .ok_or_else(|| AuthError::MissingParameter(OAUTH_CONSUMER_KEY_PARAM.to_owned()))?;

        match oauth_parameter(request, OAUTH_SIGNATURE_METHOD_PARAM) {
            Some(HMAC_SHA1_METHOD) => {}
            Some(other) => return Err(AuthError::UnsupportedSignatureMethod(other.to_owned())),
            None if self.config.require_signature_method => {
                return Err(AuthError::MissingParameter(
                    OAUTH_SIGNATURE_METHOD_PARAM.to_owned(),
                ));
            }
            None => {}
        }

        let token = oauth_parameter(request, OAUTH_TOKEN_PARAM);

        debug!(consumer_key, token = ?token, "Authenticating OAuth 1.0a request");

        let client_secret = self.credential_provider.consumer_secret(consumer_key)?;
        let token_secret = match token {
            Some(token) => self.credential_provider.token_secret(token)?,
            None => String::new(),
        };

        let provided = request
            .form_parameter(OAUTH_SIGNATURE_PARAM)
            .ok_or(AuthError::MissingSignature)?;
        let expected = sign(request, &client_secret, &token_secret)?;

        if signatures_match(provided, &expected) {
            debug!(consumer_key, "OAuth signature verification succeeded");
            Ok(AuthResult {
                consumer_key: consumer_key.to_owned(),
                token: token.map(ToOwned::to_owned),
            })
        } else {
            debug!(
                expected = %expected,
                provided = %provided,
                "OAuth signature mismatch"
            );
            Err(AuthError::SignatureDoesNotMatch)
        }
    }
}

/// Look up an OAuth protocol parameter in the form body, then the query string.
fn oauth_parameter<'a, R: RequestView + ?Sized>(request: &'a R, key: &str) -> Option<&'a str> {
    request
        .form_parameter(key)
        .or_else(|| request.query_parameter(key))
}

//! Credential provider trait and implementations.
//!
//! This module defines the [`CredentialProvider`] trait for resolving the
//! client and token shared secrets of an OAuth 1.0a request, along with a
//! [`StaticCredentialProvider`] for testing and development use cases.

use std::collections::HashMap;

use crate::error::AuthError;

/// Trait for looking up OAuth shared secrets.
///
/// Implementations may back this with a database, configuration file,
/// or any other credential store.
pub trait CredentialProvider: Send + Sync {
    /// Retrieve the client shared secret for the given consumer key.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::ConsumerKeyNotFound`] if the consumer key is not recognized.
    fn consumer_secret(&self, consumer_key: &str) -> Result<String, AuthError>;

    /// Retrieve the token shared secret for the given token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenNotFound`] if the token is not recognized.
    fn token_secret(&self, token: &str) -> Result<String, AuthError>;
}

/// A simple in-memory credential provider backed by `HashMap`s.
///
/// # Examples
///
/// ```
/// use oauth1_auth::credentials::{CredentialProvider, StaticCredentialProvider};
///
/// let provider = StaticCredentialProvider::new(vec![
///     ("dpf43f3p2l4k3l03".to_owned(), "kd94hf93k423kf44".to_owned()),
/// ])
/// .with_tokens(vec![("nnch734d00sl2jdk".to_owned(), "pfkkdhi9sl3r4s00".to_owned())]);
///
/// assert_eq!(provider.consumer_secret("dpf43f3p2l4k3l03").unwrap(), "kd94hf93k423kf44");
/// assert_eq!(provider.token_secret("nnch734d00sl2jdk").unwrap(), "pfkkdhi9sl3r4s00");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialProvider {
    consumers: HashMap<String, String>,
    tokens: HashMap<String, String>,
}

impl StaticCredentialProvider {
    /// Create a provider from (consumer_key, client_shared_secret) pairs.
    pub fn new(consumers: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            consumers: consumers.into_iter().collect(),
            tokens: HashMap::new(),
        }
    }

    /// Add (token, token_shared_secret) pairs.
    #[must_use]
    pub fn with_tokens(mut self, tokens: impl IntoIterator<Item = (String, String)>) -> Self {
        self.tokens.extend(tokens);
        self
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn consumer_secret(&self, consumer_key: &str) -> Result<String, AuthError> {
        self.consumers
            .get(consumer_key)
            .cloned()
            .ok_or_else(|| AuthError::ConsumerKeyNotFound(consumer_key.to_owned()))
    }

    fn token_secret(&self, token: &str) -> Result<String, AuthError> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or_else(|| AuthError::TokenNotFound(token.to_owned()))
    }
}

//! Verifier configuration.

/// Configuration for [`crate::verifier::OAuth1Verifier`].
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerifierConfig {
    /// Reject requests that omit `oauth_signature_method`.
    pub require_signature_method: bool,
}

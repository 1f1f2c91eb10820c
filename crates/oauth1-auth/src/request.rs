//! Read-only request abstraction consumed by the signing pipeline.
//!
//! The signing code never parses HTTP. Callers hand it a [`RequestView`]
//! whose query and form parameters have already been percent-decoded into
//! plain `(key, value)` pairs. [`OAuthRequest`] is an owned implementation
//! for clients building a request to sign; [`crate::http_request::HttpRequestView`]
//! adapts an incoming `http::Request`.

/// A `(key, value)` request parameter. Keys are not unique.
pub type ParameterPair = (String, String);

/// Read-only view of the parts of an HTTP request that are covered by an
/// OAuth 1.0a signature.
pub trait RequestView {
    /// The HTTP method, in any case.
    fn method(&self) -> &str;

    /// The URI scheme (`http` or `https`), in any case.
    fn scheme(&self) -> &str;

    /// The host, including the port when one was supplied.
    fn host(&self) -> &str;

    /// The request path, without query string or fragment.
    fn path(&self) -> &str;

    /// Decoded query string parameters in request order.
    fn query_parameters(&self) -> &[ParameterPair];

    /// Decoded form body parameters in request order.
    fn form_parameters(&self) -> &[ParameterPair];

    /// The first form parameter named `key`, if any.
    fn form_parameter(&self, key: &str) -> Option<&str> {
        find_parameter(self.form_parameters(), key)
    }

    /// The first query parameter named `key`, if any.
    fn query_parameter(&self, key: &str) -> Option<&str> {
        find_parameter(self.query_parameters(), key)
    }
}

fn find_parameter<'a>(params: &'a [ParameterPair], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// An owned, in-memory request.
///
/// # Examples
///
/// ```
/// use oauth1_auth::request::{OAuthRequest, RequestView};
///
/// let request = OAuthRequest::new("GET", "https", "example.com", "/photos")
///     .with_query_parameter("size", "original")
///     .with_form_parameter("oauth_signature", "abc=");
///
/// assert_eq!(request.query_parameter("size"), Some("original"));
/// assert_eq!(request.form_parameter("oauth_signature"), Some("abc="));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OAuthRequest {
    method: String,
    scheme: String,
    host: String,
    path: String,
    query: Vec<ParameterPair>,
    form: Vec<ParameterPair>,
}

impl OAuthRequest {
    /// Create a request with no parameters.
    pub fn new(
        method: impl Into<String>,
        scheme: impl Into<String>,
        host: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            scheme: scheme.into(),
            host: host.into(),
            path: path.into(),
            query: Vec::new(),
            form: Vec::new(),
        }
    }

    /// Append a query parameter.
    #[must_use]
    pub fn with_query_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append a form parameter.
    #[must_use]
    pub fn with_form_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.form.push((key.into(), value.into()));
        self
    }

    /// Append several query parameters.
    #[must_use]
    pub fn with_query_parameters<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Append several form parameters.
    #[must_use]
    pub fn with_form_parameters<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.form
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

impl RequestView for OAuthRequest {
    fn method(&self) -> &str {
        &self.method
    }

    fn scheme(&self) -> &str {
        &self.scheme
    }

    fn host(&self) -> &str {
        &self.host
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn query_parameters(&self) -> &[ParameterPair] {
        &self.query
    }

    fn form_parameters(&self) -> &[ParameterPair] {
        &self.form
    }
}

//! [`RequestView`] adapter for `http` crate requests.
//!
//! Query and `application/x-www-form-urlencoded` body parameters are decoded
//! with `form_urlencoded`, so `+` becomes a space and `%XX` escapes are
//! resolved before signing.

use http::header::{CONTENT_TYPE, HOST};

use crate::error::AuthError;
use crate::request::{ParameterPair, RequestView};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A signable snapshot of an `http` request.
///
/// # Examples
///
/// ```
/// use oauth1_auth::http_request::HttpRequestView;
/// use oauth1_auth::request::RequestView;
///
/// let (parts, ()) = http::Request::builder()
///     .method("POST")
///     .uri("https://api.example.com/statuses?include_entities=true")
///     .header("content-type", "application/x-www-form-urlencoded")
///     .body(())
///     .unwrap()
///     .into_parts();
///
/// let view = HttpRequestView::from_parts(&parts, b"status=Hello+world").unwrap();
/// assert_eq!(view.host(), "api.example.com");
/// assert_eq!(view.query_parameter("include_entities"), Some("true"));
/// assert_eq!(view.form_parameter("status"), Some("Hello world"));
/// ```
#[derive(Debug, Clone)]
pub struct HttpRequestView {
    method: String,
    scheme: String,
    host: String,
    path: String,
    query: Vec<ParameterPair>,
    form: Vec<ParameterPair>,
}

impl HttpRequestView {
    /// Build a view from request parts and the raw request body.
    ///
    /// The scheme defaults to `http` for origin-form request targets. The
    /// host comes from the URI authority, falling back to the `Host` header.
    /// The body is parsed only when the content type is
    /// `application/x-www-form-urlencoded`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidRequest`] if no host can be determined.
    pub fn from_parts(parts: &http::request::Parts, body: &[u8]) -> Result<Self, AuthError> {
        let host = match parts.uri.authority() {
            Some(authority) => authority.as_str().to_owned(),
            None => parts
                .headers
                .get(HOST)
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| AuthError::InvalidRequest("missing Host header".to_owned()))?
                .to_owned(),
        };

        let query = parts
            .uri
            .query()
            .map(|q| parse_pairs(q.as_bytes()))
            .unwrap_or_default();

        let form = if is_form_encoded(parts) {
            parse_pairs(body)
        } else {
            Vec::new()
        };

        Ok(Self {
            method: parts.method.as_str().to_owned(),
            scheme: parts.uri.scheme_str().unwrap_or("http").to_owned(),
            host,
            path: parts.uri.path().to_owned(),
            query,
            form,
        })
    }
}

fn is_form_encoded(parts: &http::request::Parts) -> bool {
    parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}

fn parse_pairs(input: &[u8]) -> Vec<ParameterPair> {
    form_urlencoded::parse(input).into_owned().collect()
}

impl RequestView for HttpRequestView {
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

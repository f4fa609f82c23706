use bytes::Bytes;
use http::header::HeaderName;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;
use http::Uri;

use crate::Error;
use crate::Result;

/// Signing context for request.
///
/// `SigningRequest` is a read/write view over the parts of a request that
/// take part in signing. Method and URL are optional so that signers can
/// report exactly which part is missing.
///
/// Headers are stored in [`HeaderMap`], so lookups are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Option<Method>,
    /// HTTP uri, carrying path, query and host.
    pub uri: Option<Uri>,
    /// HTTP headers.
    pub headers: HeaderMap,
    /// HTTP body.
    pub body: Option<Bytes>,
}

impl SigningRequest {
    /// Create a new signing request with given method and uri.
    pub fn new(method: Method, uri: Uri) -> Self {
        Self {
            method: Some(method),
            uri: Some(uri),
            ..Default::default()
        }
    }

    /// Build a signing request from http::request::Parts and body.
    pub fn from_parts(parts: http::request::Parts, body: Option<Bytes>) -> Self {
        Self {
            method: Some(parts.method),
            uri: Some(parts.uri),
            headers: parts.headers,
            body,
        }
    }

    /// Set the method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Set the uri.
    pub fn with_uri(mut self, uri: Uri) -> Self {
        self.uri = Some(uri);
        self
    }

    /// Set the body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set a header, replacing any existing values.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        self.header_insert(name, value)?;
        Ok(self)
    }

    /// Get the body bytes, empty if body is not set.
    #[inline]
    pub fn body_bytes(&self) -> &[u8] {
        self.body.as_deref().unwrap_or_default()
    }

    /// Check if the header exists.
    #[inline]
    pub fn header_contains(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }

    /// Get header value by name.
    ///
    /// Returns `None` if header not found, and an error if the value
    /// is not visible ASCII.
    pub fn header_get(&self, name: &str) -> Result<Option<&str>> {
        match self.headers.get(name) {
            Some(v) => Ok(Some(v.to_str()?)),
            None => Ok(None),
        }
    }

    /// Insert a header, replacing any existing values.
    pub fn header_insert(&mut self, name: &str, value: &str) -> Result<()> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        self.headers.insert(name, HeaderValue::from_str(value)?);
        Ok(())
    }

    /// Convert back into http::Request.
    pub fn into_http(self) -> Result<http::Request<Bytes>> {
        let method = self
            .method
            .ok_or_else(|| Error::method_missing("request without method can't be converted"))?;
        let uri = self
            .uri
            .ok_or_else(|| Error::url_missing("request without uri can't be converted"))?;

        let mut req = http::Request::new(self.body.unwrap_or_default());
        *req.method_mut() = method;
        *req.uri_mut() = uri;
        *req.headers_mut() = self.headers;
        Ok(req)
    }
}

impl<B: Into<Bytes>> From<http::Request<B>> for SigningRequest {
    fn from(req: http::Request<B>) -> Self {
        let (parts, body) = req.into_parts();
        Self::from_parts(parts, Some(body.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_case_insensitive() -> Result<()> {
        let req = SigningRequest::default().with_header("X-Date", "Sun, 05 Jan 2014 21:31:40 GMT")?;

        assert!(req.header_contains("x-date"));
        assert!(req.header_contains("X-DATE"));
        assert_eq!(
            req.header_get("x-date")?,
            Some("Sun, 05 Jan 2014 21:31:40 GMT")
        );
        assert_eq!(req.header_get("date")?, None);
        Ok(())
    }

    #[test]
    fn test_header_insert_overwrites() -> Result<()> {
        let mut req = SigningRequest::default().with_header("content-type", "text/plain")?;
        req.header_insert("Content-Type", "application/json")?;

        assert_eq!(req.headers.get_all("content-type").iter().count(), 1);
        assert_eq!(req.header_get("content-type")?, Some("application/json"));
        Ok(())
    }

    #[test]
    fn test_http_round_trip() -> Result<()> {
        let req = http::Request::post("https://objectstorage.us-phoenix-1.oraclecloud.com/n/ns/b/")
            .header("opc-request-id", "abc")
            .body("{}")?;

        let signing_req = SigningRequest::from(req);
        assert_eq!(signing_req.method, Some(Method::POST));
        assert_eq!(signing_req.body_bytes(), b"{}");

        let req = signing_req.into_http()?;
        assert_eq!(req.uri().path(), "/n/ns/b/");
        assert_eq!(req.headers()["opc-request-id"], "abc");
        assert_eq!(req.body().as_ref(), b"{}");
        Ok(())
    }

    #[test]
    fn test_into_http_without_method() {
        let err = SigningRequest::default().into_http().unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::MethodMissing);
    }
}

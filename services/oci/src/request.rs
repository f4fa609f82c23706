use http::Method;
use http::Uri;
use ocisign_core::time::{format_http_date, now, DateTime};
use ocisign_core::{Error, Result, SigningRequest};
use percent_encoding::utf8_percent_encode;

use crate::constants::*;

/// Build a `GET` request for `endpoint` that carries everything a
/// bodyless request needs to be signed: `date` set to now and `host`
/// taken from the endpoint.
///
/// Characters that are not allowed in a URI are percent-encoded first.
/// Existing `%` escapes are kept as-is.
pub fn new_request(endpoint: &str) -> Result<SigningRequest> {
    new_request_with_time(endpoint, now())
}

/// Same as [`new_request`] but with an explicit `date`.
pub fn new_request_with_time(endpoint: &str, time: DateTime) -> Result<SigningRequest> {
    let encoded = utf8_percent_encode(endpoint.trim(), &OCI_ENDPOINT_ENCODE_SET).to_string();
    let uri: Uri = encoded.parse().map_err(|e| {
        Error::url_missing(format!("endpoint {encoded:?} is not a valid url")).with_source(e)
    })?;

    let host = uri
        .host()
        .filter(|host| !host.is_empty())
        .ok_or_else(|| Error::url_missing(format!("endpoint {encoded:?} has no host")))?
        .to_string();

    SigningRequest::new(Method::GET, uri)
        .with_header(DATE, &format_http_date(time))?
        .with_header(HOST, &host)
}

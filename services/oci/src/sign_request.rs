use std::fmt::Write;

use http::header::AUTHORIZATION;
use http::HeaderValue;
use http::Method;
use log::debug;
use ocisign_core::hash::{base64_encode, base64_sha256};
use ocisign_core::{Error, Result, SignRequest, SigningCredential, SigningRequest};

use crate::constants::*;
use crate::Credential;

/// RequestSigner that implements Oracle Cloud Infrastructure API signing.
///
/// - [Oracle Cloud Infrastructure API Signing](https://docs.oracle.com/en-us/iaas/Content/API/Concepts/signingrequests.htm)
///
/// The signature covers `date` (or `x-date`), `(request-target)` and `host`.
/// `POST` and `PUT` requests also cover `content-length`, `content-type`
/// and `x-content-sha256`, which are filled in when missing.
#[derive(Debug, Default)]
pub struct RequestSigner {}

impl RequestSigner {
    /// Create a new signer for Oracle Cloud Infrastructure.
    pub fn new() -> Self {
        Self {}
    }

    /// Sign the request and hand it back.
    pub fn sign(&self, mut req: SigningRequest, cred: &Credential) -> Result<SigningRequest> {
        self.sign_request(&mut req, cred)?;
        Ok(req)
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(&self, req: &mut SigningRequest, cred: &Self::Credential) -> Result<()> {
        if !cred.is_valid() {
            return Err(Error::params_not_set(format!(
                "credential is incomplete, missing: {}",
                cred.missing_fields().join(", ")
            )));
        }
        let Some(private_key) = cred.private_key.as_ref() else {
            return Err(Error::params_not_set("private key is not set"));
        };

        // Work on a copy so that a failed signing leaves the request untouched.
        let mut signed_req = req.clone();

        let headers = headers_to_sign(&signed_req);
        if is_body_method(signed_req.method.as_ref()) {
            complete_headers_for_body(&mut signed_req)?;
        }
        debug!("headers to sign: {headers:?}");

        let string_to_sign = string_to_sign(&signed_req, &headers)?;
        debug!("string to sign: {}", &string_to_sign);

        let signature = base64_encode(&private_key.sign(string_to_sign.as_bytes())?);

        let mut authorization = String::new();
        write!(authorization, "Signature version=\"{}\",", cred.signature_version)?;
        write!(authorization, "headers=\"{}\",", headers.join(" "))?;
        write!(authorization, "keyId=\"{}\",", cred.key_id())?;
        write!(authorization, "algorithm=\"{ALGORITHM}\",")?;
        write!(authorization, "signature=\"{signature}\"")?;

        let mut value = HeaderValue::from_str(&authorization)?;
        value.set_sensitive(true);
        signed_req.headers.insert(AUTHORIZATION, value);

        *req = signed_req;
        Ok(())
    }
}

/// Only `POST` and `PUT` carry a signed body. The match is exact, so an
/// extension method like `post` is signed as a bodyless request.
fn is_body_method(method: Option<&Method>) -> bool {
    matches!(method, Some(m) if m == Method::POST || m == Method::PUT)
}

/// Select the headers that take part in the signature, in signing order.
///
/// ```text
/// date (request-target) host [content-length content-type x-content-sha256]
/// ```
///
/// `x-date` replaces `date` when the request carries it.
pub fn headers_to_sign(req: &SigningRequest) -> Vec<&'static str> {
    let date = if req.header_contains(X_DATE) {
        X_DATE
    } else {
        DATE
    };

    let mut headers = vec![date, REQUEST_TARGET, HOST];
    if is_body_method(req.method.as_ref()) {
        headers.extend([CONTENT_LENGTH, CONTENT_TYPE, X_CONTENT_SHA256]);
    }
    headers
}

/// Fill in `content-length`, `content-type` and `x-content-sha256` when the
/// request doesn't carry them. Values set by the caller are kept.
pub fn complete_headers_for_body(req: &mut SigningRequest) -> Result<()> {
    if !req.header_contains(CONTENT_LENGTH) {
        let length = req.body_bytes().len().to_string();
        debug!("filling missing {CONTENT_LENGTH}: {length}");
        req.header_insert(CONTENT_LENGTH, &length)?;
    }
    if !req.header_contains(CONTENT_TYPE) {
        debug!("filling missing {CONTENT_TYPE}: {DEFAULT_CONTENT_TYPE}");
        req.header_insert(CONTENT_TYPE, DEFAULT_CONTENT_TYPE)?;
    }
    if !req.header_contains(X_CONTENT_SHA256) {
        debug!("filling missing {X_CONTENT_SHA256}");
        add_content_digest_header(req)?;
    }
    Ok(())
}

/// Set `x-content-sha256` to the base64 encoded SHA-256 digest of the body.
///
/// The digest is always recomputed from the current body and replaces any
/// existing value. A missing body hashes as empty bytes.
pub fn add_content_digest_header(req: &mut SigningRequest) -> Result<()> {
    let digest = base64_sha256(req.body_bytes());
    req.header_insert(X_CONTENT_SHA256, &digest)
}

/// Construct string to sign.
///
/// # Format
///
/// ```text
///   "date: {Date}" + "\n"
/// + "(request-target): {verb} {path}[?{query}]" + "\n"
/// + "host: {Host}"
/// ```
///
/// Every selected header contributes one `name: value` line; lines are
/// joined by `\n` without a trailing newline.
///
/// Values are used verbatim but must be visible ASCII. A signed header
/// carrying obs-text (bytes `0x80..=0xFF`) fails with `RequestInvalid`.
pub fn string_to_sign(req: &SigningRequest, headers: &[&str]) -> Result<String> {
    let mut s = String::new();

    for (idx, name) in headers.iter().enumerate() {
        if idx != 0 {
            s.push('\n');
        }

        let name = name.to_lowercase();
        if name == REQUEST_TARGET {
            write!(s, "{name}: {}", request_target(req)?)?;
        } else {
            let value = req.header_get(&name)?.ok_or_else(|| {
                Error::signing_header_missing(format!("header {name} is required for signing"))
            })?;
            write!(s, "{name}: {value}")?;
        }
    }

    Ok(s)
}

/// Build `(request-target)` value: `{lowercase method} {path}[?{query}]`.
///
/// The query is used verbatim; it's expected to be percent-encoded already.
fn request_target(req: &SigningRequest) -> Result<String> {
    let method = req
        .method
        .as_ref()
        .ok_or_else(|| Error::method_missing("method is required for (request-target)"))?;
    let uri = req
        .uri
        .as_ref()
        .ok_or_else(|| Error::url_missing("url is required for (request-target)"))?;

    let mut target = format!("{} {}", method.as_str().to_lowercase(), uri.path());
    if let Some(query) = uri.query() {
        target.push('?');
        target.push_str(query);
    }
    Ok(target)
}

//! Core components for signing API requests.
//!
//! This crate provides the foundational types and traits for ocisign.
//! Services build on top of them to implement their own signing scheme.
//!
//! ## Overview
//!
//! - **SigningRequest**: a read/write view over the method, url, headers and body of a request
//! - **Traits**: credential validation (`SigningCredential`) and request signing (`SignRequest`)
//! - **Signer**: pairs a `SignRequest` implementation with an immutable credential
//!
//! ## Example
//!
//! ```
//! use ocisign_core::{Result, SignRequest, Signer, SigningCredential, SigningRequest};
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyBuilder;
//!
//! impl SignRequest for MyBuilder {
//!     type Credential = MyCredential;
//!
//!     fn sign_request(&self, req: &mut SigningRequest, cred: &MyCredential) -> Result<()> {
//!         req.header_insert("authorization", &format!("Key {}", cred.key))
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let signer = Signer::new(MyBuilder, MyCredential { key: "my-key".to_string() });
//!
//! let req = SigningRequest::new(http::Method::GET, http::Uri::from_static("https://example.com"));
//! let req = signer.sign(req)?;
//! assert_eq!(req.header_get("authorization")?, Some("Key my-key"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: base64 and SHA-256 helpers
//! - [`time`]: time helpers, including http date formatting
//! - [`utils`]: general utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod env;
pub use env::{Env, OsEnv, StaticEnv};
mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{SignRequest, SigningCredential};
mod request;
pub use request::SigningRequest;
mod signer;
pub use signer::Signer;

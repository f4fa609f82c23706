//! Oracle Cloud Infrastructure service signer
//!
//! Signs requests with the OCI HTTP signature scheme: a set of headers is
//! selected, rendered into a canonical string, signed with RSA-SHA256 and
//! attached as the `Authorization` header.
//!
//! ```no_run
//! use ocisign_core::{OsEnv, Result, Signer};
//! use ocisign_oci::{new_request, Config, Credential, RequestSigner};
//!
//! # fn main() -> Result<()> {
//! let cred = Credential::from_config(Config::from_env(&OsEnv))?;
//! let signer = Signer::new(RequestSigner::new(), cred);
//!
//! let req = new_request("https://iaas.us-phoenix-1.oraclecloud.com/20160918/instances")?;
//! let req = signer.sign(req)?.into_http()?;
//! # Ok(())
//! # }
//! ```

mod constants;

mod config;
pub use config::Config;

mod key;
pub use key::PrivateKey;

mod credential;
pub use credential::{Credential, SignatureVersion};

mod sign_request;
pub use sign_request::{
    add_content_digest_header, complete_headers_for_body, headers_to_sign, string_to_sign,
    RequestSigner,
};

mod request;
pub use request::{new_request, new_request_with_time};

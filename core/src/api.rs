use crate::{Result, SigningRequest};
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential carries everything required to sign.
    fn is_valid(&self) -> bool;
}

/// SignRequest is the trait used by signer to sign the request.
///
/// Signing is CPU bound and happens on the calling thread, so this trait
/// is synchronous.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this builder.
    type Credential: SigningCredential;

    /// Sign the request in place.
    ///
    /// Implementations must leave `req` untouched when an error is returned.
    fn sign_request(&self, req: &mut SigningRequest, credential: &Self::Credential)
        -> Result<()>;
}

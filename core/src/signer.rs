use crate::{Result, SignRequest, SigningCredential, SigningRequest};
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// Signer pairs one [`SignRequest`] implementation with one immutable
/// credential. It's cheap to clone and safe to share between threads,
/// so multiple signers (for example, one per tenancy) can coexist.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<K>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(builder: impl SignRequest<Credential = K>, credential: K) -> Self {
        Self {
            builder: Arc::new(builder),
            credential: Arc::new(credential),
        }
    }

    /// Signing request in place.
    pub fn sign_in_place(&self, req: &mut SigningRequest) -> Result<()> {
        self.builder.sign_request(req, &self.credential)
    }

    /// Signing request and hand it back.
    pub fn sign(&self, mut req: SigningRequest) -> Result<SigningRequest> {
        self.sign_in_place(&mut req)?;
        Ok(req)
    }
}

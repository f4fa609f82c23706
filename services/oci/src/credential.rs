// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{self, Debug, Display, Formatter};

use ocisign_core::{Result, SigningCredential};

use crate::{Config, PrivateKey};

/// Version of the OCI signature scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum SignatureVersion {
    /// Version 1, the only version defined so far.
    #[default]
    V1,
}

impl Display for SignatureVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SignatureVersion::V1 => f.write_str("1"),
        }
    }
}

/// Credential that holds the identity and the API private key used to sign.
///
/// A credential is built once and then only read; share it by reference or
/// wrap it in [`ocisign_core::Signer`].
#[derive(Clone, Default)]
pub struct Credential {
    /// OCID of the tenancy.
    pub tenancy: String,
    /// OCID of the user.
    pub user: String,
    /// Fingerprint of the uploaded public key.
    pub fingerprint: String,
    /// API private key.
    pub private_key: Option<PrivateKey>,
    /// Signature version put into the `Authorization` header.
    pub signature_version: SignatureVersion,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("tenancy", &self.tenancy)
            .field("user", &self.user)
            .field("fingerprint", &self.fingerprint)
            .field("private_key", &self.private_key)
            .field("signature_version", &self.signature_version)
            .finish()
    }
}

impl Credential {
    /// Create a new credential.
    pub fn new(tenancy: &str, user: &str, fingerprint: &str, private_key: PrivateKey) -> Self {
        Self {
            tenancy: tenancy.to_string(),
            user: user.to_string(),
            fingerprint: fingerprint.to_string(),
            private_key: Some(private_key),
            signature_version: SignatureVersion::V1,
        }
    }

    /// Build a credential from config.
    ///
    /// The private key is parsed here, so a malformed key fails early. Missing
    /// fields are left empty and reported when signing.
    pub fn from_config(config: Config) -> Result<Self> {
        let private_key = match (&config.private_key, &config.pass_phrase) {
            (Some(pem), Some(pass_phrase)) => {
                Some(PrivateKey::from_encrypted_pem(pem, pass_phrase)?)
            }
            (Some(pem), None) => Some(PrivateKey::from_pem(pem)?),
            (None, _) => None,
        };

        Ok(Self {
            tenancy: config.tenancy.unwrap_or_default(),
            user: config.user.unwrap_or_default(),
            fingerprint: config.fingerprint.unwrap_or_default(),
            private_key,
            signature_version: SignatureVersion::V1,
        })
    }

    /// KeyId tells the server which public key verifies the signature:
    /// `<tenancy>/<user>/<fingerprint>`.
    pub fn key_id(&self) -> String {
        format!("{}/{}/{}", self.tenancy, self.user, self.fingerprint)
    }

    /// Names of the fields required for signing that are not set.
    pub(crate) fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.tenancy.is_empty() {
            missing.push("tenancy");
        }
        if self.user.is_empty() {
            missing.push("user");
        }
        if self.fingerprint.is_empty() {
            missing.push("fingerprint");
        }
        if self.private_key.is_none() {
            missing.push("private_key");
        }
        missing
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

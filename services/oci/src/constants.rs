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

use percent_encoding::AsciiSet;
use percent_encoding::CONTROLS;

// Headers used in signing.
pub const DATE: &str = "date";
pub const X_DATE: &str = "x-date";
pub const HOST: &str = "host";
pub const REQUEST_TARGET: &str = "(request-target)";
pub const CONTENT_LENGTH: &str = "content-length";
pub const CONTENT_TYPE: &str = "content-type";
pub const X_CONTENT_SHA256: &str = "x-content-sha256";

/// Content type filled in for body-bearing requests that don't set one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Signing algorithm announced in the `Authorization` header.
pub const ALGORITHM: &str = "rsa-sha256";

// Env values used in oracle cloud infrastructure services.
pub const OCI_TENANCY: &str = "OCI_TENANCY";
pub const OCI_USER: &str = "OCI_USER";
pub const OCI_FINGERPRINT: &str = "OCI_FINGERPRINT";
pub const OCI_PRIVATE_KEY: &str = "OCI_PRIVATE_KEY";
pub const OCI_PASS_PHRASE: &str = "OCI_PASS_PHRASE";

/// Characters that can't appear in a URI as-is.
///
/// `%` is not included so that already encoded endpoints stay untouched.
pub static OCI_ENDPOINT_ENCODE_SET: AsciiSet = CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

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

//! String to sign and signing key derivation.
//!
//! - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)

use s3sign_core::hash::hex_hmac_sha256;
use s3sign_core::hash::hex_sha256;
use s3sign_core::hash::hmac_sha256;

use crate::constants::AWS4_HMAC_SHA256;
use crate::constants::AWS4_REQUEST;
use crate::dates::SigningDates;

/// Scope: "20220313/<region>/<service>/aws4_request"
pub fn credential_scope(short_date: &str, region: &str, service: &str) -> String {
    format!("{short_date}/{region}/{service}/{AWS4_REQUEST}")
}

/// StringToSign:
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20220313T072004Z
/// 20220313/<region>/<service>/aws4_request
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(
    canonical_request: &str,
    dates: &SigningDates,
    region: &str,
    service: &str,
) -> String {
    format!(
        "{AWS4_HMAC_SHA256}\n{}\n{}\n{}",
        dates.long,
        credential_scope(&dates.short, region, service),
        hex_sha256(canonical_request.as_bytes())
    )
}

/// Derive the signing key.
///
/// Every step keys the next HMAC with the raw digest of the previous one,
/// never its hex form.
pub fn signing_key(secret: &str, short_date: &str, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), short_date.as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), AWS4_REQUEST.as_bytes())
}

/// Lowercase hex signature of `string_to_sign`.
pub fn signature(
    string_to_sign: &str,
    secret: &str,
    short_date: &str,
    region: &str,
    service: &str,
) -> String {
    let key = signing_key(secret, short_date, region, service);
    hex_hmac_sha256(&key, string_to_sign.as_bytes())
}

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

use http::header;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;
use http::Uri;
use log::debug;
use s3sign_core::Result;

use crate::canonical::canonical_request;
use crate::canonical::signed_headers;
use crate::constants::AWS4_HMAC_SHA256;
use crate::constants::CONTENT_MD5;
use crate::constants::UNSIGNED_PAYLOAD;
use crate::constants::X_AMZ_CONTENT_SHA_256;
use crate::constants::X_AMZ_DATE;
use crate::constants::X_AMZ_SECURITY_TOKEN;
use crate::dates::SigningDates;
use crate::sign::credential_scope;
use crate::sign::signature;
use crate::sign::string_to_sign;
use crate::Credential;
use crate::Payload;
use crate::Region;

/// Sign a request with the `Authorization` header.
///
/// `headers` is extended with `x-amz-date`, `host`, `x-amz-content-sha256`
/// and `x-amz-security-token` before signing, every one of them ends up in
/// `SignedHeaders`. `authorization`, plus `content-length`, `content-type`
/// and `content-md5` for `PUT`, are added after signing and are not signed.
#[allow(clippy::too_many_arguments)]
pub fn authorization_headers(
    method: &Method,
    uri: &Uri,
    mut headers: HeaderMap,
    payload: &Payload,
    credential: &Credential,
    region: &Region,
    service: &str,
    dates: &SigningDates,
) -> Result<HeaderMap> {
    let digest = payload.resolve();

    headers.insert(X_AMZ_DATE, HeaderValue::from_str(&dates.long)?);
    ensure_host(&mut headers, uri, region)?;
    if let Some(token) = &credential.session_token {
        let mut value = HeaderValue::from_str(token)?;
        // Set token value sensitive to avoid leaking.
        value.set_sensitive(true);
        headers.insert(X_AMZ_SECURITY_TOKEN, value);
    }
    if !payload.is_unsigned() {
        headers.insert(X_AMZ_CONTENT_SHA_256, HeaderValue::from_str(&digest.hash)?);
    }

    let content_md5 = if method == Method::PUT {
        payload.content_md5()
    } else {
        None
    };

    let creq = canonical_request(method, uri, &headers, &digest.hash)?;
    debug!("calculated canonical request: {creq}");

    let scope = credential_scope(&dates.short, region.code(), service);
    debug!("calculated scope: {scope}");

    let sts = string_to_sign(&creq, dates, region.code(), service);
    debug!("calculated string to sign: {sts}");

    let signature = signature(
        &sts,
        &credential.secret_access_key,
        &dates.short,
        region.code(),
        service,
    );

    let mut authorization = HeaderValue::from_str(&format!(
        "{AWS4_HMAC_SHA256} Credential={}/{}, SignedHeaders={}, Signature={}",
        credential.access_key_id,
        scope,
        signed_headers(&headers),
        signature
    ))?;
    authorization.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, authorization);

    if method == Method::PUT {
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from_str(&digest.size)?);
        if let Some(ext) = path_extension(uri.path()) {
            if !headers.contains_key(header::CONTENT_TYPE) {
                headers.insert(header::CONTENT_TYPE, HeaderValue::from_str(ext)?);
            }
        }
        if let Some(md5) = content_md5 {
            if !headers.contains_key(CONTENT_MD5) {
                headers.insert(CONTENT_MD5, HeaderValue::from_str(&md5)?);
            }
        }
    }

    if payload.is_unsigned() {
        headers.insert(
            X_AMZ_CONTENT_SHA_256,
            HeaderValue::from_static(UNSIGNED_PAYLOAD),
        );
    }

    Ok(headers)
}

/// Set `host` from the url's authority. For a path-only url a caller supplied
/// `host` is kept, falling back to the region's default host.
pub(crate) fn ensure_host(headers: &mut HeaderMap, uri: &Uri, region: &Region) -> Result<()> {
    if uri.authority().is_some() || !headers.contains_key(header::HOST) {
        headers.insert(header::HOST, HeaderValue::from_str(&host(uri, region))?);
    }

    Ok(())
}

/// Host of the url with its port if it carries one, otherwise the region's
/// default host.
pub(crate) fn host(uri: &Uri, region: &Region) -> String {
    match uri.authority() {
        Some(authority) => match authority.port() {
            Some(port) => format!("{}:{}", authority.host(), port.as_str()),
            None => authority.host().to_string(),
        },
        None => region.host(),
    }
}

/// Extension of the last path segment, e.g. `text` for `/test$file.text`.
fn path_extension(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next()?;
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }

    Some(ext)
}

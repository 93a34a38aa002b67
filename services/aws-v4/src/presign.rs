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

use std::str::FromStr;
use std::time::Duration;

use http::uri::PathAndQuery;
use http::HeaderMap;
use http::Method;
use http::Uri;
use log::debug;
use log::warn;
use s3sign_core::Result;

use crate::auth::ensure_host;
use crate::canonical::canonical_request;
use crate::canonical::signed_headers;
use crate::constants::*;
use crate::dates::SigningDates;
use crate::encode::percent_decode;
use crate::encode::percent_encode;
use crate::encode::AWS_QUERY_COMPONENT_ENCODE_SET;
use crate::sign::credential_scope;
use crate::sign::signature;
use crate::sign::string_to_sign;
use crate::Credential;
use crate::Region;

/// Build a presigned url valid for `expires_in`.
///
/// The body is never part of a presigned signature, so the canonical request
/// always ends with `UNSIGNED-PAYLOAD`. The session token, if any, travels in
/// the query so the url works without extra headers.
///
/// `expires_in` is not capped here. AWS rejects anything above 604800
/// seconds.
#[allow(clippy::too_many_arguments)]
pub fn presigned_url(
    method: &Method,
    uri: &Uri,
    expires_in: Duration,
    mut headers: HeaderMap,
    credential: &Credential,
    region: &Region,
    service: &str,
    dates: &SigningDates,
) -> Result<String> {
    ensure_host(&mut headers, uri, region)?;

    let expires = expires_in.as_secs();
    if expires > MAX_PRESIGN_EXPIRES_SECS {
        warn!("presigned url expires in {expires}s, more than the {MAX_PRESIGN_EXPIRES_SECS}s AWS accepts");
    }

    let scope = credential_scope(&dates.short, region.code(), service);
    debug!("calculated scope: {scope}");

    let mut query: Vec<(Vec<u8>, Vec<u8>)> = uri
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|s| !s.is_empty())
        .map(|s| {
            let (k, v) = s.split_once('=').unwrap_or((s, ""));
            (percent_decode(k), percent_decode(v))
        })
        .collect();

    let mut push = |k: &str, v: String| query.push((k.as_bytes().to_vec(), v.into_bytes()));
    push(X_AMZ_ALGORITHM_QUERY, AWS4_HMAC_SHA256.to_string());
    push(
        X_AMZ_CREDENTIAL_QUERY,
        format!("{}/{}", credential.access_key_id, scope),
    );
    push(X_AMZ_DATE_QUERY, dates.long.clone());
    push(X_AMZ_EXPIRES_QUERY, expires.to_string());
    push(X_AMZ_SIGNED_HEADERS_QUERY, signed_headers(&headers));
    if let Some(token) = &credential.session_token {
        push(X_AMZ_SECURITY_TOKEN_QUERY, token.clone());
    }

    // Sort by raw param name, this is also the order on the wire.
    query.sort_by(|(a, _), (b, _)| a.cmp(b));

    let encoded = query
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                percent_encode(k, &AWS_QUERY_COMPONENT_ENCODE_SET),
                percent_encode(v, &AWS_QUERY_COMPONENT_ENCODE_SET)
            )
        })
        .collect::<Vec<_>>()
        .join("&");

    let signed_uri = {
        let mut parts = uri.clone().into_parts();
        parts.path_and_query = Some(PathAndQuery::from_str(&format!(
            "{}?{encoded}",
            uri.path()
        ))?);
        Uri::from_parts(parts)?
    };

    let creq = canonical_request(method, &signed_uri, &headers, UNSIGNED_PAYLOAD)?;
    debug!("calculated canonical request: {creq}");

    let sts = string_to_sign(&creq, dates, region.code(), service);
    debug!("calculated string to sign: {sts}");

    let signature = signature(
        &sts,
        &credential.secret_access_key,
        &dates.short,
        region.code(),
        service,
    );

    Ok(format!("{signed_uri}&{X_AMZ_SIGNATURE_QUERY}={signature}"))
}

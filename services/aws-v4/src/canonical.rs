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

//! Canonical request construction.
//!
//! - [Create a canonical request](https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html#create-canonical-request)

use std::fmt::Write;

use http::header;
use http::HeaderMap;
use http::HeaderName;
use http::Method;
use http::Uri;
use s3sign_core::Result;

use crate::encode::percent_decode;
use crate::encode::percent_encode;
use crate::encode::AWS_QUERY_ENCODE_SET;
use crate::encode::AWS_URI_ENCODE_SET;

/// Build the canonical request string:
///
/// ```text
/// <HTTPMethod>\n
/// <CanonicalURI>\n
/// <CanonicalQueryString>\n
/// <CanonicalHeaders>\n
/// <SignedHeaders>\n
/// <HashedPayload>
/// ```
///
/// `<CanonicalHeaders>` carries its own trailing newline, so an empty line
/// separates it from `<SignedHeaders>`.
pub fn canonical_request(
    method: &Method,
    uri: &Uri,
    headers: &HeaderMap,
    body_hash: &str,
) -> Result<String> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    writeln!(f, "{}", method.as_str())?;
    writeln!(f, "{}", canonical_uri(uri))?;
    writeln!(f, "{}", canonical_query(uri.query()))?;

    let names = signed_header_names(headers);
    for name in names.iter() {
        writeln!(f, "{}:{}", name.as_str(), header_value(headers, name)?)?;
    }
    writeln!(f)?;
    writeln!(
        f,
        "{}",
        names.iter().map(|n| n.as_str()).collect::<Vec<_>>().join(";")
    )?;
    write!(f, "{body_hash}")?;

    Ok(f)
}

/// The URL path, decoded to raw bytes and encoded again with the path set.
///
/// Decoding first keeps an already escaped path such as `/test%24file.text`
/// from being escaped twice.
pub fn canonical_uri(uri: &Uri) -> String {
    let path = uri.path();
    if path.is_empty() {
        return "/".to_string();
    }

    percent_encode(&percent_decode(path), &AWS_URI_ENCODE_SET)
}

/// Canonical query string.
///
/// Every name and value is encoded on its own, joined as `name=value` and the
/// encoded pairs are sorted byte-wise. Sorting happens after encoding.
pub fn canonical_query(query: Option<&str>) -> String {
    let Some(query) = query else {
        return String::new();
    };

    let mut pairs = query
        .split('&')
        .filter(|s| !s.is_empty())
        .map(|s| {
            let (k, v) = s.split_once('=').unwrap_or((s, ""));
            format!(
                "{}={}",
                percent_encode(&percent_decode(k), &AWS_QUERY_ENCODE_SET),
                percent_encode(&percent_decode(v), &AWS_QUERY_ENCODE_SET)
            )
        })
        .collect::<Vec<_>>();
    pairs.sort_unstable();

    pairs.join("&")
}

/// Signed header list: lowercase names without `authorization`, sorted and
/// joined with `;`.
pub fn signed_headers(headers: &HeaderMap) -> String {
    signed_header_names(headers)
        .iter()
        .map(|n| n.as_str())
        .collect::<Vec<_>>()
        .join(";")
}

/// Header names taking part in the signature.
///
/// `HeaderName` is always lowercase, so ordinal order of `as_str` is the
/// order of the lowercased names.
fn signed_header_names(headers: &HeaderMap) -> Vec<&HeaderName> {
    let mut names = headers
        .keys()
        .filter(|k| **k != header::AUTHORIZATION)
        .collect::<Vec<_>>();
    names.sort_unstable_by(|a, b| a.as_str().cmp(b.as_str()));

    names
}

/// Header value exactly as given. Repeated headers are joined with `,` in
/// insertion order.
fn header_value(headers: &HeaderMap, name: &HeaderName) -> Result<String> {
    let mut value = String::new();
    for (idx, v) in headers.get_all(name).iter().enumerate() {
        if idx > 0 {
            value.push(',');
        }
        value.push_str(std::str::from_utf8(v.as_bytes())?);
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EMPTY_STRING_SHA256;
    use http::HeaderValue;
    use pretty_assertions::assert_eq;
    use s3sign_core::ErrorKind;

    fn uri(s: &str) -> Uri {
        s.parse().expect("uri must be valid")
    }

    #[test]
    fn test_canonical_uri() {
        assert_eq!(canonical_uri(&uri("https://example.com")), "/");
        assert_eq!(canonical_uri(&uri("https://example.com?lifecycle")), "/");
        assert_eq!(canonical_uri(&uri("https://example.com/a/b.txt")), "/a/b.txt");
        assert_eq!(
            canonical_uri(&uri("https://example.com/test%24file.text")),
            "/test%24file.text"
        );
        assert_eq!(
            canonical_uri(&uri("https://example.com/hello%20world")),
            "/hello%20world"
        );
        assert_eq!(
            canonical_uri(&uri("https://example.com/a%2Fb")),
            "/a/b",
            "an escaped slash is decoded and then kept as a path separator"
        );
    }

    #[test]
    fn test_canonical_query() {
        assert_eq!(canonical_query(None), "");
        assert_eq!(canonical_query(Some("")), "");
        assert_eq!(canonical_query(Some("lifecycle")), "lifecycle=");
        assert_eq!(
            canonical_query(Some("prefix=J&max-keys=2")),
            "max-keys=2&prefix=J"
        );
        assert_eq!(
            canonical_query(Some(
                "list-type=2&max-keys=3&prefix=CI/&start-after=ExampleGuide.pdf"
            )),
            "list-type=2&max-keys=3&prefix=CI%2F&start-after=ExampleGuide.pdf"
        );
        assert_eq!(canonical_query(Some("a=1&&b")), "a=1&b=");
    }

    #[test]
    fn test_canonical_query_sorts_encoded_pairs() {
        // Raw `xa` sorts before `x{`, but `{` encodes to `%7B` which sorts first.
        assert_eq!(canonical_query(Some("xa=2&x{=1")), "x%7B=1&xa=2");
        // Pairs are compared as whole strings, `=` (0x3D) before letters.
        assert_eq!(canonical_query(Some("ab=1&a=2")), "a=2&ab=1");
    }

    #[test]
    fn test_signed_headers_ignore_authorization() {
        let mut headers = HeaderMap::new();
        for (k, v) in [
            ("X-Amz-Date", "20130524T000000Z"),
            ("Host", "example.com"),
            ("AUTHORIZATION", "stale"),
        ] {
            headers.insert(
                HeaderName::from_bytes(k.as_bytes()).unwrap(),
                HeaderValue::from_static(v),
            );
        }

        assert_eq!(signed_headers(&headers), "host;x-amz-date");
    }

    #[test]
    fn test_canonical_request_header_order_independent() {
        let mut a = HeaderMap::new();
        a.insert("range", HeaderValue::from_static("bytes=0-9"));
        a.insert("host", HeaderValue::from_static("example.com"));
        a.insert("x-amz-date", HeaderValue::from_static("20130524T000000Z"));

        let mut b = HeaderMap::new();
        b.insert("x-amz-date", HeaderValue::from_static("20130524T000000Z"));
        b.insert("host", HeaderValue::from_static("example.com"));
        b.insert("range", HeaderValue::from_static("bytes=0-9"));

        let u = uri("https://example.com/test.txt");
        let l = canonical_request(&Method::GET, &u, &a, EMPTY_STRING_SHA256).unwrap();
        let r = canonical_request(&Method::GET, &u, &b, EMPTY_STRING_SHA256).unwrap();
        assert_eq!(l, r);
    }

    #[test]
    fn test_canonical_request_layout() {
        let mut headers = HeaderMap::new();
        headers.insert("host", HeaderValue::from_static("examplebucket.s3.amazonaws.com"));
        headers.insert("x-amz-meta-note", HeaderValue::from_static("  padded  "));
        headers.append("x-amz-meta-list", HeaderValue::from_static("a"));
        headers.append("x-amz-meta-list", HeaderValue::from_static("b"));

        let creq = canonical_request(
            &Method::PUT,
            &uri("https://examplebucket.s3.amazonaws.com/photos/a%20b.jpg?uploads"),
            &headers,
            "UNSIGNED-PAYLOAD",
        )
        .unwrap();

        assert_eq!(
            creq,
            "PUT\n\
             /photos/a%20b.jpg\n\
             uploads=\n\
             host:examplebucket.s3.amazonaws.com\n\
             x-amz-meta-list:a,b\n\
             x-amz-meta-note:  padded  \n\
             \n\
             host;x-amz-meta-list;x-amz-meta-note\n\
             UNSIGNED-PAYLOAD"
        );
    }

    #[test]
    fn test_canonical_request_rejects_non_utf8_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-amz-meta-raw",
            HeaderValue::from_bytes(&[0xff, 0xfe]).expect("opaque bytes are valid"),
        );

        let err = canonical_request(
            &Method::GET,
            &uri("https://example.com/"),
            &headers,
            EMPTY_STRING_SHA256,
        )
        .expect_err("non utf-8 header must fail");
        assert_eq!(err.kind(), ErrorKind::EncodingFailure);
    }
}

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

//! Percent encoding used by canonical requests.

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
/// of the request path.
///
/// - Encode every byte except 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', '~' and '/'.
pub static AWS_URI_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
/// of query names and values.
///
/// `=` and `&` are left alone so a pair that was already joined is not
/// escaped twice. Names and values must still be encoded one by one.
pub static AWS_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'=')
    .remove(b'&');

/// AsciiSet for query names and values written back into a url.
///
/// Unlike [`AWS_QUERY_ENCODE_SET`], `=` and `&` are escaped so every name and
/// value stays a single component on the wire.
pub static AWS_QUERY_COMPONENT_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent encode raw bytes, emitting `%XX` with uppercase hex for every byte
/// outside `set`.
///
/// Non-ASCII bytes are always encoded, so a multi-byte UTF-8 character
/// produces one `%XX` group per byte.
pub fn percent_encode(input: &[u8], set: &'static AsciiSet) -> String {
    percent_encoding::percent_encode(input, set).to_string()
}

/// Percent decode into raw bytes. Invalid escapes are kept verbatim.
pub(crate) fn percent_decode(input: &str) -> Vec<u8> {
    percent_encoding::percent_decode_str(input).collect()
}

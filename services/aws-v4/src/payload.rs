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

use bytes::Bytes;
use s3sign_core::hash::base64_md5;
use s3sign_core::hash::hex_sha256;

use crate::constants::UNSIGNED_PAYLOAD;

/// Request body as seen by the signer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Payload {
    /// Known body content, hashed into the signature.
    Bytes(Bytes),
    /// No body at all, e.g. a `GET` request.
    #[default]
    Empty,
    /// Body deliberately left out of the signature.
    Unsigned,
}

/// Body hash and size resolved from a [`Payload`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadDigest {
    /// Lowercase hex SHA-256 of the body, or `UNSIGNED-PAYLOAD`.
    pub hash: String,
    /// Decimal byte length of the body, or `UNSIGNED-PAYLOAD`.
    pub size: String,
    /// Whether `size` is an actual byte count.
    pub is_known_size: bool,
}

impl Payload {
    /// Resolve the hash and size used while signing.
    pub fn resolve(&self) -> PayloadDigest {
        match self {
            Payload::Bytes(bs) => PayloadDigest {
                hash: hex_sha256(bs),
                size: bs.len().to_string(),
                is_known_size: true,
            },
            Payload::Empty => PayloadDigest {
                hash: hex_sha256(&[]),
                size: "0".to_string(),
                is_known_size: true,
            },
            Payload::Unsigned => PayloadDigest {
                hash: UNSIGNED_PAYLOAD.to_string(),
                size: UNSIGNED_PAYLOAD.to_string(),
                is_known_size: false,
            },
        }
    }

    /// Whether the payload is excluded from the signature.
    pub fn is_unsigned(&self) -> bool {
        matches!(self, Payload::Unsigned)
    }

    /// Base64 encoded MD5 of the body, only available for known bytes.
    pub fn content_md5(&self) -> Option<String> {
        match self {
            Payload::Bytes(bs) => Some(base64_md5(bs)),
            Payload::Empty | Payload::Unsigned => None,
        }
    }
}

impl From<Bytes> for Payload {
    fn from(value: Bytes) -> Self {
        Payload::Bytes(value)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(value: Vec<u8>) -> Self {
        Payload::Bytes(value.into())
    }
}

impl From<&'static str> for Payload {
    fn from(value: &'static str) -> Self {
        Payload::Bytes(Bytes::from_static(value.as_bytes()))
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Payload::Bytes(value.into())
    }
}

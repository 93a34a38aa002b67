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

//! AWS SigV4 signing for S3.
//!
//! [`Signer`] produces either the `Authorization` header set for a request
//! or a presigned url. The building blocks are public too:
//! [`encode`], [`canonical`] and [`sign`] for the canonical request, the
//! string to sign and the signing key, [`authorization_headers`] and
//! [`presigned_url`] for callers that manage the clock themselves.

mod constants;
pub use constants::EMPTY_STRING_SHA256;
pub use constants::UNSIGNED_PAYLOAD;

pub mod canonical;
pub mod encode;
pub mod sign;

mod auth;
pub use auth::authorization_headers;
mod config;
pub use config::Config;
mod credential;
pub use credential::Credential;
mod dates;
pub use dates::SigningDates;
mod payload;
pub use payload::Payload;
pub use payload::PayloadDigest;
mod presign;
pub use presign::presigned_url;
mod region;
pub use region::Region;
mod signer;
pub use signer::Signer;

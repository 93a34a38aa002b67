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

//! Core building blocks shared by s3sign signers.
//!
//! This crate holds the pieces that do not depend on a particular signing
//! scheme:
//!
//! - [`Error`] and [`ErrorKind`]: the error type returned by every signer.
//! - [`hash`]: SHA-256, HMAC-SHA256 and MD5 helpers.
//! - [`time`]: UTC timestamps and the fixed-width formats used on the wire.
//! - [`utils`]: helpers such as [`utils::Redact`] to keep secrets out of logs.
//! - [`Env`]: environment access, with [`OsEnv`] for the real process and
//!   [`StaticEnv`] for tests.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod env;
pub use env::Env;
pub use env::OsEnv;
pub use env::StaticEnv;

mod error;
pub use error::Error;
pub use error::ErrorKind;
pub use error::Result;

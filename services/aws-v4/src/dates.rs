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

use s3sign_core::time::format_date;
use s3sign_core::time::format_iso8601;
use s3sign_core::time::DateTime;

/// Long and short timestamps taken from one instant.
///
/// Both strings must come from the same clock read, otherwise a date
/// rollover between two reads makes the `x-amz-date` header and the
/// credential scope disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningDates {
    /// `YYYYMMDD'T'HHMMSS'Z'`
    pub long: String,
    /// `YYYYMMDD`
    pub short: String,
}

impl From<DateTime> for SigningDates {
    fn from(t: DateTime) -> Self {
        Self {
            long: format_iso8601(t),
            short: format_date(t),
        }
    }
}

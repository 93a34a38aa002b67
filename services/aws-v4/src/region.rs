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

use std::fmt;
use std::str::FromStr;

use s3sign_core::Error;

macro_rules! regions {
    ($($(#[$meta:meta])* $variant:ident => $code:literal,)+) => {
        /// Region a request is signed for.
        ///
        /// A standard region yields both its code and its default S3 host, so
        /// the two can never disagree. [`Region::Custom`] covers S3 compatible
        /// services reachable at an explicit host.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum Region {
            $(
                $(#[$meta])*
                #[doc = concat!("`", $code, "`")]
                $variant,
            )+
            /// An S3 compatible endpoint outside the standard table.
            Custom {
                /// Region code used in the credential scope.
                code: String,
                /// Host used when the request url carries none.
                host: String,
            },
        }

        impl Region {
            /// Every standard region, in table order.
            pub const STANDARD: &'static [Region] = &[$(Region::$variant,)+];

            /// Region code used in the credential scope, e.g. `us-east-1`.
            pub fn code(&self) -> &str {
                match self {
                    $(Region::$variant => $code,)+
                    Region::Custom { code, .. } => code,
                }
            }
        }

        impl FromStr for Region {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok(Region::$variant),)+
                    _ => Err(Error::config_invalid(format!("unknown region: {s}"))),
                }
            }
        }
    };
}

regions! {
    UsEast1 => "us-east-1",
    UsEast2 => "us-east-2",
    UsWest1 => "us-west-1",
    UsWest2 => "us-west-2",
    AfSouth1 => "af-south-1",
    ApEast1 => "ap-east-1",
    ApEast2 => "ap-east-2",
    ApSouth1 => "ap-south-1",
    ApSouth2 => "ap-south-2",
    ApNortheast1 => "ap-northeast-1",
    ApNortheast2 => "ap-northeast-2",
    ApNortheast3 => "ap-northeast-3",
    ApSoutheast1 => "ap-southeast-1",
    ApSoutheast2 => "ap-southeast-2",
    ApSoutheast3 => "ap-southeast-3",
    ApSoutheast4 => "ap-southeast-4",
    ApSoutheast5 => "ap-southeast-5",
    ApSoutheast6 => "ap-southeast-6",
    ApSoutheast7 => "ap-southeast-7",
    CaCentral1 => "ca-central-1",
    CaWest1 => "ca-west-1",
    EuCentral1 => "eu-central-1",
    EuCentral2 => "eu-central-2",
    EuWest1 => "eu-west-1",
    EuWest2 => "eu-west-2",
    EuWest3 => "eu-west-3",
    EuSouth1 => "eu-south-1",
    EuSouth2 => "eu-south-2",
    EuNorth1 => "eu-north-1",
    IlCentral1 => "il-central-1",
    MeSouth1 => "me-south-1",
    MeCentral1 => "me-central-1",
    MxCentral1 => "mx-central-1",
    SaEast1 => "sa-east-1",
    UsGovEast1 => "us-gov-east-1",
    UsGovWest1 => "us-gov-west-1",
    CnNorth1 => "cn-north-1",
    CnNorthwest1 => "cn-northwest-1",
}

impl Region {
    /// Build a region for an S3 compatible endpoint.
    pub fn custom(code: impl Into<String>, host: impl Into<String>) -> Self {
        Region::Custom {
            code: code.into(),
            host: host.into(),
        }
    }

    /// Default S3 host of this region.
    pub fn host(&self) -> String {
        match self {
            Region::UsEast1 => "s3.amazonaws.com".to_string(),
            Region::CnNorth1 | Region::CnNorthwest1 => {
                format!("s3.{}.amazonaws.com.cn", self.code())
            }
            Region::Custom { host, .. } => host.clone(),
            _ => format!("s3.{}.amazonaws.com", self.code()),
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Region::UsEast1
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

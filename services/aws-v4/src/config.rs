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

use std::fmt::{Debug, Formatter};

use http::Uri;
use log::debug;
use s3sign_core::utils::Redact;
use s3sign_core::Env;
use s3sign_core::Error;
use s3sign_core::Result;

use crate::constants::*;
use crate::Credential;
use crate::Region;
use crate::Signer;

/// Config for the S3 signer.
///
/// Fields left as `None` can be filled from the environment with
/// [`Config::from_env`].
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AWS_ACCESS_KEY_ID`
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AWS_SECRET_ACCESS_KEY`
    pub secret_access_key: Option<String>,
    /// `session_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AWS_SESSION_TOKEN`
    pub session_token: Option<String>,
    /// `region` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AWS_REGION`, then `AWS_DEFAULT_REGION`
    ///
    /// Falls back to `us-east-1`.
    pub region: Option<String>,
    /// `endpoint` of an S3 compatible service, will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AWS_ENDPOINT_URL_S3`, then `AWS_ENDPOINT_URL`
    ///
    /// When set, the signer uses [`Region::Custom`] with the endpoint's host.
    pub endpoint: Option<String>,
    /// Service to sign for, `s3` by default.
    pub service: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("session_token", &Redact::from(&self.session_token))
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("service", &self.service)
            .finish()
    }
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, env: &impl Env) -> Self {
        if self.access_key_id.is_none() {
            self.access_key_id = env.var(AWS_ACCESS_KEY_ID);
        }
        if self.secret_access_key.is_none() {
            self.secret_access_key = env.var(AWS_SECRET_ACCESS_KEY);
        }
        if self.session_token.is_none() {
            self.session_token = env.var(AWS_SESSION_TOKEN);
        }
        if self.region.is_none() {
            self.region = env
                .var(AWS_REGION)
                .or_else(|| env.var(AWS_DEFAULT_REGION));
        }
        if self.endpoint.is_none() {
            self.endpoint = env
                .var(AWS_ENDPOINT_URL_S3)
                .or_else(|| env.var(AWS_ENDPOINT_URL));
        }

        self
    }
}

impl TryFrom<Config> for Signer {
    type Error = Error;

    fn try_from(cfg: Config) -> Result<Self> {
        let (Some(ak), Some(sk)) = (cfg.access_key_id, cfg.secret_access_key) else {
            return Err(Error::config_invalid(
                "access_key_id and secret_access_key must be set",
            ));
        };

        let mut credential = Credential::new(ak, sk);
        credential.session_token = cfg.session_token;
        if !credential.is_valid() {
            return Err(Error::config_invalid(
                "access_key_id and secret_access_key must not be empty",
            ));
        }

        let code = cfg.region.as_deref().unwrap_or("us-east-1");
        let region = match cfg.endpoint.as_deref() {
            Some(endpoint) => Region::custom(code, endpoint_host(endpoint)?),
            None => code.parse()?,
        };
        debug!("building signer for region {region} at host {}", region.host());

        Ok(Signer::new(credential, region)
            .with_service(cfg.service.as_deref().unwrap_or(DEFAULT_SERVICE)))
    }
}

impl Signer {
    /// Build a signer from config, see [`Config::from_env`] to load it from env.
    pub fn from_config(config: Config) -> Result<Self> {
        Self::try_from(config)
    }
}

/// Host (with port) of an endpoint url such as `http://127.0.0.1:9000`.
fn endpoint_host(endpoint: &str) -> Result<String> {
    if !endpoint.contains("://") {
        return Ok(endpoint.trim_end_matches('/').to_string());
    }

    let uri: Uri = endpoint.parse().map_err(|e| {
        Error::config_invalid(format!("invalid endpoint: {endpoint}")).with_source(e)
    })?;
    uri.authority()
        .map(|a| a.as_str().to_string())
        .ok_or_else(|| Error::config_invalid(format!("endpoint has no host: {endpoint}")))
}

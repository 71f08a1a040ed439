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

use crate::constants::*;
use cuecloud_core::query::QueryPolicy;
use cuecloud_core::utils::Redact;
use cuecloud_core::Context;
use std::fmt::{Debug, Formatter};

/// Config for the CueCloud client.
///
/// Explicit values always win. Credentials left as `None` are read from
/// `CUECLOUD_ACCESS_KEY` and `CUECLOUD_ACCESS_PASSWORD` when the client is
/// built.
#[derive(Clone, Default)]
pub struct Config {
    /// Access key sent as `Access-Key`.
    pub access_key: Option<String>,
    /// Access password, the HMAC secret. Never sent over the wire.
    pub access_password: Option<String>,
    /// Versioned api root, defaults to `https://cuecloud.com/api/v1.0/`.
    pub base_url: Option<String>,
    /// How absent filters are written into query strings.
    pub query_policy: QueryPolicy,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key", &Redact::from(&self.access_key))
            .field("access_password", &format_args!("***"))
            .field("base_url", &self.base_url)
            .field("query_policy", &self.query_policy)
            .finish()
    }
}

impl Config {
    /// Load config from environment variables.
    pub fn from_env(ctx: &Context) -> Self {
        Self {
            access_key: ctx.env_var(CUECLOUD_ACCESS_KEY),
            access_password: ctx.env_var(CUECLOUD_ACCESS_PASSWORD),
            ..Default::default()
        }
    }

    /// Set the access key.
    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    /// Set the access password.
    pub fn with_access_password(mut self, access_password: impl Into<String>) -> Self {
        self.access_password = Some(access_password.into());
        self
    }

    /// Point the client at another api root, for example a local deployment
    /// or another api version.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the policy for absent query parameters.
    pub fn with_query_policy(mut self, policy: QueryPolicy) -> Self {
        self.query_policy = policy;
        self
    }

    /// Resolve the api root, always ending with `/`.
    pub fn base_url(&self) -> String {
        match self.base_url.as_deref() {
            None | Some("") => format!("{DEFAULT_ENDPOINT}{API_VERSION}"),
            Some(v) if v.ends_with('/') => v.to_string(),
            Some(v) => format!("{v}/"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuecloud_core::StaticEnv;
    use std::collections::HashMap;
    use test_case::test_case;

    #[test_case(None, "https://cuecloud.com/api/v1.0/"; "default")]
    #[test_case(Some(""), "https://cuecloud.com/api/v1.0/"; "empty")]
    #[test_case(Some("http://localhost:8000/api/v1.0/"), "http://localhost:8000/api/v1.0/"; "custom")]
    #[test_case(Some("http://localhost:8000/api/v2.0"), "http://localhost:8000/api/v2.0/"; "custom without slash")]
    fn test_base_url(input: Option<&str>, expected: &str) {
        let mut config = Config::default();
        if let Some(v) = input {
            config = config.with_base_url(v);
        }
        assert_eq!(config.base_url(), expected);
    }

    #[test]
    fn test_from_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (CUECLOUD_ACCESS_KEY.to_string(), "env_key".to_string()),
                (CUECLOUD_ACCESS_PASSWORD.to_string(), "env_password".to_string()),
            ]),
        });

        let config = Config::from_env(&ctx);
        assert_eq!(config.access_key.as_deref(), Some("env_key"));
        assert_eq!(config.access_password.as_deref(), Some("env_password"));
        assert_eq!(config.base_url, None);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::default()
            .with_access_key("42cef2c79a984e34")
            .with_access_password("2152b0f3cc1649fb");

        let s = format!("{config:?}");
        assert!(s.contains("42c***e34"));
        assert!(s.contains("access_password: ***"));
        assert!(!s.contains("215"));
    }
}

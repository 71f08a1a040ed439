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
use crate::Config;
use cuecloud_core::utils::Redact;
use cuecloud_core::{Context, Error, Result};
use log::debug;
use std::fmt::{Debug, Formatter};

/// Credential for CueCloud.
#[derive(Default, Clone)]
pub struct Credential {
    /// Access key, sent as `Access-Key`.
    pub access_key: String,
    /// Access password, used as the HMAC secret.
    pub access_password: String,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key", &Redact::from(&self.access_key))
            .field("access_password", &format_args!("***"))
            .finish()
    }
}

impl Credential {
    /// Create a new credential.
    pub fn new(access_key: impl Into<String>, access_password: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            access_password: access_password.into(),
        }
    }

    /// Resolve the credential: explicit config values first, then the env.
    ///
    /// Empty strings count as missing. Each part is resolved on its own, so
    /// an explicit key can be paired with a password from the env.
    pub fn resolve(ctx: &Context, config: &Config) -> Result<Self> {
        let access_key = resolve_one(ctx, config.access_key.as_deref(), CUECLOUD_ACCESS_KEY)?;
        let access_password = resolve_one(
            ctx,
            config.access_password.as_deref(),
            CUECLOUD_ACCESS_PASSWORD,
        )?;

        let cred = Credential {
            access_key,
            access_password,
        };
        debug!("resolved credential: {cred:?}");
        Ok(cred)
    }
}

fn resolve_one(ctx: &Context, explicit: Option<&str>, env: &str) -> Result<String> {
    if let Some(v) = explicit.filter(|v| !v.is_empty()) {
        return Ok(v.to_string());
    }

    ctx.env_var(env)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::config_invalid(format!("{env} not set.")))
}

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

//! CueCloud api client.
//!
//! Requests are signed with HMAC-SHA256 over `nonce + url + body` using the
//! access password, and carry `Access-Key`, `Access-Signature` and
//! `Access-Nonce` headers. Every operation returns the raw JSON text of the
//! response.
//!
//! ```no_run
//! use cuecloud::{Client, Config, CuesFilter, CueStatus};
//! use cuecloud_core::{Context, OsEnv};
//! use cuecloud_http_send_reqwest::ReqwestHttpSend;
//!
//! # async fn example() -> cuecloud_core::Result<()> {
//! let ctx = Context::new()
//!     .with_http_send(ReqwestHttpSend::default())
//!     .with_env(OsEnv);
//! let client = Client::new(ctx, Config::default())?;
//!
//! let active = client
//!     .get_cues(CuesFilter {
//!         status: Some(CueStatus::Active),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{active}");
//! # Ok(())
//! # }
//! ```

mod api;
mod constants;

mod client;
pub use client::Client;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::RequestSigner;

mod types;
pub use types::*;

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

//! Core components for signing CueCloud API requests.
//!
//! This crate provides the pieces every CueCloud request goes through:
//!
//! - [`hash`]: the HMAC-SHA256 signer producing the `Access-Signature` value
//! - [`time`]: the microsecond nonce sent as `Access-Nonce`
//! - [`query`]: query string encoding for read endpoints
//! - [`SigningRequest`] and [`Payload`]: the canonical message and the body it covers
//! - [`Context`]: pluggable http transport ([`HttpSend`]) and environment ([`Env`])
//!
//! ## Example
//!
//! ```
//! use cuecloud_core::hash::hex_hmac_sha256;
//! use cuecloud_core::SigningRequest;
//!
//! # fn main() -> cuecloud_core::Result<()> {
//! let req = SigningRequest::new("1000000", "https://example.com/x", "");
//! let signature = hex_hmac_sha256(b"secret", req.string_to_sign().as_bytes())?;
//! assert_eq!(signature.len(), 64);
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod query;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};
mod error;
pub use error::{Error, ErrorKind, Result};
mod request;
pub use request::{Payload, SigningRequest};

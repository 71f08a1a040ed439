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

use crate::{Config, Credential, RequestSigner};
use bytes::Bytes;
use cuecloud_core::query::{QueryParams, QueryPolicy};
use cuecloud_core::{Context, Error, Payload, Result};
use http::{Method, Request};
use log::debug;

/// Client for the CueCloud api.
///
/// Every operation signs one request, sends it and returns the raw response
/// text. The client never parses responses: callers read the embedded
/// `StatusCode` and `Data` fields themselves.
///
/// `Client` holds no mutable state and is cheap to clone, share it freely
/// between tasks.
///
/// ## Example
///
/// ```no_run
/// use cuecloud::{Client, Config};
/// use cuecloud_core::{Context, OsEnv};
///
/// # async fn example() -> cuecloud_core::Result<()> {
/// let ctx = Context::new().with_env(OsEnv);
/// let client = Client::new(ctx.clone(), Config::from_env(&ctx))?;
/// println!("{}", client.get_balance().await?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    credential: Credential,
    base_url: String,
    query_policy: QueryPolicy,
    signer: RequestSigner,
}

impl Client {
    /// Create a new client.
    ///
    /// Fails with [`cuecloud_core::ErrorKind::ConfigInvalid`] if the access
    /// key or password is found neither in `config` nor in the env.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        let credential = Credential::resolve(&ctx, &config)?;

        Ok(Self {
            base_url: config.base_url(),
            query_policy: config.query_policy,
            credential,
            ctx,
            signer: RequestSigner::new(),
        })
    }

    /// The api root every endpoint path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The credential used to sign requests.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Build the url of an endpoint.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build the url of an endpoint with `params` as query string.
    pub(crate) fn endpoint_with_query(&self, path: &str, params: &QueryParams) -> String {
        let mut url = self.endpoint(path);
        url.push_str(&params.to_query_string(&self.query_policy));
        url
    }

    /// Sign and send a request, returning the response text.
    ///
    /// - `url` is the full target url; an empty url fails with
    ///   [`cuecloud_core::ErrorKind::UrlMissing`] before anything is sent.
    /// - `payload` is sent as body; strings go out verbatim, see [`Payload`].
    ///
    /// The body is returned whatever the http status is: the service reports
    /// failures through the `StatusCode` field of its JSON. Nothing is
    /// retried, calling again signs with a fresh nonce and may repeat the
    /// remote side effect.
    pub async fn execute(
        &self,
        url: &str,
        method: Method,
        payload: impl Into<Payload>,
    ) -> Result<String> {
        if url.is_empty() {
            return Err(Error::url_missing(
                "url must be provided to this method call",
            ));
        }

        let body = payload.into().into_body();

        let (mut parts, ()) = Request::builder()
            .method(method)
            .uri(url)
            .body(())?
            .into_parts();
        self.signer.sign(&mut parts, url, &body, &self.credential)?;

        debug!("cuecloud request: {} {url}", parts.method);
        let req = Request::from_parts(parts, Bytes::from(body));
        let resp = self.ctx.http_send_as_string(req).await?;

        let status = resp.status();
        if status.is_success() {
            debug!("cuecloud response: {status}");
        } else {
            debug!("cuecloud response: {status}, returning body as is");
        }

        Ok(resp.into_body())
    }
}

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
use crate::Credential;
use cuecloud_core::hash::hex_hmac_sha256;
use cuecloud_core::time::{format_nonce, now};
use cuecloud_core::{Result, SigningRequest};
use http::header::{HeaderName, CONTENT_TYPE};
use http::request::Parts;
use http::HeaderValue;
use log::debug;

/// RequestSigner implements the CueCloud request signature.
///
/// The signature is the hex encoded HMAC-SHA256 of `nonce + url + body`
/// keyed by the access password. It is sent along with the key and nonce:
///
/// ```text
/// Access-Key: <access_key>
/// Access-Signature: <signature>
/// Access-Nonce: <nonce>
/// Content-Type: application/json
/// ```
#[derive(Debug, Default, Clone)]
pub struct RequestSigner {
    nonce: Option<String>,
}

impl RequestSigner {
    /// Create a new signer for CueCloud.
    pub fn new() -> Self {
        Self { nonce: None }
    }

    /// Specify the nonce.
    ///
    /// # Note
    ///
    /// We should always take current time as nonce.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Sign the request by inserting the access headers into `parts`.
    ///
    /// `url` must be the exact text the request targets, `body` the exact
    /// text it carries: both are covered by the signature byte for byte.
    pub fn sign(&self, parts: &mut Parts, url: &str, body: &str, cred: &Credential) -> Result<()> {
        let nonce = self
            .nonce
            .clone()
            .unwrap_or_else(|| format_nonce(now()));
        let signing_req = SigningRequest::new(nonce, url, body);

        let string_to_sign = signing_req.string_to_sign();
        debug!("calculated string to sign: {string_to_sign}");

        let signature = hex_hmac_sha256(
            cred.access_password.as_bytes(),
            string_to_sign.as_bytes(),
        )?;

        parts.headers.insert(HeaderName::from_static(ACCESS_KEY), {
            let mut value: HeaderValue = cred.access_key.parse()?;
            value.set_sensitive(true);
            value
        });
        parts.headers.insert(HeaderName::from_static(ACCESS_SIGNATURE), {
            let mut value: HeaderValue = signature.parse()?;
            value.set_sensitive(true);
            value
        });
        parts.headers.insert(
            HeaderName::from_static(ACCESS_NONCE),
            signing_req.nonce.parse()?,
        );
        parts
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuecloud_core::ErrorKind;
    use http::Request;
    use pretty_assertions::assert_eq;

    fn parts(url: &str) -> Parts {
        Request::builder()
            .method(http::Method::GET)
            .uri(url)
            .body(())
            .expect("request must be valid")
            .into_parts()
            .0
    }

    #[test]
    fn test_sign_inserts_headers() {
        let url = "https://example.com/x";
        let cred = Credential::new("access_key", "secret");
        let signer = RequestSigner::new().with_nonce("1000000");

        let mut req = parts(url);
        signer.sign(&mut req, url, "", &cred).unwrap();

        let expected = hex_hmac_sha256(b"secret", b"1000000https://example.com/x").unwrap();
        assert_eq!(req.headers["access-key"], "access_key");
        assert_eq!(req.headers["access-signature"], expected.as_str());
        assert_eq!(req.headers["access-nonce"], "1000000");
        assert_eq!(req.headers[CONTENT_TYPE], "application/json");
        assert!(req.headers["access-key"].is_sensitive());
        assert!(req.headers["access-signature"].is_sensitive());
        assert!(!req.headers["access-nonce"].is_sensitive());
    }

    #[test]
    fn test_sign_covers_body() {
        let url = "https://cuecloud.com/api/v1.0/cues/cancel/";
        let cred = Credential::new("access_key", "secret");
        let signer = RequestSigner::new().with_nonce("1400000000000000");

        let mut with_body = parts(url);
        signer
            .sign(&mut with_body, url, r#"{"CueID":"42"}"#, &cred)
            .unwrap();
        let mut without_body = parts(url);
        signer.sign(&mut without_body, url, "", &cred).unwrap();

        let expected = hex_hmac_sha256(
            b"secret",
            br#"1400000000000000https://cuecloud.com/api/v1.0/cues/cancel/{"CueID":"42"}"#,
        )
        .unwrap();
        assert_eq!(with_body.headers["access-signature"], expected.as_str());
        assert_ne!(
            with_body.headers["access-signature"],
            without_body.headers["access-signature"]
        );
    }

    #[test]
    fn test_sign_uses_current_time_as_nonce() {
        let url = "https://example.com/x";
        let before = now().timestamp_micros();

        let mut req = parts(url);
        RequestSigner::new()
            .sign(&mut req, url, "", &Credential::new("k", "s"))
            .unwrap();

        let nonce: i64 = req.headers["access-nonce"]
            .to_str()
            .unwrap()
            .parse()
            .unwrap();
        assert!(nonce >= before);
        assert!(nonce <= now().timestamp_micros());
    }

    #[test]
    fn test_sign_rejects_invalid_key_header() {
        let url = "https://example.com/x";
        let cred = Credential::new("bad\nkey", "secret");

        let err = RequestSigner::new()
            .sign(&mut parts(url), url, "", &cred)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TransportFailed);
    }
}

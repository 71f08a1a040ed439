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

use serde::Serialize;

use crate::Result;

/// Payload carried by a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Payload {
    /// No body.
    #[default]
    Empty,
    /// A body that is signed and sent verbatim.
    Raw(String),
    /// A serialized JSON document.
    Json(String),
}

impl Payload {
    /// Serialize `value` into a JSON payload.
    ///
    /// The serialized text is kept so that the bytes we sign are the bytes we
    /// send.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Payload::Json(serde_json::to_string(value)?))
    }

    /// Consume the payload into its body text, empty for [`Payload::Empty`].
    pub fn into_body(self) -> String {
        match self {
            Payload::Empty => String::new(),
            Payload::Raw(s) | Payload::Json(s) => s,
        }
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Payload::Raw(value)
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Payload::Raw(value.to_string())
    }
}

/// The parts of a request covered by the signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningRequest {
    /// Per request nonce, see [`crate::time::format_nonce`].
    pub nonce: String,
    /// Full target url exactly as it will be requested.
    pub url: String,
    /// Body text, empty if the request carries none.
    pub body: String,
}

impl SigningRequest {
    /// Create a new signing request.
    pub fn new(nonce: impl Into<String>, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            nonce: nonce.into(),
            url: url.into(),
            body: body.into(),
        }
    }

    /// Build the canonical message: `nonce`, `url` and `body` concatenated
    /// with no separator.
    ///
    /// The service rebuilds the same string, changing the order or adding a
    /// delimiter breaks every signature.
    pub fn string_to_sign(&self) -> String {
        let mut s = String::with_capacity(self.nonce.len() + self.url.len() + self.body.len());
        s.push_str(&self.nonce);
        s.push_str(&self.url);
        s.push_str(&self.body);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    #[test]
    fn test_string_to_sign() {
        let req = SigningRequest::new("1000000", "https://example.com/x", "");
        assert_eq!(req.string_to_sign(), "1000000https://example.com/x");
    }

    #[test]
    fn test_string_to_sign_with_body() {
        let req = SigningRequest::new(
            "1400000000000000",
            "https://cuecloud.com/api/v1.0/cues/cancel/",
            r#"{"CueID":"42"}"#,
        );
        assert_eq!(
            req.string_to_sign(),
            r#"1400000000000000https://cuecloud.com/api/v1.0/cues/cancel/{"CueID":"42"}"#
        );
    }

    #[test]
    fn test_payload_body() {
        assert_eq!(Payload::Empty.into_body(), "");
        assert_eq!(Payload::from("raw text").into_body(), "raw text");

        let map = BTreeMap::from([("CueID", Some("42")), ("Note", None)]);
        let payload = Payload::json(&map).unwrap();
        assert_eq!(payload, Payload::Json(r#"{"CueID":"42","Note":null}"#.to_string()));
    }
}

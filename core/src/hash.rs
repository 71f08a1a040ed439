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

//! Hash related utils.

use crate::Error;
use crate::Result;
use hmac::Hmac;
use hmac::Mac;
use sha2::Sha256;

/// Hex encoded HMAC with SHA256 hash.
///
/// Empty keys are accepted: the service does the same, so signing with an
/// empty secret yields a signature instead of an error.
pub fn hex_hmac_sha256(key: &[u8], content: &[u8]) -> Result<String> {
    let mut h = Hmac::<Sha256>::new_from_slice(key)
        .map_err(|e| Error::signing_failed(format!("failed to init hmac-sha256: {e}")))?;
    h.update(content);

    Ok(hex::encode(h.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(b"Jefe", b"what do ya want for nothing?", "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"; "rfc4231 case 2")]
    #[test_case(b"", b"", "b613679a0814d9ec772f95d778c35fc5ff1697c493715653c6c712144292c5ad"; "empty key and content")]
    fn test_hex_hmac_sha256(key: &[u8], content: &[u8], expected: &str) {
        assert_eq!(hex_hmac_sha256(key, content).unwrap(), expected);
    }

    #[test]
    fn test_hex_hmac_sha256_is_deterministic() {
        let key = b"2152b0f3cc1649fb";
        let msg = b"1400000000000000https://cuecloud.com/api/v1.0/balance/";

        let first = hex_hmac_sha256(key, msg).unwrap();
        let second = hex_hmac_sha256(key, msg).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}

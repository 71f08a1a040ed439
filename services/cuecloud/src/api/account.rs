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

use crate::Client;
use cuecloud_core::{Payload, Result};
use http::Method;

impl Client {
    /// Check that the credential is accepted by the service.
    pub async fn validate_user(&self) -> Result<String> {
        self.execute(&self.endpoint("validate/"), Method::GET, Payload::Empty)
            .await
    }

    /// Get the keywords commonly used on cues, handy when creating one.
    pub async fn get_keywords(&self) -> Result<String> {
        self.execute(&self.endpoint("cues/keywords/"), Method::GET, Payload::Empty)
            .await
    }

    /// Get the current balance in USD.
    pub async fn get_balance(&self) -> Result<String> {
        self.execute(&self.endpoint("balance/"), Method::GET, Payload::Empty)
            .await
    }
}

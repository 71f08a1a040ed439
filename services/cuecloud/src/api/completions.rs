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

use crate::{Client, CompletionsFilter, CueCompletionSubmission};
use cuecloud_core::query::QueryParams;
use cuecloud_core::{Payload, Result};
use http::Method;
use serde_json::json;

impl Client {
    /// Approve a completion submitted to one of our cues.
    pub async fn approve_cue_completion(&self, cue_completion_id: &str) -> Result<String> {
        let payload = Payload::json(&json!({ "CueCompletionID": cue_completion_id }))?;
        self.execute(
            &self.endpoint("completions/approve/"),
            Method::POST,
            payload,
        )
        .await
    }

    /// Decline a completion submitted to one of our cues.
    pub async fn decline_cue_completion(&self, cue_completion_id: &str) -> Result<String> {
        let payload = Payload::json(&json!({ "CueCompletionID": cue_completion_id }))?;
        self.execute(
            &self.endpoint("completions/decline/"),
            Method::POST,
            payload,
        )
        .await
    }

    /// List the completions of a cue.
    pub async fn get_cue_completions(&self, filter: CompletionsFilter) -> Result<String> {
        let params = QueryParams::new()
            .with("CueID", Some(filter.cue_id))
            .with("CueCompletionID", filter.cue_completion_id)
            .with("Page", filter.page)
            .with("Status", filter.status);

        self.execute(
            &self.endpoint_with_query("completions/", &params),
            Method::GET,
            Payload::Empty,
        )
        .await
    }

    /// Submit the answer to an assigned cue.
    ///
    /// The service expects this as a `GET` carrying a JSON body. In
    /// production it also rejects requests without an http referer.
    pub async fn submit_cue_completion(
        &self,
        submission: CueCompletionSubmission,
    ) -> Result<String> {
        let payload = Payload::json(&submission)?;
        self.execute(&self.endpoint("cues/complete"), Method::GET, payload)
            .await
    }
}

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

use crate::{Client, CreateCue, CuesFilter};
use cuecloud_core::query::QueryParams;
use cuecloud_core::{Payload, Result};
use http::Method;
use serde_json::json;

impl Client {
    /// Cancel one of our cues, refunding the balance.
    pub async fn cancel_cue(&self, cue_id: &str) -> Result<String> {
        let payload = Payload::json(&json!({ "CueID": cue_id }))?;
        self.execute(&self.endpoint("cues/cancel/"), Method::POST, payload)
            .await
    }

    /// Post a new cue.
    pub async fn create_cue(&self, cue: CreateCue) -> Result<String> {
        let payload = Payload::json(&cue)?;
        self.execute(&self.endpoint("cues/create"), Method::POST, payload)
            .await
    }

    /// List the cues we created.
    pub async fn get_cues(&self, filter: CuesFilter) -> Result<String> {
        let params = QueryParams::new()
            .with("CueID", filter.cue_id)
            .with("GroupID", filter.group_id)
            .with("NoteToSelf", filter.note_to_self)
            .with("HasPendingCueCompletions", filter.has_pending_cue_completions)
            .with("Status", filter.status)
            .with("Page", filter.page);

        self.execute(
            &self.endpoint_with_query("cues/", &params),
            Method::GET,
            Payload::Empty,
        )
        .await
    }

    /// Check a cue in, or out if we already hold it.
    ///
    /// The response carries the assignment id needed by
    /// [`Client::submit_cue_completion`].
    pub async fn assign_cue(&self, cue_id: &str) -> Result<String> {
        let payload = Payload::json(&json!({ "CueID": cue_id }))?;
        self.execute(&self.endpoint("cues/"), Method::GET, payload)
            .await
    }
}

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

//! Enumerations and request options for CueCloud endpoints.

use serde::Serialize;
use std::fmt;

/// Payment type filter for [`crate::Client::get_payments`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PaymentType {
    /// Payments deposited.
    Deposits,
    /// Payments withdrawn.
    Withdrawals,
    /// Payments granted as bonus.
    Bonuses,
}

impl PaymentType {
    /// Name used by the api.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Deposits => "Deposits",
            PaymentType::Withdrawals => "Withdrawals",
            PaymentType::Bonuses => "Bonuses",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CueStatus {
    /// Open for completions.
    Active,
    /// Every opportunity has been completed.
    Complete,
    /// Canceled by its owner.
    Canceled,
    /// Lifetime ran out.
    Expired,
}

impl CueStatus {
    /// Name used by the api.
    pub fn as_str(&self) -> &'static str {
        match self {
            CueStatus::Active => "Active",
            CueStatus::Complete => "Complete",
            CueStatus::Canceled => "Canceled",
            CueStatus::Expired => "Expired",
        }
    }
}

impl fmt::Display for CueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review status of a cue completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CueCompletionStatus {
    /// Waiting for approve or decline.
    Pending,
    /// Approved.
    Accepted,
    /// Declined.
    Declined,
}

impl CueCompletionStatus {
    /// Name used by the api.
    pub fn as_str(&self) -> &'static str {
        match self {
            CueCompletionStatus::Pending => "Pending",
            CueCompletionStatus::Accepted => "Accepted",
            CueCompletionStatus::Declined => "Declined",
        }
    }
}

impl fmt::Display for CueCompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for [`crate::Client::get_payments`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentsFilter {
    /// Only list payments of this type.
    pub payment_type: Option<PaymentType>,
    /// Only list the payment with this id.
    pub payment_id: Option<u64>,
    /// Note to self attached to the request.
    pub note_to_self: Option<String>,
    /// Page to fetch, 50 items per page.
    pub page: Option<u32>,
}

/// Filters for [`crate::Client::get_cue_completions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionsFilter {
    /// The cue whose completions are listed.
    pub cue_id: String,
    /// Only list the completion with this id.
    pub cue_completion_id: Option<u64>,
    /// Only list completions in this status.
    pub status: Option<CueCompletionStatus>,
    /// Page to fetch, 50 items per page.
    pub page: Option<u32>,
}

impl CompletionsFilter {
    /// List every completion of `cue_id`.
    pub fn new(cue_id: impl Into<String>) -> Self {
        Self {
            cue_id: cue_id.into(),
            cue_completion_id: None,
            status: None,
            page: None,
        }
    }

    /// Only list completions in `status`.
    pub fn with_status(mut self, status: CueCompletionStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Filters for [`crate::Client::get_cues`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CuesFilter {
    /// Only list the cue with this id.
    pub cue_id: Option<String>,
    /// Only list cues of this group.
    pub group_id: Option<u64>,
    /// Only list cues with (or without) pending completions.
    pub has_pending_cue_completions: Option<bool>,
    /// Only list cues in this status.
    pub status: Option<CueStatus>,
    /// Note to self attached to the request.
    pub note_to_self: Option<String>,
    /// Page to fetch, 50 items per page.
    pub page: Option<u32>,
}

/// A new cue, see [`crate::Client::create_cue`].
///
/// Every optional field is serialized, `None` as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateCue {
    /// Title of the cue.
    #[serde(rename = "Title")]
    pub title: String,
    /// Payment in USD for each completion.
    #[serde(rename = "Amount")]
    pub amount: f64,
    /// How many completions are paid for.
    #[serde(rename = "NumOpportunities")]
    pub num_opportunities: u32,
    /// Longer description of the task.
    #[serde(rename = "Description")]
    pub description: Option<String>,
    /// Post the cue anonymously.
    #[serde(rename = "IsAnonymous")]
    pub is_anonymous: Option<bool>,
    /// Push a notification for each completion.
    #[serde(rename = "PushNotificationOnCueCompletion")]
    pub push_notification_on_cue_completion: Option<bool>,
    /// Reject completions submitted anonymously.
    #[serde(rename = "DisallowAnonymousCueCompletions")]
    pub disallow_anonymous_cue_completions: Option<bool>,
    /// Custom form on your site the worker fills in.
    #[serde(rename = "iFrameURL")]
    pub iframe_url: Option<String>,
    /// Call the notification url for each completion.
    #[serde(rename = "URLNotificationOnCueCompletion")]
    pub url_notification_on_cue_completion: Option<bool>,
    /// Send an email for each completion.
    #[serde(rename = "EmailNotificationOnCueCompletion")]
    pub email_notification_on_cue_completion: Option<bool>,
    /// Lifetime of the cue.
    #[serde(rename = "LifetimeInMinutes")]
    pub lifetime_in_minutes: Option<u32>,
    /// Time a worker has once the cue is assigned.
    #[serde(rename = "TimeLimitToCompleteCueInMinutes")]
    pub time_limit_to_complete_cue_in_minutes: Option<u32>,
    /// Completions not reviewed within this many minutes are approved.
    #[serde(rename = "AutoApproveCueCompletionAfterThisManyMinutes")]
    pub auto_approve_cue_completion_after_this_many_minutes: Option<u32>,
    /// Note only visible to the poster.
    #[serde(rename = "NoteToSelf")]
    pub note_to_self: Option<String>,
    /// Keywords, see [`crate::Client::get_keywords`].
    #[serde(rename = "Keywords")]
    pub keywords: Option<String>,
}

impl CreateCue {
    /// Create a cue with the required fields, everything else unset.
    pub fn new(title: impl Into<String>, amount: f64, num_opportunities: u32) -> Self {
        Self {
            title: title.into(),
            amount,
            num_opportunities,
            description: None,
            is_anonymous: None,
            push_notification_on_cue_completion: None,
            disallow_anonymous_cue_completions: None,
            iframe_url: None,
            url_notification_on_cue_completion: None,
            email_notification_on_cue_completion: None,
            lifetime_in_minutes: None,
            time_limit_to_complete_cue_in_minutes: None,
            auto_approve_cue_completion_after_this_many_minutes: None,
            note_to_self: None,
            keywords: None,
        }
    }
}

/// A bonus for a completed cue, see [`crate::Client::grant_bonus`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bonus {
    /// Bonus in USD.
    #[serde(rename = "Amount")]
    pub amount: f64,
    /// The completion being rewarded.
    #[serde(rename = "CueCompletionID")]
    pub cue_completion_id: String,
    /// Reason shown to the worker, defaults to "Thanks for your hard work!".
    #[serde(rename = "Reason")]
    pub reason: Option<String>,
    /// Note only visible to the granter.
    #[serde(rename = "NoteToSelf")]
    pub note_to_self: Option<String>,
}

impl Bonus {
    /// Create a bonus without reason or note.
    pub fn new(cue_completion_id: impl Into<String>, amount: f64) -> Self {
        Self {
            amount,
            cue_completion_id: cue_completion_id.into(),
            reason: None,
            note_to_self: None,
        }
    }
}

/// The answer to an assigned cue, see [`crate::Client::submit_cue_completion`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CueCompletionSubmission {
    /// Assignment returned by [`crate::Client::assign_cue`].
    #[serde(rename = "AssignmentID")]
    pub assignment_id: String,
    /// Free-text answer.
    #[serde(rename = "AnswerText")]
    pub answer_text: Option<String>,
    /// Link to a submitted video.
    #[serde(rename = "VideoURL")]
    pub video_url: Option<String>,
    /// Thumbnail for the submitted video.
    #[serde(rename = "VideoThumbnailURL")]
    pub video_thumbnail_url: Option<String>,
    /// Link to a submitted image.
    #[serde(rename = "ImageURL")]
    pub image_url: Option<String>,
    /// Submit without revealing the worker.
    #[serde(rename = "IsAnonymous")]
    pub is_anonymous: Option<bool>,
}

impl CueCompletionSubmission {
    /// Create an empty submission for `assignment_id`.
    pub fn new(assignment_id: impl Into<String>) -> Self {
        Self {
            assignment_id: assignment_id.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_enums_render_as_variant_name() {
        assert_eq!(PaymentType::Bonuses.to_string(), "Bonuses");
        assert_eq!(CueStatus::Canceled.to_string(), "Canceled");
        assert_eq!(CueCompletionStatus::Accepted.to_string(), "Accepted");
        assert_eq!(
            serde_json::to_value(CueStatus::Active).unwrap(),
            json!("Active")
        );
    }

    #[test]
    fn test_submission_serializes_every_field() {
        let mut submission = CueCompletionSubmission::new("assign-1");
        submission.answer_text = Some("done".to_string());

        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            json!({
                "AssignmentID": "assign-1",
                "AnswerText": "done",
                "VideoURL": null,
                "VideoThumbnailURL": null,
                "ImageURL": null,
                "IsAnonymous": null,
            })
        );
    }
}

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

use crate::constants::DEFAULT_BONUS_REASON;
use crate::{Bonus, Client, PaymentsFilter};
use cuecloud_core::query::QueryParams;
use cuecloud_core::{Payload, Result};
use http::Method;
use serde_json::json;

impl Client {
    /// Deposit `amount_in_usd` from the credit card on file.
    ///
    /// Cards can only be added in the app, not through the api.
    pub async fn make_deposit(
        &self,
        amount_in_usd: f64,
        credit_card_last_four_digits: u16,
    ) -> Result<String> {
        let payload = Payload::json(&json!({
            "AmountInUSD": amount_in_usd,
            "CreditCardLastFourDigits": credit_card_last_four_digits,
        }))?;
        self.execute(&self.endpoint("payments/deposit/"), Method::POST, payload)
            .await
    }

    /// Withdraw `amount_in_usd` to the PayPal account of the user.
    pub async fn withdraw_funds(&self, amount_in_usd: f64) -> Result<String> {
        let payload = Payload::json(&json!({ "AmountInUSD": amount_in_usd }))?;
        self.execute(&self.endpoint("payments/withdraw/"), Method::POST, payload)
            .await
    }

    /// Grant a bonus to the worker behind a completion.
    ///
    /// A missing reason is replaced by "Thanks for your hard work!".
    pub async fn grant_bonus(&self, mut bonus: Bonus) -> Result<String> {
        if bonus.reason.is_none() {
            bonus.reason = Some(DEFAULT_BONUS_REASON.to_string());
        }

        let payload = Payload::json(&bonus)?;
        self.execute(&self.endpoint("payments/bonus/"), Method::POST, payload)
            .await
    }

    /// List payments.
    pub async fn get_payments(&self, filter: PaymentsFilter) -> Result<String> {
        let params = QueryParams::new()
            .with("PaymentType", filter.payment_type)
            .with("PaymentID", filter.payment_id)
            .with("Page", filter.page)
            .with("NoteToSelf", filter.note_to_self);

        self.execute(
            &self.endpoint_with_query("payments/", &params),
            Method::GET,
            Payload::Empty,
        )
        .await
    }
}

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

// Env values used by cuecloud.
pub const CUECLOUD_ACCESS_KEY: &str = "CUECLOUD_ACCESS_KEY";
pub const CUECLOUD_ACCESS_PASSWORD: &str = "CUECLOUD_ACCESS_PASSWORD";

// Headers used by cuecloud.
pub const ACCESS_KEY: &str = "access-key";
pub const ACCESS_SIGNATURE: &str = "access-signature";
pub const ACCESS_NONCE: &str = "access-nonce";

pub const DEFAULT_ENDPOINT: &str = "https://cuecloud.com/";
pub const API_VERSION: &str = "api/v1.0/";

pub const DEFAULT_BONUS_REASON: &str = "Thanks for your hard work!";

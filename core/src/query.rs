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

//! Query string encoding.
//!
//! Read endpoints take their filters as a query suffix. Keys and values are
//! encoded with `application/x-www-form-urlencoded` rules: alphanumerics and
//! `*-._` pass through, space becomes `+`, every other UTF-8 byte becomes
//! `%XX`.

/// What to do with a parameter that carries no value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Absent {
    /// Send the literal text `null`, as the service has always received it.
    #[default]
    Null,
    /// Leave the parameter out of the query string.
    Omit,
}

/// Per-field rules for absent query parameters.
///
/// Fields without an explicit rule fall back to the default rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPolicy {
    default: Absent,
    fields: Vec<(String, Absent)>,
}

impl QueryPolicy {
    /// Create a policy applying `default` to every field.
    pub fn new(default: Absent) -> Self {
        Self {
            default,
            fields: Vec::new(),
        }
    }

    /// Override the rule of a single field.
    pub fn with_field(mut self, name: impl Into<String>, rule: Absent) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some((_, r)) => *r = rule,
            None => self.fields.push((name, rule)),
        }
        self
    }

    /// Get the rule for given field.
    pub fn rule_for(&self, name: &str) -> Absent {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, r)| *r)
            .unwrap_or(self.default)
    }
}

/// Ordered query parameters.
///
/// Parameters keep insertion order so the same call always yields the same
/// url.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, Option<String>)>,
}

impl QueryParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a parameter, `None` marks it as absent.
    pub fn push<V: ToString>(&mut self, key: impl Into<String>, value: Option<V>) {
        self.pairs
            .push((key.into(), value.map(|v| v.to_string())));
    }

    /// Builder style version of [`QueryParams::push`].
    pub fn with<V: ToString>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.push(key, value);
        self
    }

    /// Number of parameters, absent ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if no parameter has been pushed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encode into a query suffix like `?a=b&c`.
    ///
    /// - Returns an empty string if nothing is left to encode.
    /// - A value whose text is empty is written as a bare key.
    /// - Absent values follow `policy`.
    pub fn to_query_string(&self, policy: &QueryPolicy) -> String {
        let mut s = String::with_capacity(self.query_size() + self.pairs.len() * 2);

        let entries = self.pairs.iter().filter_map(|(k, v)| match v {
            Some(v) => Some((k.as_str(), v.as_str())),
            None => match policy.rule_for(k) {
                Absent::Null => Some((k.as_str(), "null")),
                Absent::Omit => None,
            },
        });

        for (i, (k, v)) in entries.enumerate() {
            s.push(if i == 0 { '?' } else { '&' });

            s.extend(form_urlencoded::byte_serialize(k.as_bytes()));
            if !v.is_empty() {
                s.push('=');
                s.extend(form_urlencoded::byte_serialize(v.as_bytes()));
            }
        }

        s
    }

    #[inline]
    fn query_size(&self) -> usize {
        self.pairs
            .iter()
            .map(|(k, v)| k.len() + v.as_ref().map_or(4, |v| v.len()))
            .sum::<usize>()
    }
}

/// Decode a query suffix back into ordered pairs.
///
/// The leading `?` is optional. Bare keys decode with an empty value.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

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

//! Utility functions and types.

use std::fmt::Debug;
use std::fmt::Display;

/// Query keys whose values must never show up in logs.
pub const SENSITIVE_QUERY_KEYS: &[&str] = &["apikey", "hash"];

/// Redact hides a secret while keeping enough of it to tell two values apart.
///
/// - Empty input renders as `EMPTY`.
/// - Input shorter than 12 characters is fully masked.
/// - Longer input keeps its first and last three characters, unless built
///   with [`Redact::full`].
pub struct Redact<'a> {
    value: &'a str,
    full: bool,
}

impl<'a> Redact<'a> {
    /// Mask every character of a non-empty value, whatever its length.
    pub fn full(value: &'a str) -> Self {
        Redact { value, full: true }
    }
}

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact { value, full: false }
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact::from(value.as_str())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Char boundaries matter here, keys are opaque and may be non-ascii.
        let chars = self.value.chars().count();
        match chars {
            0 => f.write_str("EMPTY"),
            _ if self.full => f.write_str("***"),
            1..12 => f.write_str("***"),
            _ => {
                let head: String = self.value.chars().take(3).collect();
                let tail: String = self.value.chars().skip(chars - 3).collect();
                write!(f, "{head}***{tail}")
            }
        }
    }
}

impl Display for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

/// Render query pairs for logging with sensitive values redacted.
pub fn redact_query(query: &[(String, String)]) -> Vec<(&str, String)> {
    query
        .iter()
        .map(|(k, v)| {
            if SENSITIVE_QUERY_KEYS.contains(&k.as_str()) {
                (k.as_str(), Redact::from(v).to_string())
            } else {
                (k.as_str(), v.clone())
            }
        })
        .collect()
}

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

//! Time related utils.

use crate::Error;
use crate::Result;

/// DateTime is the alias for `chrono::DateTime<chrono::Utc>`.
pub type DateTime = chrono::DateTime<chrono::Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    chrono::Utc::now()
}

/// Whole seconds elapsed since the unix epoch, rounded down.
///
/// Returns a config error if the instant is before the epoch, which only
/// happens when the host clock can't be trusted.
pub fn unix_timestamp(time: DateTime) -> Result<u64> {
    u64::try_from(time.timestamp()).map_err(|e| {
        Error::config_invalid(format!("system clock {time} is before the unix epoch"))
            .with_source(e)
    })
}

/// Parse an RFC 3339 datetime, e.g. `2022-03-01T08:12:34Z`.
pub fn parse_rfc3339(s: &str) -> Result<DateTime> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|v| v.with_timezone(&chrono::Utc))
        .map_err(|e| Error::unexpected(format!("invalid rfc3339 datetime: {s}")).with_source(e))
}

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

//! Request authentication for the catalog API.
//!
//! Every request carries three query parameters:
//!
//! ```text
//! ts     = <whole seconds since unix epoch>
//! apikey = <public key>
//! hash   = lowercase hex md5(ts + private key + public key)
//! ```

use crate::hash::hex_md5;
use crate::time::{unix_timestamp, DateTime};
use crate::{Credential, Result};

/// Query key for the timestamp.
pub const TIMESTAMP_KEY: &str = "ts";
/// Query key for the public key.
pub const API_KEY_KEY: &str = "apikey";
/// Query key for the digest.
pub const HASH_KEY: &str = "hash";

/// Signature is the `(ts, hash)` pair proving a request came from the key owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Decimal unix timestamp, no grouping or fraction.
    pub timestamp: String,
    /// Lowercase hex md5 digest, 32 characters.
    pub hash: String,
}

impl Signature {
    /// Sign at the given instant.
    ///
    /// Only the timestamp and the two keys are signed. Filters and pagination
    /// never take part in the digest.
    pub fn sign(cred: &Credential, now: DateTime) -> Result<Self> {
        let timestamp = unix_timestamp(now)?.to_string();
        let hash = digest(&timestamp, cred.private_key(), cred.public_key());

        Ok(Self { timestamp, hash })
    }

    /// Render the signature as the trailing `ts`, `apikey`, `hash` query pairs.
    pub fn into_query(self, cred: &Credential) -> [(String, String); 3] {
        [
            (TIMESTAMP_KEY.to_string(), self.timestamp),
            (API_KEY_KEY.to_string(), cred.public_key().to_string()),
            (HASH_KEY.to_string(), self.hash),
        ]
    }
}

fn digest(timestamp: &str, private_key: &str, public_key: &str) -> String {
    let mut material =
        String::with_capacity(timestamp.len() + private_key.len() + public_key.len());
    material.push_str(timestamp);
    material.push_str(private_key);
    material.push_str(public_key);

    hex_md5(material.as_bytes())
}

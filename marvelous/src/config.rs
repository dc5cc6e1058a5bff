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

use std::fmt::{Debug, Formatter};

use marvelous_core::utils::Redact;
use marvelous_core::{Context, Credential, DEFAULT_ENDPOINT};

use crate::constants::*;

/// Config carries all the configuration for the catalog client.
#[derive(Clone, Default)]
pub struct Config {
    /// `public_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MARVEL_PUBLIC_KEY`]
    pub public_key: Option<String>,
    /// `private_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MARVEL_PRIVATE_KEY`]
    pub private_key: Option<String>,
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MARVEL_ENDPOINT`]
    /// - default to `http://gateway.marvel.com/v1/public/`
    pub endpoint: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set public_key
    pub fn with_public_key(mut self, public_key: impl Into<String>) -> Self {
        self.public_key = Some(public_key.into());
        self
    }

    /// Set private_key
    pub fn with_private_key(mut self, private_key: impl Into<String>) -> Self {
        self.private_key = Some(private_key.into());
        self
    }

    /// Set endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(MARVEL_PUBLIC_KEY) {
            self.public_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(MARVEL_PRIVATE_KEY) {
            self.private_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(MARVEL_ENDPOINT) {
            self.endpoint.get_or_insert(v);
        }

        self
    }

    /// Build the credential, missing keys are left empty.
    ///
    /// An incomplete credential is rejected when the first query is made.
    pub fn credential(&self) -> Credential {
        Credential::new(
            self.public_key.clone().unwrap_or_default(),
            self.private_key.clone().unwrap_or_default(),
        )
    }

    /// The endpoint to send requests to.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("public_key", &self.public_key.as_ref().map(Redact::from))
            .field("private_key", &self.private_key.as_deref().map(Redact::full))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

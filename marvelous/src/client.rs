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

use marvelous_core::time::DateTime;
use marvelous_core::{Context, Credential, Executor, ResourceKind};

use crate::resource::{Characters, Comics, Creators, Events, Resource, Series, Stories};
use crate::Config;

/// Client is the entry point to the catalog API.
///
/// A client owns one credential for its whole life. Facades returned by its
/// accessors share the same executor and can be used concurrently.
///
/// ```no_run
/// use marvelous::{Client, Context, Credential, QueryOptions};
/// use serde_json::Value;
///
/// # async fn example(ctx: Context) -> marvelous::Result<()> {
/// let client = Client::new(ctx, Credential::new("public", "private"));
///
/// let thor: Value = client
///     .characters()
///     .find_all(QueryOptions::new().with_filter("name", "Thor"))
///     .await?;
/// let comics: Value = client.characters().comics(1009664, QueryOptions::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    exec: Executor,
}

impl Client {
    /// Create a client sending through `ctx`.
    pub fn new(ctx: Context, credential: Credential) -> Self {
        Self {
            exec: Executor::new(ctx, credential),
        }
    }

    /// Create a client from `config`.
    ///
    /// Call [`Config::from_env`] first to pick keys up from the environment.
    pub fn from_config(ctx: Context, config: Config) -> Self {
        let exec = Executor::new(ctx, config.credential()).with_endpoint(config.endpoint());
        Self { exec }
    }

    /// Use another endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.exec = self.exec.with_endpoint(endpoint);
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.exec = self.exec.with_time(time);
        self
    }

    /// The executor shared by every facade.
    pub fn executor(&self) -> &Executor {
        &self.exec
    }

    /// Untyped facade of `kind`.
    pub fn resource(&self, kind: ResourceKind) -> Resource {
        Resource::new(kind, self.exec.clone())
    }

    /// Facade of `characters`.
    pub fn characters(&self) -> Characters {
        Characters::new(self.exec.clone())
    }

    /// Facade of `comics`.
    pub fn comics(&self) -> Comics {
        Comics::new(self.exec.clone())
    }

    /// Facade of `creators`.
    pub fn creators(&self) -> Creators {
        Creators::new(self.exec.clone())
    }

    /// Facade of `events`.
    pub fn events(&self) -> Events {
        Events::new(self.exec.clone())
    }

    /// Facade of `series`.
    pub fn series(&self) -> Series {
        Series::new(self.exec.clone())
    }

    /// Facade of `stories`.
    pub fn stories(&self) -> Stories {
        Stories::new(self.exec.clone())
    }
}

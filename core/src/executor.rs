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

use std::sync::Arc;

use bytes::Bytes;
use log::debug;
use serde::de::DeserializeOwned;

use crate::time::{now, DateTime};
use crate::{Context, Credential, Error, Query, RequestDescriptor, Result};

/// The public endpoint of the catalog API.
pub const DEFAULT_ENDPOINT: &str = "http://gateway.marvel.com/v1/public/";

/// Executor turns a [`Query`] into a signed request and runs it.
///
/// Both [`Executor::query`] and [`Executor::query_blocking`] build the request
/// the same way; only the transport entry point differs. Cloning is cheap and
/// clones share the same credential.
#[derive(Clone, Debug)]
pub struct Executor {
    ctx: Context,
    credential: Arc<Credential>,
    endpoint: String,
    time: Option<DateTime>,
}

impl Executor {
    /// Create a new executor against [`DEFAULT_ENDPOINT`].
    pub fn new(ctx: Context, credential: Credential) -> Self {
        Self {
            ctx,
            credential: Arc::new(credential),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            time: None,
        }
    }

    /// Use another endpoint, e.g. a local mock server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The context this executor sends through.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Build the signed request for `query` without sending it.
    pub fn prepare(&self, query: &Query) -> Result<RequestDescriptor> {
        let now = self.time.unwrap_or_else(now);
        RequestDescriptor::build(query, &self.credential, now)
    }

    /// Run `query` and decode the payload into `T`.
    pub async fn query<T: DeserializeOwned>(&self, query: &Query) -> Result<T> {
        let req = self.prepare(query)?;
        debug!("sending query: {req:?}");

        let body = self
            .ctx
            .send_async(&self.endpoint, &req)
            .await
            .map_err(|e| query_failed(&req, e))?;
        decode(&req, body)
    }

    /// Run `query` on the current thread and decode the payload into `T`.
    ///
    /// Don't call this from inside an async runtime, use [`Executor::query`]
    /// there. Blocking transports may refuse to send from a runtime thread,
    /// which surfaces as [`ErrorKind::QueryFailed`](crate::ErrorKind::QueryFailed).
    pub fn query_blocking<T: DeserializeOwned>(&self, query: &Query) -> Result<T> {
        let req = self.prepare(query)?;
        debug!("sending blocking query: {req:?}");

        let body = self
            .ctx
            .send(&self.endpoint, &req)
            .map_err(|e| query_failed(&req, e))?;
        decode(&req, body)
    }
}

fn query_failed(req: &RequestDescriptor, err: anyhow::Error) -> Error {
    debug!("query {} failed: {err:#}", req.path());
    Error::query_failed(format!(
        "error retrieving response for {}, check the source for details",
        req.path()
    ))
    .with_source(err)
}

fn decode<T: DeserializeOwned>(req: &RequestDescriptor, body: Bytes) -> Result<T> {
    serde_json::from_slice(&body).map_err(|e| {
        Error::query_failed(format!("response of {} is not valid json", req.path())).with_source(e)
    })
}

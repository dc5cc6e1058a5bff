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

use bytes::Bytes;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use crate::RequestDescriptor;

/// Context carries the collaborators a client talks to.
///
/// ## Important
///
/// marvelous-core provides NO default transport. Any unconfigured component
/// uses a no-op implementation that returns errors or empty values when called.
///
/// ## Example
///
/// ```
/// use marvelous_core::{Context, OsEnv};
///
/// let ctx = Context::new().with_env(OsEnv);
/// ```
#[derive(Clone)]
pub struct Context {
    transport: Arc<dyn Transport>,
    env: Arc<dyn Env>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("transport", &self.transport)
            .field("env", &self.env)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context with no-op implementations.
    pub fn new() -> Self {
        Self {
            transport: Arc::new(NoopTransport),
            env: Arc::new(NoopEnv),
        }
    }

    /// Replace the transport implementation.
    pub fn with_transport(mut self, transport: impl Transport) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    /// Replace the environment implementation.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Send the request and block until the payload is received.
    #[inline]
    pub fn send(&self, endpoint: &str, req: &RequestDescriptor) -> anyhow::Result<Bytes> {
        self.transport.send(endpoint, req)
    }

    /// Send the request without blocking the caller.
    #[inline]
    pub async fn send_async(
        &self,
        endpoint: &str,
        req: &RequestDescriptor,
    ) -> anyhow::Result<Bytes> {
        self.transport.send_async(endpoint, req).await
    }

    /// Get the environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }
}

/// Transport performs the http call described by a [`RequestDescriptor`].
///
/// The client never interprets transport failures: connection errors, non-2xx
/// statuses and the like are all reported as an opaque `anyhow::Error` and
/// wrapped by the caller. Retries and timeouts belong here too.
///
/// Both entry points must send exactly the request they are given.
#[async_trait::async_trait]
pub trait Transport: Debug + Send + Sync + 'static {
    /// Send the request and block until the payload is received.
    fn send(&self, endpoint: &str, req: &RequestDescriptor) -> anyhow::Result<Bytes>;

    /// Send the request and resolve with the payload.
    async fn send_async(&self, endpoint: &str, req: &RequestDescriptor) -> anyhow::Result<Bytes>;
}

/// Env reads environment variables.
pub trait Env: Debug + Send + Sync + 'static {
    /// Get an environment variable.
    fn var(&self, key: &str) -> Option<String>;
}

/// Implements Env for the current process.
#[derive(Debug, Copy, Clone)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key)?.into_string().ok()
    }
}

/// StaticEnv provides a fixed set of environment variables.
///
/// This is useful for testing.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// The environment variables to use.
    pub envs: HashMap<String, String>,
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }
}

/// NoopTransport is a no-op implementation that always returns an error.
///
/// This is used when no transport is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTransport;

#[async_trait::async_trait]
impl Transport for NoopTransport {
    fn send(&self, _endpoint: &str, _req: &RequestDescriptor) -> anyhow::Result<Bytes> {
        Err(anyhow::anyhow!(
            "sending not supported: no transport configured"
        ))
    }

    async fn send_async(
        &self,
        _endpoint: &str,
        _req: &RequestDescriptor,
    ) -> anyhow::Result<Bytes> {
        Err(anyhow::anyhow!(
            "sending not supported: no transport configured"
        ))
    }
}

/// NoopEnv is a no-op implementation that always returns None/empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnv;

impl Env for NoopEnv {
    fn var(&self, _key: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([("MARVEL_PUBLIC_KEY".to_string(), "public".to_string())]),
        });

        assert_eq!(ctx.env_var("MARVEL_PUBLIC_KEY").as_deref(), Some("public"));
        assert_eq!(ctx.env_var("MARVEL_PRIVATE_KEY"), None);
    }

    #[test]
    fn test_default_context_has_no_env() {
        let ctx = Context::default();
        assert_eq!(ctx.env_var("MARVEL_PUBLIC_KEY"), None);
        assert_eq!(ctx.env_var("PATH"), None);
    }
}

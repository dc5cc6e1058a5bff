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

//! Core components of the marvelous catalog client.
//!
//! This crate turns a logical query into a signed, parameter-ordered request
//! and runs it through an injected transport, either blocking or async.
//!
//! ## Overview
//!
//! - **Credential**: the immutable public/private key pair
//! - **Signature**: `ts` plus `md5(ts + private key + public key)`
//! - **RequestDescriptor**: path template, url segments and ordered query of one call
//! - **Context**: holds the [`Transport`] and [`Env`] implementations
//! - **Executor**: builds descriptors and sends them through the context
//!
//! ## Example
//!
//! ```no_run
//! use marvelous_core::{Context, Credential, Executor, Query, QueryOptions, ResourceKind};
//! use serde_json::Value;
//!
//! # async fn example() -> marvelous_core::Result<()> {
//! // Plug a real transport in with `Context::with_transport`.
//! let ctx = Context::new();
//! let exec = Executor::new(ctx, Credential::new("public", "private"));
//!
//! let query = Query::collection(
//!     ResourceKind::Characters,
//!     QueryOptions::new().with_filter("name", "Thor"),
//! );
//! let page: Value = exec.query(&query).await?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod signature;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};
mod context;
pub use context::{Context, Env, NoopEnv, NoopTransport, OsEnv, StaticEnv, Transport};
mod credential;
pub use credential::Credential;
mod resource;
pub use resource::ResourceKind;
mod query;
pub use query::{Query, QueryOptions, DEFAULT_LIMIT, DEFAULT_OFFSET};
mod request;
pub use request::{compose_query, path_template, RequestDescriptor, ID_SEGMENT};
mod executor;
pub use executor::{Executor, DEFAULT_ENDPOINT};

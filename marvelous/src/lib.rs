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

//! Typed client for the Marvel Comics catalog API.
//!
//! # Example
//!
//! ```no_run
//! use marvelous::{default_context, Client, Config, QueryOptions};
//! use serde_json::Value;
//!
//! #[tokio::main]
//! async fn main() -> marvelous::Result<()> {
//!     // Keys are loaded from `MARVEL_PUBLIC_KEY` and `MARVEL_PRIVATE_KEY`.
//!     let ctx = default_context();
//!     let config = Config::default().from_env(&ctx);
//!     let client = Client::from_config(ctx, config);
//!
//!     let page: Value = client
//!         .comics()
//!         .find_all(QueryOptions::new().with_limit(3).with_filter("orderBy", "-modified"))
//!         .await?;
//!     println!("{page}");
//!     Ok(())
//! }
//! ```
//!
//! # Resources
//!
//! Every facade has `find`, `find_all` and a traversal to each of the other
//! five kinds, all with a `_blocking` twin:
//!
//! - [`Characters`], [`Comics`], [`Creators`], [`Events`], [`Series`], [`Stories`]
//!
//! # Features
//!
//! - `default-context`: Enable [`default_context`] backed by reqwest.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub use marvelous_core::*;

mod constants;

mod config;
pub use config::Config;

mod resource;
pub use resource::{Characters, Comics, Creators, Events, Resource, Series, Stories};

mod client;
pub use client::Client;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

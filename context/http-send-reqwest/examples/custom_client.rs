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

use anyhow::Result;
use marvelous_core::{Context, Credential, Executor, Query, QueryOptions, ResourceKind};
use marvelous_http_send_reqwest::ReqwestTransport;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::try_init();

    // Create a custom reqwest client with specific configuration
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .user_agent("marvelous-example/1.0")
        .build()?;

    let ctx = Context::new().with_transport(ReqwestTransport::new(client));
    let exec = Executor::new(
        ctx,
        Credential::new(
            std::env::var("MARVEL_PUBLIC_KEY").unwrap_or_default(),
            std::env::var("MARVEL_PRIVATE_KEY").unwrap_or_default(),
        ),
    );

    let query = Query::collection(
        ResourceKind::Characters,
        QueryOptions::new().with_limit(5).with_filter("orderBy", "name"),
    );
    println!("{:?}", exec.prepare(&query)?);

    match exec.query::<Value>(&query).await {
        Ok(page) => println!("{}", serde_json::to_string_pretty(&page)?),
        Err(e) => eprintln!("Request failed: {e:?}"),
    }

    Ok(())
}

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
use marvelous::{default_context, Client, Config, QueryOptions};
use serde_json::Value;

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    // Keys are loaded from `MARVEL_PUBLIC_KEY` and `MARVEL_PRIVATE_KEY`.
    let ctx = default_context();
    let config = Config::default().from_env(&ctx);
    let client = Client::from_config(ctx, config);

    let spider_man: Value = client.characters().find_all_blocking(
        QueryOptions::new()
            .with_limit(1)
            .with_filter("name", "Spider-Man"),
    )?;
    println!("{spider_man:#}");

    let comics: Value = client
        .characters()
        .comics_blocking(1009610, QueryOptions::new().with_limit(3))?;
    for comic in comics["data"]["results"].as_array().into_iter().flatten() {
        println!("{}", comic["title"]);
    }

    Ok(())
}

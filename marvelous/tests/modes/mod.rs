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

use std::collections::HashMap;
use std::error::Error as _;

use marvelous::{
    Client, Config, Context, ErrorKind, QueryOptions, ResourceKind, StaticEnv, DEFAULT_ENDPOINT,
};
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{init_client, signing_time, RecordingTransport};

#[tokio::test]
async fn test_blocking_and_async_build_identical_requests() -> anyhow::Result<()> {
    let (client, transport) = init_client();
    let options = QueryOptions::new()
        .with_limit(2)
        .with_offset(3)
        .with_filter("name", "Thor");

    for kind in ResourceKind::ALL {
        let facade = client.resource(kind);

        let _: Value = facade.find(123).await?;
        let a = transport.last();
        let _: Value = facade.find_blocking(123)?;
        assert_eq!(a, transport.last());

        let _: Value = facade.find_all(options.clone()).await?;
        let a = transport.last();
        let _: Value = facade.find_all_blocking(options.clone())?;
        assert_eq!(a, transport.last());

        let target = kind.traversals()[0];
        let _: Value = facade.related(target, 123, options.clone()).await?;
        let a = transport.last();
        let _: Value = facade.related_blocking(target, 123, options.clone())?;
        assert_eq!(a, transport.last());
    }

    Ok(())
}

#[tokio::test]
async fn test_named_blocking_traversal_matches_async() -> anyhow::Result<()> {
    let (client, transport) = init_client();

    let _: Value = client.series().comics(42, QueryOptions::default()).await?;
    let a = transport.last();
    let _: Value = client
        .series()
        .comics_blocking(42, QueryOptions::default())?;

    assert_eq!(a, transport.last());
    assert_eq!(a.path(), "series/{id}/comics");
    Ok(())
}

#[tokio::test]
async fn test_transport_failure_is_observable() {
    let transport = RecordingTransport::failing();
    let client = Client::new(
        Context::new().with_transport(transport.clone()),
        marvelous::Credential::new("public", "private"),
    );

    let err = client.comics().find::<Value>(1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::QueryFailed);
    assert_eq!(
        err.source().map(|e| e.to_string()).as_deref(),
        Some("connection refused")
    );

    let err = client.comics().find_blocking::<Value>(1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::QueryFailed);

    // Both attempts reached the transport exactly once.
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() -> anyhow::Result<()> {
    let (client, transport) = init_client();

    let comics = client.comics();
    let events = client.events();
    let (a, b) = tokio::join!(comics.find::<Value>(1), events.find::<Value>(2));
    a?;
    b?;

    let mut paths: Vec<_> = transport
        .requests()
        .iter()
        .map(|r| r.resolved_path())
        .collect();
    paths.sort();
    assert_eq!(paths, vec!["comics/1", "events/2"]);
    Ok(())
}

#[derive(Debug, Deserialize, PartialEq)]
struct Envelope {
    code: u16,
    status: String,
}

#[tokio::test]
async fn test_typed_payload() -> anyhow::Result<()> {
    let (client, _) = init_client();

    let page: Envelope = client.stories().find(7).await?;
    assert_eq!(
        page,
        Envelope {
            code: 200,
            status: "Ok".to_string()
        }
    );

    let raw: Value = client.stories().find(7).await?;
    assert_eq!(raw, json!({"code": 200, "status": "Ok"}));
    Ok(())
}

#[tokio::test]
async fn test_payload_of_wrong_shape_fails() {
    let (client, _) = init_client();

    let err = client.stories().find::<Vec<u8>>(7).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::QueryFailed);
}

#[tokio::test]
async fn test_client_from_config() -> anyhow::Result<()> {
    let transport = RecordingTransport::new("{}");
    let ctx = Context::new()
        .with_transport(transport.clone())
        .with_env(StaticEnv {
            envs: HashMap::from([
                ("MARVEL_PUBLIC_KEY".to_string(), "env_public".to_string()),
                ("MARVEL_PRIVATE_KEY".to_string(), "env_private".to_string()),
                (
                    "MARVEL_ENDPOINT".to_string(),
                    "http://127.0.0.1:9000/v1/public/".to_string(),
                ),
            ]),
        });

    let config = Config::default().from_env(&ctx);
    let client = Client::from_config(ctx, config).with_time(signing_time());

    let _: Value = client.characters().find(1).await?;
    let req = transport.last();
    assert_eq!(transport.last_endpoint(), "http://127.0.0.1:9000/v1/public/");
    assert_eq!(
        req.to_uri(&transport.last_endpoint())?.to_string(),
        format!(
            "http://127.0.0.1:9000/v1/public/characters/1?limit=20&offset=0&ts=1646122354&apikey=env_public&hash={}",
            marvelous::hash::hex_md5(b"1646122354env_privateenv_public")
        )
    );
    Ok(())
}

#[tokio::test]
async fn test_missing_keys_fail_at_call_time() {
    let transport = RecordingTransport::new("{}");
    let ctx = Context::new().with_transport(transport.clone());
    let client = Client::from_config(ctx, Config::default());

    assert_eq!(client.executor().endpoint(), DEFAULT_ENDPOINT);

    let err = client
        .events()
        .find_all::<Value>(QueryOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert!(transport.requests().is_empty());
}

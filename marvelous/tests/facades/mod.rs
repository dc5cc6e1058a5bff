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

use marvelous::hash::hex_md5;
use marvelous::{ErrorKind, QueryOptions, ResourceKind};
use pretty_assertions::assert_eq;
use serde_json::Value;
use test_case::test_case;

use crate::{init_client, pairs};

fn thor_options(limit: u32, offset: u32) -> QueryOptions {
    QueryOptions::new()
        .with_limit(limit)
        .with_offset(offset)
        .with_filter("name", "Thor")
        .with_filter("orderBy", "modified")
}

#[test_case(ResourceKind::Characters, "characters"; "characters")]
#[test_case(ResourceKind::Comics, "comics"; "comics")]
#[test_case(ResourceKind::Creators, "creators"; "creators")]
#[test_case(ResourceKind::Events, "events"; "events")]
#[test_case(ResourceKind::Series, "series"; "series")]
#[test_case(ResourceKind::Stories, "stories"; "stories")]
#[tokio::test]
async fn test_find(kind: ResourceKind, segment: &str) -> anyhow::Result<()> {
    let (client, transport) = init_client();

    let _: Value = client.resource(kind).find(123).await?;
    let req = transport.last();

    assert_eq!(req.path(), format!("{segment}/{{id}}"));
    assert_eq!(req.url_segments(), pairs(&[("id", "123")]).as_slice());
    assert_eq!(
        req.query_keys(),
        vec!["limit", "offset", "ts", "apikey", "hash"]
    );
    assert_eq!(&req.query()[..2], pairs(&[("limit", "20"), ("offset", "0")]).as_slice());
    Ok(())
}

#[test_case(ResourceKind::Characters, "characters"; "characters")]
#[test_case(ResourceKind::Comics, "comics"; "comics")]
#[test_case(ResourceKind::Creators, "creators"; "creators")]
#[test_case(ResourceKind::Events, "events"; "events")]
#[test_case(ResourceKind::Series, "series"; "series")]
#[test_case(ResourceKind::Stories, "stories"; "stories")]
#[tokio::test]
async fn test_find_all_defaults(kind: ResourceKind, segment: &str) -> anyhow::Result<()> {
    let (client, transport) = init_client();

    let _: Value = client.resource(kind).find_all(QueryOptions::default()).await?;
    let req = transport.last();
    let hash = hex_md5(b"1646122354privatepublic");

    assert_eq!(req.path(), segment);
    assert!(req.url_segments().is_empty());
    assert_eq!(
        req.query(),
        pairs(&[
            ("limit", "20"),
            ("offset", "0"),
            ("ts", "1646122354"),
            ("apikey", "public"),
            ("hash", hash.as_str()),
        ])
        .as_slice()
    );
    Ok(())
}

#[test_case(ResourceKind::Characters, "characters"; "characters")]
#[test_case(ResourceKind::Comics, "comics"; "comics")]
#[test_case(ResourceKind::Creators, "creators"; "creators")]
#[test_case(ResourceKind::Events, "events"; "events")]
#[test_case(ResourceKind::Series, "series"; "series")]
#[test_case(ResourceKind::Stories, "stories"; "stories")]
#[tokio::test]
async fn test_find_all_with_filters(kind: ResourceKind, segment: &str) -> anyhow::Result<()> {
    let (client, transport) = init_client();

    let _: Value = client.resource(kind).find_all(thor_options(3, 4)).await?;
    let req = transport.last();

    assert_eq!(req.path(), segment);
    assert_eq!(
        req.query_keys(),
        vec!["name", "orderBy", "limit", "offset", "ts", "apikey", "hash"]
    );
    assert_eq!(
        &req.query()[..4],
        pairs(&[
            ("name", "Thor"),
            ("orderBy", "modified"),
            ("limit", "3"),
            ("offset", "4"),
        ])
        .as_slice()
    );
    Ok(())
}

#[tokio::test]
async fn test_related_covers_every_pair() -> anyhow::Result<()> {
    let (client, transport) = init_client();

    for kind in ResourceKind::ALL {
        for &target in kind.traversals() {
            let _: Value = client
                .resource(kind)
                .related(target, 123, thor_options(2, 3))
                .await?;
            let req = transport.last();

            assert_eq!(req.path(), format!("{kind}/{{id}}/{target}"));
            assert_eq!(req.url_segment("id"), Some("123"));
            assert_eq!(
                req.query_keys(),
                vec!["name", "orderBy", "limit", "offset", "ts", "apikey", "hash"]
            );
            assert_eq!(req.query()[2].1, "2");
            assert_eq!(req.query()[3].1, "3");
        }
    }

    assert_eq!(transport.requests().len(), 6 * 5);
    Ok(())
}

#[tokio::test]
async fn test_related_to_self_is_rejected() {
    let (client, transport) = init_client();

    for kind in ResourceKind::ALL {
        let err = client
            .resource(kind)
            .related::<Value>(kind, 123, QueryOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid, "{kind}");

        let err = client
            .resource(kind)
            .related_blocking::<Value>(kind, 123, QueryOptions::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid, "{kind}");
    }

    assert!(transport.requests().is_empty());
}

/// Call every named traversal of a facade and check the path it produced.
macro_rules! assert_named_traversals {
    ($client:expr, $transport:expr, $facade:ident, [$($method:ident => $target:literal),+]) => {{
        let facade = $client.$facade();
        $(
            let _: Value = facade.$method(123, thor_options(2, 3)).await?;
            let req = $transport.last();
            assert_eq!(
                req.path(),
                concat!(stringify!($facade), "/{id}/", $target)
            );
            assert_eq!(req.url_segment("id"), Some("123"));
            assert_eq!(req.query().len(), 7);
        )+
    }};
}

#[tokio::test]
async fn test_named_traversals() -> anyhow::Result<()> {
    let (client, transport) = init_client();

    assert_named_traversals!(client, transport, characters, [
        comics => "comics",
        creators => "creators",
        events => "events",
        series => "series",
        stories => "stories"
    ]);
    assert_named_traversals!(client, transport, comics, [
        characters => "characters",
        creators => "creators",
        events => "events",
        series => "series",
        stories => "stories"
    ]);
    assert_named_traversals!(client, transport, creators, [
        characters => "characters",
        comics => "comics",
        events => "events",
        series => "series",
        stories => "stories"
    ]);
    assert_named_traversals!(client, transport, events, [
        characters => "characters",
        comics => "comics",
        creators => "creators",
        series => "series",
        stories => "stories"
    ]);
    assert_named_traversals!(client, transport, series, [
        characters => "characters",
        comics => "comics",
        creators => "creators",
        events => "events",
        stories => "stories"
    ]);
    assert_named_traversals!(client, transport, stories, [
        characters => "characters",
        comics => "comics",
        creators => "creators",
        events => "events",
        series => "series"
    ]);

    assert_eq!(transport.requests().len(), 30);
    Ok(())
}

#[test]
fn test_duplicate_filters_are_kept() -> anyhow::Result<()> {
    let (client, transport) = init_client();

    let options = QueryOptions::new()
        .with_filter("orderBy", "name")
        .with_filter("orderBy", "-modified");
    let _: Value = client.creators().find_all_blocking(options)?;

    assert_eq!(
        &transport.last().query()[..2],
        pairs(&[("orderBy", "name"), ("orderBy", "-modified")]).as_slice()
    );
    Ok(())
}

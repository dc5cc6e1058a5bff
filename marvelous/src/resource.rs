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

//! Facades over the six catalog collections.

use std::ops::Deref;

use marvelous_core::{Executor, Query, QueryOptions, ResourceKind, Result};
use serde::de::DeserializeOwned;

/// Resource is the facade bound to one [`ResourceKind`].
///
/// It holds nothing but the kind and a shared executor. Every method builds a
/// fresh [`Query`] and hands it over.
#[derive(Clone, Debug)]
pub struct Resource {
    kind: ResourceKind,
    exec: Executor,
}

impl Resource {
    /// Bind `kind` to `exec`.
    pub fn new(kind: ResourceKind, exec: Executor) -> Self {
        Self { kind, exec }
    }

    /// The kind this facade is bound to.
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Fetch a single entity.
    pub async fn find<T: DeserializeOwned>(&self, id: u64) -> Result<T> {
        self.exec.query(&Query::entity(self.kind, id)).await
    }

    /// Blocking version of [`Resource::find`].
    pub fn find_blocking<T: DeserializeOwned>(&self, id: u64) -> Result<T> {
        self.exec.query_blocking(&Query::entity(self.kind, id))
    }

    /// Fetch a page of the whole collection.
    pub async fn find_all<T: DeserializeOwned>(&self, options: QueryOptions) -> Result<T> {
        self.exec
            .query(&Query::collection(self.kind, options))
            .await
    }

    /// Blocking version of [`Resource::find_all`].
    pub fn find_all_blocking<T: DeserializeOwned>(&self, options: QueryOptions) -> Result<T> {
        self.exec
            .query_blocking(&Query::collection(self.kind, options))
    }

    /// Fetch a page of `target` entities related to entity `id`.
    ///
    /// Fails with a `RequestInvalid` error if `target` is this facade's own kind.
    pub async fn related<T: DeserializeOwned>(
        &self,
        target: ResourceKind,
        id: u64,
        options: QueryOptions,
    ) -> Result<T> {
        let query = Query::related(self.kind, id, target, options)?;
        self.exec.query(&query).await
    }

    /// Blocking version of [`Resource::related`].
    pub fn related_blocking<T: DeserializeOwned>(
        &self,
        target: ResourceKind,
        id: u64,
        options: QueryOptions,
    ) -> Result<T> {
        let query = Query::related(self.kind, id, target, options)?;
        self.exec.query_blocking(&query)
    }
}

/// Declare a typed facade with one named traversal per listed target.
///
/// The target list only names the methods. Which traversals exist is decided
/// by [`ResourceKind::traversals`] in `marvelous-core`: every generated method
/// goes through [`Resource::related`], which rejects targets missing from that
/// table, and `TRAVERSALS` of each facade is checked against it in tests.
macro_rules! resource {
    (
        $(#[$meta:meta])*
        $name:ident($kind:ident) {
            $($target:ident => $method:ident, $blocking:ident;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name(Resource);

        impl $name {
            pub(crate) fn new(exec: Executor) -> Self {
                Self(Resource::new(ResourceKind::$kind, exec))
            }

            /// Kinds this facade has a named traversal for.
            pub const TRAVERSALS: &'static [ResourceKind] = &[$(ResourceKind::$target),+];

            $(
                #[doc = concat!(
                    "Fetch a page of `", stringify!($method),
                    "` related to entity `id`."
                )]
                pub async fn $method<T: DeserializeOwned>(
                    &self,
                    id: u64,
                    options: QueryOptions,
                ) -> Result<T> {
                    self.0.related(ResourceKind::$target, id, options).await
                }

                #[doc = concat!("Blocking version of `", stringify!($method), "`.")]
                pub fn $blocking<T: DeserializeOwned>(
                    &self,
                    id: u64,
                    options: QueryOptions,
                ) -> Result<T> {
                    self.0.related_blocking(ResourceKind::$target, id, options)
                }
            )+
        }

        impl Deref for $name {
            type Target = Resource;

            fn deref(&self) -> &Resource {
                &self.0
            }
        }
    };
}

resource! {
    /// Facade of `characters`.
    Characters(Characters) {
        Comics => comics, comics_blocking;
        Creators => creators, creators_blocking;
        Events => events, events_blocking;
        Series => series, series_blocking;
        Stories => stories, stories_blocking;
    }
}

resource! {
    /// Facade of `comics`.
    Comics(Comics) {
        Characters => characters, characters_blocking;
        Creators => creators, creators_blocking;
        Events => events, events_blocking;
        Series => series, series_blocking;
        Stories => stories, stories_blocking;
    }
}

resource! {
    /// Facade of `creators`.
    Creators(Creators) {
        Characters => characters, characters_blocking;
        Comics => comics, comics_blocking;
        Events => events, events_blocking;
        Series => series, series_blocking;
        Stories => stories, stories_blocking;
    }
}

resource! {
    /// Facade of `events`.
    Events(Events) {
        Characters => characters, characters_blocking;
        Comics => comics, comics_blocking;
        Creators => creators, creators_blocking;
        Series => series, series_blocking;
        Stories => stories, stories_blocking;
    }
}

resource! {
    /// Facade of `series`.
    Series(Series) {
        Characters => characters, characters_blocking;
        Comics => comics, comics_blocking;
        Creators => creators, creators_blocking;
        Events => events, events_blocking;
        Stories => stories, stories_blocking;
    }
}

resource! {
    /// Facade of `stories`.
    Stories(Stories) {
        Characters => characters, characters_blocking;
        Comics => comics, comics_blocking;
        Creators => creators, creators_blocking;
        Events => events, events_blocking;
        Series => series, series_blocking;
    }
}

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

use crate::{Error, ResourceKind, Result};

/// Default page size used by the catalog API.
pub const DEFAULT_LIMIT: u32 = 20;
/// Default page offset.
pub const DEFAULT_OFFSET: u32 = 0;

/// QueryOptions carries the caller tunable part of a query.
///
/// Defaults to `limit = 20`, `offset = 0` and no filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    /// Page size.
    pub limit: u32,
    /// Page offset.
    pub offset: u32,
    /// Filters in the order they will be sent. Repeated keys are kept.
    pub filters: Vec<(String, String)>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
            filters: Vec::new(),
        }
    }
}

impl QueryOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set limit
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set offset
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Append a filter, e.g. `name=Thor` or `orderBy=modified`.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    /// Append many filters keeping their order.
    pub fn with_filters<K, V>(mut self, filters: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.filters
            .extend(filters.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

/// Query is one logical call against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// The resource being queried.
    pub kind: ResourceKind,
    /// Entity id, set for single entity and traversal queries.
    pub id: Option<u64>,
    /// Target kind of a traversal query.
    pub related: Option<ResourceKind>,
    /// Pagination and filters.
    pub options: QueryOptions,
}

impl Query {
    /// Query the whole collection of `kind`.
    pub fn collection(kind: ResourceKind, options: QueryOptions) -> Self {
        Self {
            kind,
            id: None,
            related: None,
            options,
        }
    }

    /// Query a single entity with default options.
    pub fn entity(kind: ResourceKind, id: u64) -> Self {
        Self {
            kind,
            id: Some(id),
            related: None,
            options: QueryOptions::default(),
        }
    }

    /// Query entities of `target` related to entity `id` of `kind`.
    ///
    /// Returns an error if `kind` can't be traversed to `target`.
    pub fn related(
        kind: ResourceKind,
        id: u64,
        target: ResourceKind,
        options: QueryOptions,
    ) -> Result<Self> {
        if !kind.can_traverse(target) {
            return Err(Error::request_invalid(format!(
                "{kind} can't be traversed to {target}"
            )));
        }

        Ok(Self {
            kind,
            id: Some(id),
            related: Some(target),
            options,
        })
    }
}

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

use std::fmt::{Debug, Formatter};
use std::str::FromStr;

use bytes::Bytes;
use http::Method;
use http::Uri;
use percent_encoding::utf8_percent_encode;
use percent_encoding::NON_ALPHANUMERIC;

use crate::query::{Query, QueryOptions};
use crate::signature::Signature;
use crate::time::DateTime;
use crate::utils::redact_query;
use crate::{Credential, Error, ResourceKind, Result};

/// Name of the url segment carrying the entity id.
pub const ID_SEGMENT: &str = "id";

/// RequestDescriptor is the fully composed, transport agnostic form of one call.
///
/// - `path` is a template relative to the endpoint, e.g. `comics/{id}/characters`.
/// - `url_segments` fills the `{name}` placeholders of `path`.
/// - `query` is ordered: filters, `limit`, `offset`, `ts`, `apikey`, `hash`.
///
/// A descriptor is built fresh for every call and never modified afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    path: String,
    url_segments: Vec<(String, String)>,
    query: Vec<(String, String)>,
}

impl RequestDescriptor {
    /// Build the descriptor of `query`, signed with `cred` at `now`.
    pub fn build(query: &Query, cred: &Credential, now: DateTime) -> Result<Self> {
        cred.check()?;
        if let Some(target) = query.related {
            if query.id.is_none() {
                return Err(Error::request_invalid(
                    "traversal query requires an entity id",
                ));
            }
            if !query.kind.can_traverse(target) {
                return Err(Error::request_invalid(format!(
                    "{} can't be traversed to {target}",
                    query.kind
                )));
            }
        }

        let signature = Signature::sign(cred, now)?;

        Ok(Self {
            path: path_template(query.kind, query.id.map(|_| query.related)),
            url_segments: query
                .id
                .map(|id| vec![(ID_SEGMENT.to_string(), id.to_string())])
                .unwrap_or_default(),
            query: compose_query(&query.options, signature, cred),
        })
    }

    /// The path template, with `{id}` left in place.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Url segment substitutions.
    pub fn url_segments(&self) -> &[(String, String)] {
        &self.url_segments
    }

    /// Get a url segment value by name.
    pub fn url_segment(&self, name: &str) -> Option<&str> {
        self.url_segments
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Ordered query parameters.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Query keys in order, handy for asserting the wire layout.
    pub fn query_keys(&self) -> Vec<&str> {
        self.query.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Path with every placeholder replaced by its percent encoded value.
    pub fn resolved_path(&self) -> String {
        let mut path = self.path.clone();
        for (name, value) in &self.url_segments {
            let placeholder = format!("{{{name}}}");
            let value = utf8_percent_encode(value, NON_ALPHANUMERIC).to_string();
            path = path.replace(&placeholder, &value);
        }
        path
    }

    /// Resolve the full uri against `endpoint`, e.g. `http://gateway.marvel.com/v1/public/`.
    pub fn to_uri(&self, endpoint: &str) -> Result<Uri> {
        let base = Uri::from_str(endpoint).map_err(|e| {
            Error::config_invalid(format!("endpoint {endpoint} is not a valid uri")).with_source(e)
        })?;
        if base.scheme().is_none() || base.authority().is_none() {
            return Err(Error::config_invalid(format!(
                "endpoint {endpoint} must be absolute"
            )));
        }

        let mut s = String::with_capacity(endpoint.len() + self.path.len() + 128);
        s.push_str(endpoint.trim_end_matches('/'));
        s.push('/');
        s.push_str(&self.resolved_path());

        if !self.query.is_empty() {
            s.push('?');
            s.push_str(
                &form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(&self.query)
                    .finish(),
            );
        }

        Ok(Uri::from_str(&s)?)
    }

    /// Build a `GET` request for `endpoint`.
    pub fn to_http_request(&self, endpoint: &str) -> Result<http::Request<Bytes>> {
        Ok(http::Request::builder()
            .method(Method::GET)
            .uri(self.to_uri(endpoint)?)
            .header(http::header::ACCEPT, "application/json")
            .body(Bytes::new())?)
    }
}

impl Debug for RequestDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestDescriptor")
            .field("path", &self.path)
            .field("url_segments", &self.url_segments)
            .field("query", &redact_query(&self.query))
            .finish()
    }
}

/// Build the path template for `kind`.
///
/// - `None`: `<segment>`
/// - `Some(None)`: `<segment>/{id}`
/// - `Some(Some(related))`: `<segment>/{id}/<related segment>`
pub fn path_template(kind: ResourceKind, id: Option<Option<ResourceKind>>) -> String {
    match id {
        None => kind.segment().to_string(),
        Some(None) => format!("{}/{{{ID_SEGMENT}}}", kind.segment()),
        Some(Some(related)) => format!(
            "{}/{{{ID_SEGMENT}}}/{}",
            kind.segment(),
            related.segment()
        ),
    }
}

/// Compose the ordered query: filters, `limit`, `offset`, then the signature.
pub fn compose_query(
    options: &QueryOptions,
    signature: Signature,
    cred: &Credential,
) -> Vec<(String, String)> {
    let mut query = Vec::with_capacity(options.filters.len() + 5);
    query.extend(options.filters.iter().cloned());
    query.push(("limit".to_string(), options.limit.to_string()));
    query.push(("offset".to_string(), options.offset.to_string()));
    query.extend(signature.into_query(cred));
    query
}

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

use std::fmt::{Display, Formatter};

/// ResourceKind is one of the six top level catalog collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// `characters`
    Characters,
    /// `comics`
    Comics,
    /// `creators`
    Creators,
    /// `events`
    Events,
    /// `series`
    Series,
    /// `stories`
    Stories,
}

/// Which kinds each kind may be traversed to.
///
/// This is the only place that decides traversal. A kind never lists itself.
const TRAVERSALS: [(ResourceKind, [ResourceKind; 5]); 6] = {
    use ResourceKind::*;
    [
        (Characters, [Comics, Creators, Events, Series, Stories]),
        (Comics, [Characters, Creators, Events, Series, Stories]),
        (Creators, [Characters, Comics, Events, Series, Stories]),
        (Events, [Characters, Comics, Creators, Series, Stories]),
        (Series, [Characters, Comics, Creators, Events, Stories]),
        (Stories, [Characters, Comics, Creators, Events, Series]),
    ]
};

impl ResourceKind {
    /// All kinds in declaration order.
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Characters,
        ResourceKind::Comics,
        ResourceKind::Creators,
        ResourceKind::Events,
        ResourceKind::Series,
        ResourceKind::Stories,
    ];

    /// The lowercase path segment of this kind.
    pub const fn segment(self) -> &'static str {
        match self {
            ResourceKind::Characters => "characters",
            ResourceKind::Comics => "comics",
            ResourceKind::Creators => "creators",
            ResourceKind::Events => "events",
            ResourceKind::Series => "series",
            ResourceKind::Stories => "stories",
        }
    }

    /// Kinds reachable from an entity of this kind.
    pub fn traversals(self) -> &'static [ResourceKind] {
        TRAVERSALS
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, targets)| targets.as_slice())
            .unwrap_or_default()
    }

    /// Check if `target` is reachable from an entity of this kind.
    pub fn can_traverse(self, target: ResourceKind) -> bool {
        self.traversals().contains(&target)
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.segment())
    }
}

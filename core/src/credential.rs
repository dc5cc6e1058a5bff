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

use crate::utils::Redact;
use crate::{Error, Result};

/// Credential holds the key pair issued by the catalog developer portal.
///
/// A credential is set once at client construction and never changes. Its
/// `Debug` output is redacted and it is deliberately not serializable.
#[derive(Clone)]
pub struct Credential {
    public_key: String,
    private_key: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    /// The public key, sent as `apikey` with every request.
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// The private key, only ever used as signing material.
    pub(crate) fn private_key(&self) -> &str {
        &self.private_key
    }

    /// Check if both keys are present.
    pub fn is_valid(&self) -> bool {
        !self.public_key.is_empty() && !self.private_key.is_empty()
    }

    /// Return an error if this credential can't sign requests.
    pub fn check(&self) -> Result<()> {
        if self.is_valid() {
            return Ok(());
        }

        match (self.public_key.is_empty(), self.private_key.is_empty()) {
            (true, true) => Err(Error::config_invalid("public and private key are missing")),
            (true, false) => Err(Error::config_invalid("public key is missing")),
            _ => Err(Error::config_invalid("private key is missing")),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("public_key", &Redact::from(&self.public_key))
            .field("private_key", &Redact::full(&self.private_key))
            .finish()
    }
}

// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::{DomainObject, Kind, Metadata, ProjectNamespaceRole};
use crate::shared::error::Result;
use serde::{Deserialize, Serialize};

/// An account in the organization. `metadata.name` holds the email address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub metadata: Metadata,
    #[serde(default)]
    pub spec: UserSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSpec {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub project_namespace_roles: Vec<ProjectNamespaceRole>,
}

impl User {
    pub fn email(&self) -> &str {
        &self.metadata.name
    }

    pub fn from_object(object: DomainObject) -> Result<Self> {
        match object {
            DomainObject::User(user) => Ok(user),
            other => Err(DomainObject::unexpected(Kind::User, &other)),
        }
    }
}

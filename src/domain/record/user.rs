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

use super::{ProjectRoleRecord, StructMapper};
use crate::domain::resource::{Metadata, User, UserSpec};
use serde::{Deserialize, Serialize};

/// Flat view of a user returned by a users query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub groups: Vec<String>,
    pub roles: Vec<ProjectRoleRecord>,
}

impl StructMapper for UserRecord {
    type Object = User;

    fn to_domain(&self) -> User {
        User {
            metadata: Metadata::named(self.email.clone()),
            spec: UserSpec {
                first_name: self.first_name.clone(),
                last_name: self.last_name.clone(),
                phone: self.phone.clone(),
                groups: self.groups.clone(),
                project_namespace_roles: self.roles.iter().map(ProjectRoleRecord::to_domain).collect(),
            },
        }
    }

    fn from_domain(user: &User) -> Self {
        Self {
            email: user.metadata.name.clone(),
            first_name: user.spec.first_name.clone(),
            last_name: user.spec.last_name.clone(),
            phone: user.spec.phone.clone(),
            groups: user.spec.groups.clone(),
            roles: user
                .spec
                .project_namespace_roles
                .iter()
                .map(ProjectRoleRecord::from_domain)
                .collect(),
        }
    }
}

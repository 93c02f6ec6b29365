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

use super::{require, StructMapper, Validate};
use crate::domain::resource::{Group, GroupSpec, Kind, Metadata, ProjectNamespaceRole};
use crate::shared::error::{ReconcileError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,
    /// Member emails, in declared order.
    pub users: Vec<String>,
    pub project_roles: Vec<ProjectRoleRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRoleRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub role: String,
}

impl ProjectRoleRecord {
    pub(crate) fn to_domain(&self) -> ProjectNamespaceRole {
        ProjectNamespaceRole {
            project: self.project.clone(),
            namespace: self.namespace.clone(),
            role: self.role.clone(),
        }
    }

    pub(crate) fn from_domain(role: &ProjectNamespaceRole) -> Self {
        Self {
            project: role.project.clone(),
            namespace: role.namespace.clone(),
            role: role.role.clone(),
        }
    }
}

impl Validate for GroupRecord {
    fn validate(&self) -> Result<()> {
        require("name", &self.name, Kind::Group)?;

        for (idx, role) in self.project_roles.iter().enumerate() {
            if role.role.trim().is_empty() {
                return Err(ReconcileError::validation(format!(
                    "group '{}' project_roles[{}] has an empty role",
                    self.name, idx
                )));
            }
            if role.namespace.is_some() && role.project.is_none() {
                return Err(ReconcileError::validation(format!(
                    "group '{}' project_roles[{}] names a namespace without a project",
                    self.name, idx
                )));
            }
        }

        if let Some(user) = self.users.iter().find(|u| u.trim().is_empty()) {
            return Err(ReconcileError::validation(format!(
                "group '{}' lists an empty user name '{}'",
                self.name, user
            )));
        }

        Ok(())
    }
}

impl StructMapper for GroupRecord {
    type Object = Group;

    fn to_domain(&self) -> Group {
        Group {
            metadata: Metadata {
                name: self.name.clone(),
                description: self.description.clone(),
                labels: self.labels.clone(),
                annotations: self.annotations.clone(),
                ..Default::default()
            },
            spec: GroupSpec {
                group_type: self.group_type.clone(),
                users: self.users.clone(),
                project_namespace_roles: self
                    .project_roles
                    .iter()
                    .map(ProjectRoleRecord::to_domain)
                    .collect(),
            },
        }
    }

    fn from_domain(group: &Group) -> Self {
        Self {
            name: group.metadata.name.clone(),
            description: group.metadata.description.clone(),
            labels: group.metadata.labels.clone(),
            annotations: group.metadata.annotations.clone(),
            group_type: group.spec.group_type.clone(),
            users: group.spec.users.clone(),
            project_roles: group
                .spec
                .project_namespace_roles
                .iter()
                .map(ProjectRoleRecord::from_domain)
                .collect(),
        }
    }
}

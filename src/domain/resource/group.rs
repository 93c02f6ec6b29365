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

use super::{DomainObject, Kind, Metadata};
use crate::domain::reconcile::{Dependency, ManagedResource};
use crate::domain::record::GroupRecord;
use crate::shared::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub metadata: Metadata,
    pub spec: GroupSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSpec {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(default)]
    pub project_namespace_roles: Vec<ProjectNamespaceRole>,
}

/// Role binding on a project, optionally narrowed to one namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectNamespaceRole {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub role: String,
}

impl ManagedResource for Group {
    const KIND: Kind = Kind::Group;

    type Record = GroupRecord;

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    // Projects first, then users, each in declared order.
    fn dependencies(&self) -> Vec<Dependency> {
        let projects = self
            .spec
            .project_namespace_roles
            .iter()
            .filter_map(|r| r.project.clone())
            .map(Dependency::Project);
        let users = self.spec.users.iter().cloned().map(Dependency::User);
        projects.chain(users).collect()
    }

    fn into_object(self) -> DomainObject {
        DomainObject::Group(self)
    }

    fn from_object(object: DomainObject) -> Result<Self> {
        match object {
            DomainObject::Group(group) => Ok(group),
            other => Err(DomainObject::unexpected(Kind::Group, &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependencies_follow_declared_order() {
        let group = Group {
            metadata: Metadata::named("admins"),
            spec: GroupSpec {
                group_type: None,
                users: vec!["bob@example.com".to_string(), "ann@example.com".to_string()],
                project_namespace_roles: vec![
                    ProjectNamespaceRole {
                        project: Some("beta".to_string()),
                        namespace: None,
                        role: "PROJECT_ADMIN".to_string(),
                    },
                    ProjectNamespaceRole {
                        project: None,
                        namespace: None,
                        role: "ADMIN".to_string(),
                    },
                    ProjectNamespaceRole {
                        project: Some("alpha".to_string()),
                        namespace: Some("ns1".to_string()),
                        role: "NAMESPACE_READ_ONLY".to_string(),
                    },
                ],
            },
        };

        assert_eq!(
            group.dependencies(),
            vec![
                Dependency::Project("beta".to_string()),
                Dependency::Project("alpha".to_string()),
                Dependency::User("bob@example.com".to_string()),
                Dependency::User("ann@example.com".to_string()),
            ]
        );
    }
}

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

use super::{require_dns_label, StructMapper, Validate};
use crate::domain::resource::{Kind, Metadata, Project, ProjectSpec};
use crate::shared::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    pub default: bool,
}

impl Validate for ProjectRecord {
    fn validate(&self) -> Result<()> {
        require_dns_label("name", &self.name, Kind::Project)
    }
}

impl StructMapper for ProjectRecord {
    type Object = Project;

    fn to_domain(&self) -> Project {
        Project {
            metadata: Metadata {
                name: self.name.clone(),
                description: self.description.clone(),
                labels: self.labels.clone(),
                annotations: self.annotations.clone(),
                ..Default::default()
            },
            spec: ProjectSpec {
                default: self.default,
            },
        }
    }

    fn from_domain(project: &Project) -> Self {
        Self {
            name: project.metadata.name.clone(),
            description: project.metadata.description.clone(),
            labels: project.metadata.labels.clone(),
            annotations: project.metadata.annotations.clone(),
            default: project.spec.default,
        }
    }
}

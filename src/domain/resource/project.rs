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
use crate::domain::record::ProjectRecord;
use crate::shared::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub metadata: Metadata,
    #[serde(default)]
    pub spec: ProjectSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSpec {
    #[serde(default)]
    pub default: bool,
}

impl ManagedResource for Project {
    const KIND: Kind = Kind::Project;

    type Record = ProjectRecord;

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn dependencies(&self) -> Vec<Dependency> {
        Vec::new()
    }

    fn into_object(self) -> DomainObject {
        DomainObject::Project(self)
    }

    fn from_object(object: DomainObject) -> Result<Self> {
        match object {
            DomainObject::Project(project) => Ok(project),
            other => Err(DomainObject::unexpected(Kind::Project, &other)),
        }
    }
}

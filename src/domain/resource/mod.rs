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

//! Nested representations of remote resources as the management API models them.

pub mod artifact;
pub mod cluster;
pub mod group;
pub mod identity;
pub mod project;
pub mod user;

pub use self::artifact::{BootstrapRequest, KubeconfigRequest};
pub use self::cluster::{Cluster, ClusterParams, ClusterSpec, ProxyConfig};
pub use self::group::{Group, GroupSpec, ProjectNamespaceRole};
pub use self::identity::Identity;
pub use self::project::{Project, ProjectSpec};
pub use self::user::{User, UserSpec};

use crate::shared::error::{ReconcileError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Cluster,
    Group,
    Project,
    User,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Cluster => "cluster",
            Kind::Group => "group",
            Kind::Project => "project",
            Kind::User => "user",
        }
    }

    /// Clusters live inside a project; everything else is organization scoped.
    pub fn is_project_scoped(&self) -> bool {
        matches!(self, Kind::Cluster)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Kind {
    type Err = ReconcileError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "cluster" => Ok(Kind::Cluster),
            "group" => Ok(Kind::Group),
            "project" => Ok(Kind::Project),
            "user" => Ok(Kind::User),
            _ => Err(ReconcileError::validation(format!(
                "Unknown resource kind: {}",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    /// Server assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Server assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Metadata {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Any object the management API hands back or accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainObject {
    Cluster(Cluster),
    Group(Group),
    Project(Project),
    User(User),
}

impl DomainObject {
    pub fn kind(&self) -> Kind {
        match self {
            DomainObject::Cluster(_) => Kind::Cluster,
            DomainObject::Group(_) => Kind::Group,
            DomainObject::Project(_) => Kind::Project,
            DomainObject::User(_) => Kind::User,
        }
    }

    pub fn metadata(&self) -> &Metadata {
        match self {
            DomainObject::Cluster(c) => &c.metadata,
            DomainObject::Group(g) => &g.metadata,
            DomainObject::Project(p) => &p.metadata,
            DomainObject::User(u) => &u.metadata,
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata().name
    }

    pub fn project(&self) -> &str {
        self.metadata().project.as_deref().unwrap_or_default()
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        let value = match self {
            DomainObject::Cluster(c) => serde_json::to_value(c)?,
            DomainObject::Group(g) => serde_json::to_value(g)?,
            DomainObject::Project(p) => serde_json::to_value(p)?,
            DomainObject::User(u) => serde_json::to_value(u)?,
        };
        Ok(value)
    }

    pub fn from_json(kind: Kind, value: serde_json::Value) -> Result<Self> {
        let object = match kind {
            Kind::Cluster => DomainObject::Cluster(serde_json::from_value(value)?),
            Kind::Group => DomainObject::Group(serde_json::from_value(value)?),
            Kind::Project => DomainObject::Project(serde_json::from_value(value)?),
            Kind::User => DomainObject::User(serde_json::from_value(value)?),
        };
        Ok(object)
    }

    pub(crate) fn unexpected(expected: Kind, got: &DomainObject) -> ReconcileError {
        ReconcileError::Api(format!(
            "expected a {} object from the remote API, got a {}",
            expected,
            got.kind()
        ))
    }
}

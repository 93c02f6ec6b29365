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
use crate::domain::record::ClusterRecord;
use crate::infrastructure::constants::CLUSTER_TYPE_IMPORTED;
use crate::shared::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub metadata: Metadata,
    pub spec: ClusterSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub cluster_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blueprint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blueprint_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<ClusterParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_config: Option<ProxyConfig>,
}

/// Provisioning parameters. Fixed once the cluster exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provision_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubernetes_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provision_environment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_proxy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub https_proxy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_proxy: Option<String>,
}

impl Cluster {
    pub fn is_imported(&self) -> bool {
        self.spec
            .cluster_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case(CLUSTER_TYPE_IMPORTED))
    }
}

impl ManagedResource for Cluster {
    const KIND: Kind = Kind::Cluster;

    type Record = ClusterRecord;

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn dependencies(&self) -> Vec<Dependency> {
        self.metadata
            .project
            .iter()
            .map(|p| Dependency::Project(p.clone()))
            .collect()
    }

    fn strip_immutable(&mut self) {
        self.spec.cluster_type = None;
        self.spec.params = None;
    }

    fn into_object(self) -> DomainObject {
        DomainObject::Cluster(self)
    }

    fn from_object(object: DomainObject) -> Result<Self> {
        match object {
            DomainObject::Cluster(cluster) => Ok(cluster),
            other => Err(DomainObject::unexpected(Kind::Cluster, &other)),
        }
    }
}

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

use super::{non_empty, require, require_dns_label, StructMapper, Validate};
use crate::domain::resource::{Cluster, ClusterParams, ClusterSpec, Kind, Metadata, ProxyConfig};
use crate::shared::error::{ReconcileError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterRecord {
    pub name: String,
    pub project: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    pub cluster_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blueprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blueprint_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Modeled as a set by the API; at most one element.
    pub params: Vec<ClusterParamsRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_config: Option<ProxyConfigRecord>,
    /// Computed: bootstrap manifest of an imported cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bootstrap_data: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterParamsRecord {
    pub provision_type: Option<String>,
    pub kubernetes_provider: Option<String>,
    pub state: Option<String>,
    pub environment_provider: Option<String>,
    pub provision_environment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfigRecord {
    pub enabled: bool,
    pub http_proxy: Option<String>,
    pub https_proxy: Option<String>,
    pub no_proxy: Option<String>,
}

impl Validate for ClusterRecord {
    fn validate(&self) -> Result<()> {
        require_dns_label("name", &self.name, Kind::Cluster)?;
        require("project", &self.project, Kind::Cluster)?;
        require("cluster_type", &self.cluster_type, Kind::Cluster)?;

        if self.params.len() > 1 {
            return Err(ReconcileError::validation(format!(
                "cluster '{}' declares {} params blocks, at most one is allowed",
                self.name,
                self.params.len()
            )));
        }

        Ok(())
    }
}

impl StructMapper for ClusterRecord {
    type Object = Cluster;

    fn to_domain(&self) -> Cluster {
        if self.params.len() > 1 {
            warn!(cluster = %self.name, "ignoring params beyond the first element");
        }

        Cluster {
            metadata: Metadata {
                name: self.name.clone(),
                description: self.description.clone(),
                project: non_empty(&self.project),
                labels: self.labels.clone(),
                annotations: self.annotations.clone(),
                ..Default::default()
            },
            spec: ClusterSpec {
                cluster_type: non_empty(&self.cluster_type),
                blueprint: self.blueprint.clone(),
                blueprint_version: self.blueprint_version.clone(),
                location: self.location.clone(),
                params: self.params.first().map(|p| ClusterParams {
                    provision_type: p.provision_type.clone(),
                    kubernetes_provider: p.kubernetes_provider.clone(),
                    state: p.state.clone(),
                    environment_provider: p.environment_provider.clone(),
                    provision_environment: p.provision_environment.clone(),
                }),
                proxy_config: self.proxy_config.as_ref().map(|p| ProxyConfig {
                    enabled: p.enabled,
                    http_proxy: p.http_proxy.clone(),
                    https_proxy: p.https_proxy.clone(),
                    no_proxy: p.no_proxy.clone(),
                }),
            },
        }
    }

    fn from_domain(cluster: &Cluster) -> Self {
        let spec = &cluster.spec;
        Self {
            name: cluster.metadata.name.clone(),
            project: cluster.metadata.project.clone().unwrap_or_default(),
            description: cluster.metadata.description.clone(),
            labels: cluster.metadata.labels.clone(),
            annotations: cluster.metadata.annotations.clone(),
            cluster_type: spec.cluster_type.clone().unwrap_or_default(),
            blueprint: spec.blueprint.clone(),
            blueprint_version: spec.blueprint_version.clone(),
            location: spec.location.clone(),
            params: spec
                .params
                .iter()
                .map(|p| ClusterParamsRecord {
                    provision_type: p.provision_type.clone(),
                    kubernetes_provider: p.kubernetes_provider.clone(),
                    state: p.state.clone(),
                    environment_provider: p.environment_provider.clone(),
                    provision_environment: p.provision_environment.clone(),
                })
                .collect(),
            proxy_config: spec.proxy_config.as_ref().map(|p| ProxyConfigRecord {
                enabled: p.enabled,
                http_proxy: p.http_proxy.clone(),
                https_proxy: p.https_proxy.clone(),
                no_proxy: p.no_proxy.clone(),
            }),
            bootstrap_data: None,
        }
    }
}

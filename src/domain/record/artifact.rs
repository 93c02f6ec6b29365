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
use crate::domain::resource::{BootstrapRequest, Kind, KubeconfigRequest};
use crate::shared::error::{ReconcileError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KubeconfigRecord {
    pub cluster: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_folder_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Computed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kubeconfig: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapFileRecord {
    pub name: String,
    pub project: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    /// Computed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bootstrap_data: Option<String>,
}

impl Validate for KubeconfigRecord {
    fn validate(&self) -> Result<()> {
        if self.cluster.trim().is_empty() {
            return Err(ReconcileError::validation(
                "kubeconfig cluster must not be empty",
            ));
        }
        if let Some(filename) = &self.filename {
            if filename.contains('/') || filename.contains('\\') {
                return Err(ReconcileError::validation(format!(
                    "kubeconfig filename '{}' must not contain a path separator",
                    filename
                )));
            }
        }
        Ok(())
    }
}

impl Validate for BootstrapFileRecord {
    fn validate(&self) -> Result<()> {
        require("name", &self.name, Kind::Cluster)?;
        require("project", &self.project, Kind::Cluster)
    }
}

impl StructMapper for KubeconfigRecord {
    type Object = KubeconfigRequest;

    fn to_domain(&self) -> KubeconfigRequest {
        KubeconfigRequest {
            cluster: self.cluster.clone(),
            namespace: self.namespace.clone(),
        }
    }

    fn from_domain(request: &KubeconfigRequest) -> Self {
        Self {
            cluster: request.cluster.clone(),
            namespace: request.namespace.clone(),
            ..Default::default()
        }
    }
}

impl StructMapper for BootstrapFileRecord {
    type Object = BootstrapRequest;

    fn to_domain(&self) -> BootstrapRequest {
        BootstrapRequest {
            name: self.name.clone(),
            project: self.project.clone(),
        }
    }

    fn from_domain(request: &BootstrapRequest) -> Self {
        Self {
            name: request.name.clone(),
            project: request.project.clone(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kubeconfig_request_mapping() {
        let record = KubeconfigRecord {
            cluster: "test".to_string(),
            namespace: Some("web".to_string()),
            output_folder_path: Some("/tmp/out".to_string()),
            ..Default::default()
        };
        let request = record.to_domain();
        assert_eq!(request.cluster, "test");
        assert_eq!(request.namespace.as_deref(), Some("web"));
        assert_eq!(KubeconfigRecord::from_domain(&request).to_domain(), request);
    }

    #[test]
    fn test_artifact_validation() {
        assert!(KubeconfigRecord::default().validate().is_err());
        let record = KubeconfigRecord {
            cluster: "test".to_string(),
            filename: Some("../evil".to_string()),
            ..Default::default()
        };
        assert!(record.validate().is_err());

        let record = BootstrapFileRecord {
            name: "test".to_string(),
            ..Default::default()
        };
        assert!(record.validate().is_err());
    }
}

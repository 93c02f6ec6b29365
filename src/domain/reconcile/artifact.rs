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

use crate::domain::record::{BootstrapFileRecord, KubeconfigRecord, StructMapper, Validate};
use crate::infrastructure::client::ManagementClient;
use crate::infrastructure::constants::{
    BOOTSTRAP_FILE_SUFFIX, KUBECONFIG_FILE_PREFIX, KUBECONFIG_FILE_SUFFIX,
};
use crate::shared::error::{ReconcileError, Result};
use kube::config::Kubeconfig;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Single-shot reads of the kubeconfig and bootstrap artifacts.
pub struct ArtifactDescriptor {
    client: Arc<dyn ManagementClient>,
}

impl ArtifactDescriptor {
    pub fn new(client: Arc<dyn ManagementClient>) -> Self {
        Self { client }
    }

    pub async fn read_kubeconfig(&self, record: &KubeconfigRecord) -> Result<KubeconfigRecord> {
        record.validate()?;
        let request = record.to_domain();

        let text = self
            .client
            .fetch_kubeconfig(&request)
            .await
            .map_err(|e| e.with_context("fetch kubeconfig for", "cluster", &request.cluster))?;

        let parsed = Kubeconfig::from_yaml(&text)?;
        if parsed.clusters.is_empty() {
            return Err(ReconcileError::Kubeconfig(format!(
                "kubeconfig for cluster '{}' defines no clusters",
                request.cluster
            )));
        }
        debug!(
            cluster = %request.cluster,
            context = parsed.current_context.as_deref().unwrap_or_default(),
            "kubeconfig fetched"
        );

        let mut out = KubeconfigRecord::from_domain(&request);
        out.output_folder_path = record.output_folder_path.clone();
        out.filename = record.filename.clone();

        if let Some(folder) = &record.output_folder_path {
            let filename = record.filename.clone().unwrap_or_else(|| {
                format!(
                    "{}{}{}",
                    KUBECONFIG_FILE_PREFIX, request.cluster, KUBECONFIG_FILE_SUFFIX
                )
            });
            write_artifact(&Path::new(folder).join(filename), &text).await?;
        }

        out.kubeconfig = Some(text);
        Ok(out)
    }

    pub async fn read_bootstrap(&self, record: &BootstrapFileRecord) -> Result<BootstrapFileRecord> {
        record.validate()?;
        let request = record.to_domain();

        let data = self
            .client
            .fetch_bootstrap(&request)
            .await
            .map_err(|e| {
                e.with_context(
                    "fetch bootstrap for",
                    "cluster",
                    format!("{}:{}", request.project, request.name),
                )
            })?;

        let mut out = BootstrapFileRecord::from_domain(&request);
        out.output_path = record.output_path.clone();

        if let Some(output) = &record.output_path {
            let mut path = PathBuf::from(output);
            if path.is_dir() {
                path.push(format!("{}{}", request.name, BOOTSTRAP_FILE_SUFFIX));
            }
            write_artifact(&path, &data).await?;
        }

        out.bootstrap_data = Some(data);
        Ok(out)
    }
}

async fn write_artifact(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, content).await?;
    info!(path = %path.display(), "artifact written");
    Ok(())
}

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

use super::controller::Reconciler;
use super::outcome::{Applied, Diagnostic, Observed};
use crate::domain::record::{ClusterRecord, StructMapper};
use crate::domain::resource::{BootstrapRequest, Cluster, Identity};
use crate::infrastructure::client::ManagementClient;
use crate::shared::error::Result;
use std::sync::Arc;
use tracing::warn;

/// Cluster lifecycle. Every result for an imported cluster also carries its
/// bootstrap manifest; that fetch can fail without failing the operation.
pub struct ClusterDescriptor {
    reconciler: Reconciler<Cluster>,
}

impl ClusterDescriptor {
    pub fn new(client: Arc<dyn ManagementClient>) -> Self {
        Self {
            reconciler: Reconciler::new(client),
        }
    }

    pub async fn create(&self, record: &ClusterRecord) -> Result<Applied<ClusterRecord>> {
        let applied = self.reconciler.create(record).await?;
        Ok(self.with_bootstrap_applied(applied).await)
    }

    pub async fn read(&self, identity: &Identity) -> Result<Observed<ClusterRecord>> {
        let mut observed = self.reconciler.read(identity).await?;
        if let (Some(record), Some(identity)) = (observed.record.as_mut(), observed.identity.as_ref()) {
            self.attach_bootstrap(record, identity, &mut observed.diagnostics)
                .await;
        }
        Ok(observed)
    }

    /// Cluster type and provisioning params are never sent on update.
    pub async fn update(
        &self,
        identity: &Identity,
        record: &ClusterRecord,
    ) -> Result<Applied<ClusterRecord>> {
        let applied = self.reconciler.update(identity, record).await?;
        Ok(self.with_bootstrap_applied(applied).await)
    }

    pub async fn delete(&self, identity: &Identity) -> Result<()> {
        self.reconciler.delete(identity).await
    }

    pub async fn import(&self, raw_identity: &str) -> Result<Applied<ClusterRecord>> {
        let applied = self.reconciler.import(raw_identity).await?;
        Ok(self.with_bootstrap_applied(applied).await)
    }

    async fn with_bootstrap_applied(
        &self,
        mut applied: Applied<ClusterRecord>,
    ) -> Applied<ClusterRecord> {
        self.attach_bootstrap(&mut applied.record, &applied.identity, &mut applied.diagnostics)
            .await;
        applied
    }

    /// Best effort: a failed fetch leaves `bootstrap_data` empty and adds a warning.
    async fn attach_bootstrap(
        &self,
        record: &mut ClusterRecord,
        identity: &Identity,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        if !record.to_domain().is_imported() {
            return;
        }

        let request = BootstrapRequest {
            name: identity.name.clone(),
            project: identity.project_or_empty().to_string(),
        };
        match self.reconciler.client().fetch_bootstrap(&request).await {
            Ok(data) => record.bootstrap_data = Some(data),
            Err(e) => {
                let e = e.with_context("fetch bootstrap for", "cluster", identity);
                warn!(%identity, error = %e, "bootstrap fetch failed");
                diagnostics.push(Diagnostic::warning(
                    format!(
                        "the bootstrap file of cluster '{}' could not be fetched",
                        identity
                    ),
                    e.to_string(),
                ));
            }
        }
    }
}

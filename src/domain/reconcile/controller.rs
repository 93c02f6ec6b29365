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

use super::outcome::{Applied, Observed};
use super::validator::{Dependency, DependencyValidator};
use crate::domain::record::{StructMapper, Validate};
use crate::domain::resource::{DomainObject, Identity, Kind, Metadata};
use crate::infrastructure::client::ManagementClient;
use crate::shared::error::{ReconcileError, Result};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::info;

/// A resource kind the controller can drive through its lifecycle.
pub trait ManagedResource: Clone + Send + Sync + Sized + 'static {
    const KIND: Kind;

    type Record: StructMapper<Object = Self> + Validate + Send + Sync;

    fn metadata(&self) -> &Metadata;

    fn identity(&self) -> Identity {
        let metadata = self.metadata();
        Identity::new(Self::KIND, &metadata.name, metadata.project.as_deref())
    }

    /// Entities that must exist before this object may be written.
    fn dependencies(&self) -> Vec<Dependency>;

    /// Clears fields that cannot change after creation so an update payload
    /// never carries them.
    fn strip_immutable(&mut self) {}

    fn into_object(self) -> DomainObject;

    fn from_object(object: DomainObject) -> Result<Self>;
}

/// Create / read / update / delete / import for one resource kind.
///
/// Holds no state besides the client: every write is followed by a read of
/// the authoritative object, and that read is what gets returned.
pub struct Reconciler<R> {
    client: Arc<dyn ManagementClient>,
    _kind: PhantomData<fn() -> R>,
}

impl<R> Clone for Reconciler<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _kind: PhantomData,
        }
    }
}

impl<R: ManagedResource> Reconciler<R> {
    pub fn new(client: Arc<dyn ManagementClient>) -> Self {
        Self {
            client,
            _kind: PhantomData,
        }
    }

    pub async fn create(&self, record: &R::Record) -> Result<Applied<R::Record>> {
        record.validate()?;
        let desired = record.to_domain();
        let identity = desired.identity();
        info!(kind = %R::KIND, %identity, "creating resource");

        DependencyValidator::new(self.client.as_ref())
            .validate(&desired.dependencies())
            .await?;

        self.client
            .create(&desired.into_object())
            .await
            .map_err(|e| e.with_context("create", R::KIND, &identity))?;

        let record = self.read_back(&identity, "create").await?;
        info!(kind = %R::KIND, %identity, "resource created");
        Ok(Applied::new(record, identity))
    }

    pub async fn update(&self, identity: &Identity, record: &R::Record) -> Result<Applied<R::Record>> {
        record.validate()?;
        let mut desired = record.to_domain();

        let declared = desired.identity();
        if &declared != identity {
            return Err(ReconcileError::validation(format!(
                "{} '{}' cannot be renamed to '{}' in place",
                R::KIND,
                identity,
                declared
            )));
        }
        info!(kind = %R::KIND, %identity, "updating resource");

        DependencyValidator::new(self.client.as_ref())
            .validate(&desired.dependencies())
            .await?;

        desired.strip_immutable();
        self.client
            .update(&desired.into_object())
            .await
            .map_err(|e| e.with_context("update", R::KIND, identity))?;

        let record = self.read_back(identity, "update").await?;
        Ok(Applied::new(record, identity.clone()))
    }

    /// A resource that no longer exists is reported as gone, not as an error.
    pub async fn read(&self, identity: &Identity) -> Result<Observed<R::Record>> {
        match self.fetch(identity).await {
            Ok(object) => Ok(Observed::found(
                R::Record::from_domain(&object),
                identity.clone(),
            )),
            Err(e) if e.is_not_found() => {
                info!(kind = %R::KIND, %identity, "resource no longer exists");
                Ok(Observed::gone())
            }
            Err(e) => Err(e.with_context("read", R::KIND, identity)),
        }
    }

    /// Deleting an absent resource succeeds without a remote delete call.
    pub async fn delete(&self, identity: &Identity) -> Result<()> {
        match self.fetch(identity).await {
            Ok(_) => {}
            Err(e) if e.is_not_found() => {
                info!(kind = %R::KIND, %identity, "resource already absent");
                return Ok(());
            }
            Err(e) => return Err(e.with_context("read", R::KIND, identity)),
        }

        info!(kind = %R::KIND, %identity, "deleting resource");
        match self
            .client
            .delete(R::KIND, &identity.name, identity.project_or_empty())
            .await
        {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(e.with_context("delete", R::KIND, identity)),
        }
    }

    /// Like [`read`](Self::read), but a missing resource is an error.
    pub async fn import(&self, raw_identity: &str) -> Result<Applied<R::Record>> {
        let identity = Identity::parse(R::KIND, raw_identity)?;
        info!(kind = %R::KIND, %identity, "importing resource");

        let object = self
            .fetch(&identity)
            .await
            .map_err(|e| e.with_context("import", R::KIND, &identity))?;
        Ok(Applied::new(R::Record::from_domain(&object), identity))
    }

    async fn fetch(&self, identity: &Identity) -> Result<R> {
        let object = self
            .client
            .get_by_name(R::KIND, &identity.name, identity.project_or_empty())
            .await?;
        R::from_object(object)
    }

    async fn read_back(&self, identity: &Identity, after: &str) -> Result<R::Record> {
        match self.fetch(identity).await {
            Ok(object) => Ok(R::Record::from_domain(&object)),
            Err(e) if e.is_not_found() => Err(ReconcileError::Remote {
                operation: format!("read back after {}", after),
                kind: R::KIND.to_string(),
                identity: identity.to_string(),
                message: "resource is not visible after a successful write".to_string(),
            }),
            Err(e) => Err(e.with_context(&format!("read back after {}", after), R::KIND, identity)),
        }
    }

    pub(crate) fn client(&self) -> &Arc<dyn ManagementClient> {
        &self.client
    }
}

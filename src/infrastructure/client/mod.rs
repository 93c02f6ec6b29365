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

mod http;

pub use self::http::HttpManagementClient;

use crate::domain::query::QueryParams;
use crate::domain::resource::{BootstrapRequest, DomainObject, Kind, KubeconfigRequest};
use crate::shared::error::Result;

/// Remote management API.
///
/// Implementations must report a missing resource as
/// [`ReconcileError::NotFound`](crate::shared::error::ReconcileError::NotFound);
/// every other failure may be opaque. Arguments are always `(kind, name, project)`,
/// with an empty project for organization scoped kinds.
#[async_trait::async_trait]
pub trait ManagementClient: Send + Sync {
    async fn get_by_name(&self, kind: Kind, name: &str, project: &str) -> Result<DomainObject>;

    async fn create(&self, object: &DomainObject) -> Result<DomainObject>;

    async fn update(&self, object: &DomainObject) -> Result<DomainObject>;

    async fn delete(&self, kind: Kind, name: &str, project: &str) -> Result<()>;

    async fn list(&self, kind: Kind, query: &QueryParams) -> Result<Vec<DomainObject>>;

    async fn fetch_kubeconfig(&self, request: &KubeconfigRequest) -> Result<String>;

    async fn fetch_bootstrap(&self, request: &BootstrapRequest) -> Result<String>;
}

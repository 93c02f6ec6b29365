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

//! In-memory management API used by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use resource_reconciler::domain::query::QueryParams;
use resource_reconciler::domain::resource::{
    BootstrapRequest, Cluster, ClusterSpec, DomainObject, KubeconfigRequest, Kind, Metadata,
    Project, ProjectSpec, User, UserSpec,
};
use resource_reconciler::{ManagementClient, ReconcileError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct State {
    objects: Vec<DomainObject>,
    calls: Vec<String>,
    failures: HashMap<String, String>,
    updates: Vec<DomainObject>,
    last_list: Option<QueryParams>,
    bootstrap: Option<String>,
    kubeconfig: Option<String>,
    next_id: u32,
}

#[derive(Default)]
pub struct FakeClient {
    state: Mutex<State>,
}

fn matches(object: &DomainObject, kind: Kind, name: &str, project: &str) -> bool {
    object.kind() == kind
        && object.name() == name
        && (!kind.is_project_scoped() || object.project() == project)
}

fn metadata_mut(object: &mut DomainObject) -> &mut Metadata {
    match object {
        DomainObject::Cluster(c) => &mut c.metadata,
        DomainObject::Group(g) => &mut g.metadata,
        DomainObject::Project(p) => &mut p.metadata,
        DomainObject::User(u) => &mut u.metadata,
    }
}

impl FakeClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seed(&self, object: DomainObject) {
        self.state.lock().unwrap().objects.push(object);
    }

    pub fn seed_project(&self, name: &str) {
        self.seed(DomainObject::Project(Project {
            metadata: Metadata::named(name),
            spec: ProjectSpec::default(),
        }));
    }

    pub fn seed_user(&self, email: &str, first_name: &str, last_name: &str) {
        self.seed(DomainObject::User(User {
            metadata: Metadata::named(email),
            spec: UserSpec {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                ..Default::default()
            },
        }));
    }

    pub fn seed_cluster(&self, project: &str, name: &str, cluster_type: &str) {
        self.seed(DomainObject::Cluster(Cluster {
            metadata: Metadata {
                name: name.to_string(),
                project: Some(project.to_string()),
                ..Default::default()
            },
            spec: ClusterSpec {
                cluster_type: Some(cluster_type.to_string()),
                ..Default::default()
            },
        }));
    }

    /// Removes an object out of band, as if deleted by someone else.
    pub fn remove(&self, kind: Kind, name: &str, project: &str) {
        self.state
            .lock()
            .unwrap()
            .objects
            .retain(|o| !matches(o, kind, name, project));
    }

    /// Makes every call of `operation` fail with an opaque API error.
    pub fn fail(&self, operation: &str, message: &str) {
        self.state
            .lock()
            .unwrap()
            .failures
            .insert(operation.to_string(), message.to_string());
    }

    pub fn set_bootstrap(&self, data: &str) {
        self.state.lock().unwrap().bootstrap = Some(data.to_string());
    }

    pub fn set_kubeconfig(&self, data: &str) {
        self.state.lock().unwrap().kubeconfig = Some(data.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count_calls(&self, operation: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.split(' ').next() == Some(operation))
            .count()
    }

    pub fn updates(&self) -> Vec<DomainObject> {
        self.state.lock().unwrap().updates.clone()
    }

    pub fn last_list(&self) -> Option<QueryParams> {
        self.state.lock().unwrap().last_list.clone()
    }

    pub fn stored(&self, kind: Kind, name: &str, project: &str) -> Option<DomainObject> {
        self.state
            .lock()
            .unwrap()
            .objects
            .iter()
            .find(|o| matches(o, kind, name, project))
            .cloned()
    }

    fn record(&self, operation: &str, detail: String) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("{} {}", operation, detail));
        match state.failures.get(operation) {
            Some(message) => Err(ReconcileError::Api(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ManagementClient for FakeClient {
    async fn get_by_name(&self, kind: Kind, name: &str, project: &str) -> Result<DomainObject> {
        self.record("get", format!("{} {}/{}", kind, project, name))?;
        self.stored(kind, name, project)
            .ok_or_else(|| ReconcileError::not_found(kind.as_str(), name, project))
    }

    async fn create(&self, object: &DomainObject) -> Result<DomainObject> {
        self.record("create", format!("{} {}", object.kind(), object.name()))?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let mut created = object.clone();
        let metadata = metadata_mut(&mut created);
        metadata.id = Some(format!("id-{}", state.next_id));
        metadata.created_at = Some(chrono::Utc::now());
        state.objects.push(created.clone());
        Ok(created)
    }

    async fn update(&self, object: &DomainObject) -> Result<DomainObject> {
        self.record("update", format!("{} {}", object.kind(), object.name()))?;
        let mut state = self.state.lock().unwrap();
        state.updates.push(object.clone());

        let (kind, name, project) = (object.kind(), object.name(), object.project());
        let position = state
            .objects
            .iter()
            .position(|o| matches(o, kind, name, project))
            .ok_or_else(|| ReconcileError::not_found(kind.as_str(), name, project))?;

        let mut merged = object.clone();
        // Fields absent from the payload keep their stored value.
        if let (DomainObject::Cluster(new), DomainObject::Cluster(old)) =
            (&mut merged, &state.objects[position])
        {
            if new.spec.cluster_type.is_none() {
                new.spec.cluster_type = old.spec.cluster_type.clone();
            }
            if new.spec.params.is_none() {
                new.spec.params = old.spec.params.clone();
            }
        }
        let old_meta = state.objects[position].metadata().clone();
        let metadata = metadata_mut(&mut merged);
        metadata.id = old_meta.id;
        metadata.created_at = old_meta.created_at;

        state.objects[position] = merged.clone();
        Ok(merged)
    }

    async fn delete(&self, kind: Kind, name: &str, project: &str) -> Result<()> {
        self.record("delete", format!("{} {}/{}", kind, project, name))?;
        let mut state = self.state.lock().unwrap();
        let before = state.objects.len();
        state.objects.retain(|o| !matches(o, kind, name, project));
        if state.objects.len() == before {
            return Err(ReconcileError::not_found(kind.as_str(), name, project));
        }
        Ok(())
    }

    async fn list(&self, kind: Kind, query: &QueryParams) -> Result<Vec<DomainObject>> {
        self.record("list", format!("{} {}", kind, query))?;
        let offset = query
            .get("offset")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(0);
        let limit = query
            .get("limit")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(usize::MAX);

        let mut state = self.state.lock().unwrap();
        state.last_list = Some(query.clone());
        Ok(state
            .objects
            .iter()
            .filter(|o| o.kind() == kind)
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn fetch_kubeconfig(&self, request: &KubeconfigRequest) -> Result<String> {
        self.record("kubeconfig", request.cluster.clone())?;
        self.state
            .lock()
            .unwrap()
            .kubeconfig
            .clone()
            .ok_or_else(|| ReconcileError::Api("kubeconfig unavailable".to_string()))
    }

    async fn fetch_bootstrap(&self, request: &BootstrapRequest) -> Result<String> {
        self.record("bootstrap", format!("{}/{}", request.project, request.name))?;
        self.state
            .lock()
            .unwrap()
            .bootstrap
            .clone()
            .ok_or_else(|| ReconcileError::Api("503 bootstrap service unavailable".to_string()))
    }
}

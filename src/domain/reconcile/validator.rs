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

use crate::domain::resource::Kind;
use crate::infrastructure::client::ManagementClient;
use crate::shared::error::{ReconcileError, Result};
use std::collections::HashSet;
use tracing::debug;

/// An entity another resource refers to by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Dependency {
    Project(String),
    User(String),
}

impl Dependency {
    pub fn kind(&self) -> Kind {
        match self {
            Dependency::Project(_) => Kind::Project,
            Dependency::User(_) => Kind::User,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Dependency::Project(name) | Dependency::User(name) => name,
        }
    }
}

/// Live existence checks used before a mutating call.
#[async_trait::async_trait]
pub trait EntityLookup: Send + Sync {
    async fn project_exists(&self, name: &str) -> Result<bool>;

    async fn user_exists(&self, name: &str) -> Result<bool>;
}

#[async_trait::async_trait]
impl<C: ManagementClient + ?Sized> EntityLookup for C {
    async fn project_exists(&self, name: &str) -> Result<bool> {
        exists(self, Kind::Project, name).await
    }

    async fn user_exists(&self, name: &str) -> Result<bool> {
        exists(self, Kind::User, name).await
    }
}

async fn exists<C: ManagementClient + ?Sized>(client: &C, kind: Kind, name: &str) -> Result<bool> {
    match client.get_by_name(kind, name, "").await {
        Ok(_) => Ok(true),
        Err(e) if e.is_not_found() => Ok(false),
        Err(e) => Err(e.with_context("look up", kind, name)),
    }
}

pub struct DependencyValidator<'a, L: EntityLookup + ?Sized> {
    lookup: &'a L,
}

impl<'a, L: EntityLookup + ?Sized> DependencyValidator<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        Self { lookup }
    }

    /// Resolves every dependency in the given order and fails on the first
    /// one that does not exist. Each distinct name is looked up once per call;
    /// nothing is remembered between calls.
    pub async fn validate(&self, dependencies: &[Dependency]) -> Result<()> {
        let mut checked = HashSet::new();

        for dependency in dependencies {
            if !checked.insert(dependency) {
                continue;
            }

            let found = match dependency {
                Dependency::Project(name) => self.lookup.project_exists(name).await?,
                Dependency::User(name) => self.lookup.user_exists(name).await?,
            };
            debug!(kind = %dependency.kind(), name = dependency.name(), found, "dependency lookup");

            if !found {
                return Err(ReconcileError::dependency_missing(
                    dependency.kind().as_str(),
                    dependency.name(),
                ));
            }
        }

        Ok(())
    }
}

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

pub mod artifact;
pub mod cluster;
pub mod controller;
pub mod outcome;
pub mod validator;

pub use self::artifact::ArtifactDescriptor;
pub use self::cluster::ClusterDescriptor;
pub use self::controller::{ManagedResource, Reconciler};
pub use self::outcome::{Applied, Diagnostic, Observed, Severity};
pub use self::validator::{Dependency, DependencyValidator, EntityLookup};

use crate::domain::resource::{Group, Project};

pub type GroupReconciler = Reconciler<Group>;
pub type ProjectReconciler = Reconciler<Project>;

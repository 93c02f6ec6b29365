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

//! Flat, user-authored records and their mapping onto the nested API objects.

pub mod artifact;
pub mod cluster;
pub mod group;
pub mod project;
pub mod user;

pub use self::artifact::{BootstrapFileRecord, KubeconfigRecord};
pub use self::cluster::{ClusterParamsRecord, ClusterRecord, ProxyConfigRecord};
pub use self::group::{GroupRecord, ProjectRoleRecord};
pub use self::project::ProjectRecord;
pub use self::user::UserRecord;

use crate::domain::resource::Kind;
use crate::shared::error::{ReconcileError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Conversion between a declared record and the object the API expects.
///
/// Both directions are total over well-formed input: absent optional fields
/// stay absent, and required fields are checked by [`Validate`] beforehand.
pub trait StructMapper: Sized {
    type Object;

    fn to_domain(&self) -> Self::Object;

    fn from_domain(object: &Self::Object) -> Self;
}

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// One entry of a declaration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Declaration {
    Cluster(ClusterRecord),
    Group(GroupRecord),
    Project(ProjectRecord),
}

impl Declaration {
    /// Parse every YAML document in `content`.
    pub fn from_yaml(content: &str) -> Result<Vec<Self>> {
        serde_yaml::Deserializer::from_str(content)
            .map(|doc| Declaration::deserialize(doc).map_err(ReconcileError::from))
            .collect()
    }

    pub fn kind(&self) -> Kind {
        match self {
            Declaration::Cluster(_) => Kind::Cluster,
            Declaration::Group(_) => Kind::Group,
            Declaration::Project(_) => Kind::Project,
        }
    }
}

pub(crate) fn require(field: &str, value: &str, kind: Kind) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReconcileError::validation(format!(
            "{} {} must not be empty",
            kind, field
        )));
    }
    Ok(())
}

pub(crate) fn require_dns_label(field: &str, value: &str, kind: Kind) -> Result<()> {
    require(field, value, kind)?;
    let re = Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$")
        .map_err(|e| ReconcileError::validation(e.to_string()))?;
    if value.len() > 63 || !re.is_match(value) {
        return Err(ReconcileError::validation(format!(
            "{} {} '{}' must be a lowercase DNS label (a-z, 0-9, '-', at most 63 chars)",
            kind, field, value
        )));
    }
    Ok(())
}

/// Required record strings become absent domain fields when empty.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_from_multi_document_yaml() {
        let content = r#"
kind: project
name: alpha
---
kind: cluster
name: test
project: alpha
cluster_type: imported
params:
  - provision_type: IMPORT
    kubernetes_provider: EKS
    state: PROVISION
---
kind: group
name: admins
users: [ann@example.com]
"#;
        let decls = Declaration::from_yaml(content).unwrap();
        assert_eq!(decls.len(), 3);
        assert_eq!(decls[0].kind(), Kind::Project);
        match &decls[1] {
            Declaration::Cluster(c) => {
                assert_eq!(c.name, "test");
                assert_eq!(c.params.len(), 1);
                assert_eq!(c.params[0].kubernetes_provider.as_deref(), Some("EKS"));
            }
            other => panic!("unexpected declaration {:?}", other),
        }
        assert_eq!(decls[2].kind(), Kind::Group);
    }

    #[test]
    fn test_declaration_rejects_unknown_kind() {
        assert!(Declaration::from_yaml("kind: namespace\nname: x\n").is_err());
    }

    #[test]
    fn test_dns_label_rules() {
        assert!(require_dns_label("name", "test-1", Kind::Cluster).is_ok());
        assert!(require_dns_label("name", "", Kind::Cluster).is_err());
        assert!(require_dns_label("name", "Test", Kind::Cluster).is_err());
        assert!(require_dns_label("name", "-test", Kind::Cluster).is_err());
        assert!(require_dns_label("name", &"a".repeat(64), Kind::Cluster).is_err());
    }
}

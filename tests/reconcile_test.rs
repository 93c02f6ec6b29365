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

mod common;

#[cfg(test)]
mod tests {
    use super::common::FakeClient;
    use resource_reconciler::domain::record::{
        ClusterParamsRecord, GroupRecord, ProjectRecord, ProjectRoleRecord,
    };
    use resource_reconciler::domain::resource::{DomainObject, Identity, Kind};
    use resource_reconciler::*;
    use std::sync::Arc;

    fn cluster_record(name: &str, cluster_type: &str) -> ClusterRecord {
        ClusterRecord {
            name: name.to_string(),
            project: "default".to_string(),
            cluster_type: cluster_type.to_string(),
            blueprint: Some("default".to_string()),
            params: vec![ClusterParamsRecord {
                provision_type: Some("CREATE".to_string()),
                kubernetes_provider: Some("EKS".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn setup() -> (Arc<FakeClient>, Arc<dyn ManagementClient>) {
        let fake = FakeClient::new();
        fake.seed_project("default");
        let client: Arc<dyn ManagementClient> = fake.clone();
        (fake, client)
    }

    #[tokio::test]
    async fn test_create_cluster_returns_read_back_state() {
        let (fake, client) = setup();
        let descriptor = ClusterDescriptor::new(client);

        let applied = descriptor
            .create(&cluster_record("test", "aws-eks"))
            .await
            .unwrap();

        assert_eq!(applied.identity.to_string(), "default:test");
        assert_eq!(applied.record.name, "test");
        assert_eq!(applied.record.cluster_type, "aws-eks");
        assert!(applied.diagnostics.is_empty());
        assert!(applied.record.bootstrap_data.is_none());
        assert_eq!(fake.count_calls("create"), 1);
        assert_eq!(fake.count_calls("bootstrap"), 0);
        // Dependency check, then the read back after the write.
        assert_eq!(fake.count_calls("get"), 2);
    }

    #[tokio::test]
    async fn test_create_cluster_in_missing_project_is_rejected() {
        let fake = FakeClient::new();
        let client: Arc<dyn ManagementClient> = fake.clone();

        let err = ClusterDescriptor::new(client)
            .create(&cluster_record("test", "aws-eks"))
            .await
            .unwrap_err();

        match err {
            ReconcileError::DependencyMissing { kind, name } => {
                assert_eq!(kind, "project");
                assert_eq!(name, "default");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(fake.count_calls("create"), 0);
    }

    #[tokio::test]
    async fn test_invalid_record_makes_no_remote_call() {
        let (fake, client) = setup();
        let mut record = cluster_record("Not_A_Label", "aws-eks");
        record.params.push(ClusterParamsRecord::default());

        let err = ClusterDescriptor::new(client).create(&record).await.unwrap_err();
        assert!(matches!(err, ReconcileError::ValidationError(_)));
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_imported_cluster_gets_bootstrap_data() {
        let (fake, client) = setup();
        fake.set_bootstrap("apiVersion: v1\nkind: Namespace\n");

        let applied = ClusterDescriptor::new(client)
            .create(&cluster_record("edge", "imported"))
            .await
            .unwrap();

        assert_eq!(
            applied.record.bootstrap_data.as_deref(),
            Some("apiVersion: v1\nkind: Namespace\n")
        );
        assert!(!applied.has_warnings());
        assert!(fake.calls().contains(&"bootstrap default/edge".to_string()));
    }

    #[tokio::test]
    async fn test_bootstrap_failure_is_a_warning_not_an_error() {
        let (fake, client) = setup();

        let applied = ClusterDescriptor::new(client)
            .create(&cluster_record("edge", "imported"))
            .await
            .unwrap();

        assert!(applied.has_warnings());
        assert_eq!(applied.diagnostics.len(), 1);
        assert_eq!(applied.diagnostics[0].severity, Severity::Warning);
        assert!(applied.diagnostics[0].detail.contains("503"));
        assert!(applied.record.bootstrap_data.is_none());
        assert!(fake.stored(Kind::Cluster, "edge", "default").is_some());
    }

    #[tokio::test]
    async fn test_read_after_create_matches_for_imported_cluster() {
        let (fake, client) = setup();
        fake.set_bootstrap("apiVersion: v1\n");
        let descriptor = ClusterDescriptor::new(client);

        let applied = descriptor
            .create(&cluster_record("edge", "imported"))
            .await
            .unwrap();
        let observed = descriptor.read(&applied.identity).await.unwrap();

        assert_eq!(observed.record, Some(applied.record));
        assert!(observed.diagnostics.is_empty());
    }

    #[tokio::test]
    async fn test_read_of_imported_cluster_warns_when_bootstrap_unavailable() {
        let (fake, client) = setup();
        fake.seed_cluster("default", "edge", "imported");
        let identity = Identity::parse(Kind::Cluster, "default:edge").unwrap();

        let observed = ClusterDescriptor::new(client).read(&identity).await.unwrap();

        assert!(observed.has_warnings());
        assert_eq!(observed.diagnostics[0].severity, Severity::Warning);
        assert!(observed.record.unwrap().bootstrap_data.is_none());
    }

    #[tokio::test]
    async fn test_update_and_import_carry_bootstrap_data() {
        let (fake, client) = setup();
        fake.seed_cluster("default", "edge", "imported");
        fake.set_bootstrap("kind: Namespace\n");
        let descriptor = ClusterDescriptor::new(client);

        let imported = descriptor.import("default:edge").await.unwrap();
        assert_eq!(imported.record.bootstrap_data.as_deref(), Some("kind: Namespace\n"));

        let mut changed = imported.record.clone();
        changed.description = Some("edge site".to_string());
        let updated = descriptor.update(&imported.identity, &changed).await.unwrap();
        assert_eq!(updated.record.bootstrap_data.as_deref(), Some("kind: Namespace\n"));
        assert!(!updated.has_warnings());
    }

    #[tokio::test]
    async fn test_read_of_deleted_resource_reports_gone() {
        let (fake, client) = setup();
        let descriptor = ClusterDescriptor::new(client);
        let applied = descriptor
            .create(&cluster_record("test", "aws-eks"))
            .await
            .unwrap();

        fake.remove(Kind::Cluster, "test", "default");

        let observed = descriptor.read(&applied.identity).await.unwrap();
        assert!(observed.is_gone());
        assert!(observed.record.is_none());
        assert!(observed.identity.is_none());
    }

    #[tokio::test]
    async fn test_read_wraps_opaque_failures_with_context() {
        let (fake, client) = setup();
        fake.fail("get", "500 internal error");

        let identity = Identity::parse(Kind::Cluster, "default:test").unwrap();
        let err = ClusterDescriptor::new(client).read(&identity).await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("read"));
        assert!(msg.contains("cluster"));
        assert!(msg.contains("default:test"));
        assert!(msg.contains("500 internal error"));
    }

    #[tokio::test]
    async fn test_group_with_unknown_user_is_never_created() {
        let (fake, client) = setup();
        fake.seed_user("admin@acme.io", "Ad", "Min");

        let record = GroupRecord {
            name: "ops".to_string(),
            users: vec!["admin@acme.io".to_string(), "ghost".to_string()],
            project_roles: vec![ProjectRoleRecord {
                project: Some("default".to_string()),
                namespace: None,
                role: "PROJECT_ADMIN".to_string(),
            }],
            ..Default::default()
        };

        let err = GroupReconciler::new(client).create(&record).await.unwrap_err();
        match err {
            ReconcileError::DependencyMissing { kind, name } => {
                assert_eq!(kind, "user");
                assert_eq!(name, "ghost");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(fake.count_calls("create"), 0);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (fake, client) = setup();
        let reconciler = ProjectReconciler::new(client);
        let identity = Identity::parse(Kind::Project, "staging").unwrap();

        reconciler
            .create(&ProjectRecord {
                name: "staging".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        reconciler.delete(&identity).await.unwrap();
        assert!(fake.stored(Kind::Project, "staging", "").is_none());

        reconciler.delete(&identity).await.unwrap();
        assert_eq!(fake.count_calls("delete"), 1);
    }

    #[tokio::test]
    async fn test_delete_surfaces_remote_failure() {
        let (fake, client) = setup();
        fake.seed_project("staging");
        fake.fail("delete", "ignored");
        let identity = Identity::parse(Kind::Project, "staging").unwrap();
        let err = ProjectReconciler::new(client).delete(&identity).await.unwrap_err();
        assert!(err.to_string().contains("delete"));
    }

    #[tokio::test]
    async fn test_import_existing_and_missing() {
        let (fake, client) = setup();
        fake.seed_cluster("default", "legacy", "imported");
        let descriptor = ClusterDescriptor::new(client);

        let applied = descriptor.import("default:legacy").await.unwrap();
        assert_eq!(applied.identity.to_string(), "default:legacy");
        assert_eq!(applied.record.project, "default");
        assert_eq!(applied.record.cluster_type, "imported");

        let err = descriptor.import("default:nope").await.unwrap_err();
        assert!(err.is_not_found());

        let err = descriptor.import("legacy").await.unwrap_err();
        assert!(matches!(err, ReconcileError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_update_never_sends_immutable_fields() {
        let (fake, client) = setup();
        let descriptor = ClusterDescriptor::new(client);
        let applied = descriptor
            .create(&cluster_record("test", "aws-eks"))
            .await
            .unwrap();

        let mut changed = cluster_record("test", "aws-eks");
        changed.description = Some("prod workloads".to_string());
        let updated = descriptor.update(&applied.identity, &changed).await.unwrap();

        let payload = match fake.updates().pop() {
            Some(DomainObject::Cluster(c)) => c,
            other => panic!("unexpected update payload: {other:?}"),
        };
        assert!(payload.spec.cluster_type.is_none());
        assert!(payload.spec.params.is_none());
        assert_eq!(payload.metadata.description.as_deref(), Some("prod workloads"));

        assert_eq!(updated.record.description.as_deref(), Some("prod workloads"));
        assert_eq!(updated.record.cluster_type, "aws-eks");
        assert_eq!(updated.record.params.len(), 1);
    }

    #[tokio::test]
    async fn test_update_cannot_rename() {
        let (fake, client) = setup();
        fake.seed_cluster("default", "test", "aws-eks");
        let identity = Identity::parse(Kind::Cluster, "default:test").unwrap();

        let err = ClusterDescriptor::new(client)
            .update(&identity, &cluster_record("renamed", "aws-eks"))
            .await
            .unwrap_err();
        assert!(matches!(err, ReconcileError::ValidationError(_)));
        assert_eq!(fake.count_calls("update"), 0);
    }

    #[tokio::test]
    async fn test_create_failure_carries_context() {
        let (fake, client) = setup();
        fake.fail("create", "409 conflict");

        let err = ClusterDescriptor::new(client)
            .create(&cluster_record("test", "aws-eks"))
            .await
            .unwrap_err();
        match err {
            ReconcileError::Remote {
                operation,
                kind,
                identity,
                message,
            } => {
                assert_eq!(operation, "create");
                assert_eq!(kind, "cluster");
                assert_eq!(identity, "default:test");
                assert_eq!(message, "409 conflict");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_declaration_file_drives_create() {
        let (fake, client) = setup();
        let yaml = r#"
kind: project
name: analytics
---
kind: cluster
name: c1
project: analytics
cluster_type: aws-eks
"#;
        let declarations = Declaration::from_yaml(yaml).unwrap();
        assert_eq!(declarations.len(), 2);

        for declaration in &declarations {
            match declaration {
                Declaration::Project(record) => {
                    ProjectReconciler::new(client.clone())
                        .create(record)
                        .await
                        .unwrap();
                }
                Declaration::Cluster(record) => {
                    let applied = ClusterDescriptor::new(client.clone())
                        .create(record)
                        .await
                        .unwrap();
                    assert_eq!(applied.identity.to_string(), "analytics:c1");
                }
                Declaration::Group(_) => unreachable!(),
            }
        }
        assert_eq!(fake.count_calls("create"), 2);
    }
}

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
    use resource_reconciler::domain::record::{BootstrapFileRecord, KubeconfigRecord};
    use resource_reconciler::*;
    use std::sync::Arc;

    const KUBECONFIG: &str = r#"apiVersion: v1
kind: Config
clusters:
- name: c1
  cluster:
    server: https://10.0.0.1:6443
contexts:
- name: c1
  context:
    cluster: c1
    user: u1
current-context: c1
users:
- name: u1
  user:
    token: abc
"#;

    fn descriptor() -> (Arc<FakeClient>, ArtifactDescriptor) {
        let fake = FakeClient::new();
        let client: Arc<dyn ManagementClient> = fake.clone();
        (fake, ArtifactDescriptor::new(client))
    }

    fn kubeconfig_record(folder: Option<String>) -> KubeconfigRecord {
        KubeconfigRecord {
            cluster: "c1".to_string(),
            namespace: None,
            output_folder_path: folder,
            filename: None,
            kubeconfig: None,
        }
    }

    #[tokio::test]
    async fn test_kubeconfig_is_returned_and_written() {
        let (fake, artifacts) = descriptor();
        fake.set_kubeconfig(KUBECONFIG);
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("nested");

        let out = artifacts
            .read_kubeconfig(&kubeconfig_record(Some(folder.display().to_string())))
            .await
            .unwrap();

        assert_eq!(out.kubeconfig.as_deref(), Some(KUBECONFIG));
        let written = std::fs::read_to_string(folder.join("kubeconfig-c1.yaml")).unwrap();
        assert_eq!(written, KUBECONFIG);
    }

    #[tokio::test]
    async fn test_malformed_kubeconfig_is_rejected() {
        let (fake, artifacts) = descriptor();
        fake.set_kubeconfig("clusters: [");

        let err = artifacts
            .read_kubeconfig(&kubeconfig_record(None))
            .await
            .unwrap_err();
        assert!(matches!(err, ReconcileError::Kubeconfig(_)));
    }

    #[tokio::test]
    async fn test_kubeconfig_requires_cluster_before_fetch() {
        let (fake, artifacts) = descriptor();
        let mut record = kubeconfig_record(None);
        record.cluster = String::new();

        let err = artifacts.read_kubeconfig(&record).await.unwrap_err();
        assert!(matches!(err, ReconcileError::ValidationError(_)));
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_bootstrap_written_into_folder() {
        let (fake, artifacts) = descriptor();
        fake.set_bootstrap("kind: Namespace\n");
        let dir = tempfile::tempdir().unwrap();

        let out = artifacts
            .read_bootstrap(&BootstrapFileRecord {
                name: "edge".to_string(),
                project: "default".to_string(),
                output_path: Some(dir.path().display().to_string()),
                bootstrap_data: None,
            })
            .await
            .unwrap();

        assert_eq!(out.bootstrap_data.as_deref(), Some("kind: Namespace\n"));
        let written = std::fs::read_to_string(dir.path().join("edge-bootstrap.yaml")).unwrap();
        assert_eq!(written, "kind: Namespace\n");
    }

    #[tokio::test]
    async fn test_bootstrap_failure_is_an_error_when_read_directly() {
        let (_, artifacts) = descriptor();

        let err = artifacts
            .read_bootstrap(&BootstrapFileRecord {
                name: "edge".to_string(),
                project: "default".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("default:edge"));
    }
}

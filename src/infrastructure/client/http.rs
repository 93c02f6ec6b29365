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

use super::ManagementClient;
use crate::domain::config::ClientConfig;
use crate::domain::query::QueryParams;
use crate::domain::resource::{BootstrapRequest, DomainObject, Kind, KubeconfigRequest};
use crate::infrastructure::constants::{
    API_KEY_HEADER, API_PREFIX, API_VERSION, BOOTSTRAP_SUFFIX, INFRA_GROUP, SYSTEM_GROUP,
    USER_AGENT, USER_GROUP,
};
use crate::shared::error::{ReconcileError, Result};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    items: Vec<serde_json::Value>,
}

/// [`ManagementClient`] over the REST API. One request per call, no retries.
pub struct HttpManagementClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpManagementClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| ReconcileError::config_error(format!("Invalid API key: {}", e)))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// `endpoint` followed by `segments`, each one percent-encoded.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.endpoint).map_err(|e| {
            ReconcileError::config_error(format!("Invalid endpoint {}: {}", self.endpoint, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                ReconcileError::config_error(format!(
                    "endpoint {} cannot be used as a base URL",
                    self.endpoint
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn collection_segments<'a>(&self, kind: Kind, project: &'a str) -> Result<Vec<&'a str>> {
        let segments = match kind {
            Kind::Cluster => {
                if project.is_empty() {
                    return Err(ReconcileError::validation(
                        "cluster requests need a project",
                    ));
                }
                vec![API_PREFIX, INFRA_GROUP, API_VERSION, "projects", project, "clusters"]
            }
            Kind::Project => vec![API_PREFIX, SYSTEM_GROUP, API_VERSION, "projects"],
            Kind::Group => vec![API_PREFIX, SYSTEM_GROUP, API_VERSION, "groups"],
            Kind::User => vec![API_PREFIX, SYSTEM_GROUP, API_VERSION, "users"],
        };
        Ok(segments)
    }

    fn collection_url(&self, kind: Kind, project: &str) -> Result<Url> {
        self.url(&self.collection_segments(kind, project)?)
    }

    fn item_url(&self, kind: Kind, name: &str, project: &str) -> Result<Url> {
        let mut segments = self.collection_segments(kind, project)?;
        segments.push(name);
        self.url(&segments)
    }

    async fn send(
        &self,
        request: RequestBuilder,
        kind: &str,
        name: &str,
        project: &str,
    ) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        debug!(%status, kind, name, project, "remote call finished");

        if status == StatusCode::NOT_FOUND {
            return Err(ReconcileError::not_found(kind, name, project));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ReconcileError::Api(format!("{}: {}", status, body.trim())));
        }
        Ok(response)
    }

    async fn decode(&self, kind: Kind, response: Response) -> Result<DomainObject> {
        let value: serde_json::Value = response.json().await?;
        DomainObject::from_json(kind, value)
    }
}

#[async_trait::async_trait]
impl ManagementClient for HttpManagementClient {
    async fn get_by_name(&self, kind: Kind, name: &str, project: &str) -> Result<DomainObject> {
        let url = self.item_url(kind, name, project)?;
        let response = self
            .send(self.client.get(url), kind.as_str(), name, project)
            .await?;
        self.decode(kind, response).await
    }

    async fn create(&self, object: &DomainObject) -> Result<DomainObject> {
        let kind = object.kind();
        let url = self.collection_url(kind, object.project())?;
        let body = object.to_json()?;
        let response = self
            .send(
                self.client.post(url).json(&body),
                kind.as_str(),
                object.name(),
                object.project(),
            )
            .await?;
        self.decode(kind, response).await
    }

    async fn update(&self, object: &DomainObject) -> Result<DomainObject> {
        let kind = object.kind();
        let url = self.item_url(kind, object.name(), object.project())?;
        let body = object.to_json()?;
        let response = self
            .send(
                self.client.put(url).json(&body),
                kind.as_str(),
                object.name(),
                object.project(),
            )
            .await?;
        self.decode(kind, response).await
    }

    async fn delete(&self, kind: Kind, name: &str, project: &str) -> Result<()> {
        let url = self.item_url(kind, name, project)?;
        self.send(self.client.delete(url), kind.as_str(), name, project)
            .await?;
        Ok(())
    }

    async fn list(&self, kind: Kind, query: &QueryParams) -> Result<Vec<DomainObject>> {
        let url = self.collection_url(kind, "")?;
        let response = self
            .send(
                self.client.get(url).query(query.pairs()),
                kind.as_str(),
                "",
                "",
            )
            .await?;
        let list: ListResponse = response.json().await?;
        list.items
            .into_iter()
            .map(|item| DomainObject::from_json(kind, item))
            .collect()
    }

    async fn fetch_kubeconfig(&self, request: &KubeconfigRequest) -> Result<String> {
        let url = self.url(&[API_PREFIX, USER_GROUP, API_VERSION, "kubeconfig"])?;
        let mut query = vec![("cluster", request.cluster.as_str())];
        if let Some(namespace) = request.namespace.as_deref() {
            query.push(("namespace", namespace));
        }
        let response = self
            .send(
                self.client.get(url).query(&query),
                "kubeconfig",
                &request.cluster,
                "",
            )
            .await?;
        Ok(response.text().await?)
    }

    async fn fetch_bootstrap(&self, request: &BootstrapRequest) -> Result<String> {
        let mut segments = self.collection_segments(Kind::Cluster, &request.project)?;
        segments.extend([request.name.as_str(), BOOTSTRAP_SUFFIX]);
        let url = self.url(&segments)?;
        let response = self
            .send(
                self.client.get(url),
                "bootstrap",
                &request.name,
                &request.project,
            )
            .await?;
        Ok(response.text().await?)
    }
}

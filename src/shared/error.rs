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

use thiserror::Error;
pub type Result<T> = std::result::Result<T, ReconcileError>;

#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Dependency missing: {kind} '{name}' does not exist")]
    DependencyMissing { kind: String, name: String },

    #[error("Resource not found: {kind} '{name}' in project '{project}'")]
    NotFound {
        kind: String,
        name: String,
        project: String,
    },

    #[error("No match: no entry with {field} equal to '{value}'")]
    NoMatch { field: String, value: String },

    #[error(
        "Ambiguous match: {count} entries have {field} equal to '{value}', \
         set allow_more_than_one to accept all of them"
    )]
    AmbiguousMatch {
        field: String,
        value: String,
        count: usize,
    },

    #[error("Failed to {operation} {kind} '{identity}': {message}")]
    Remote {
        operation: String,
        kind: String,
        identity: String,
        message: String,
    },

    #[error("Remote API error: {0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid kubeconfig: {0}")]
    Kubeconfig(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl From<kube::config::KubeconfigError> for ReconcileError {
    fn from(err: kube::config::KubeconfigError) -> Self {
        ReconcileError::Kubeconfig(err.to_string())
    }
}

impl ReconcileError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    pub fn config_error(context: impl Into<String>) -> Self {
        Self::ConfigError(context.into())
    }

    pub fn not_found(
        kind: impl Into<String>,
        name: impl Into<String>,
        project: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            kind: kind.into(),
            name: name.into(),
            project: project.into(),
        }
    }

    pub fn dependency_missing(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DependencyMissing {
            kind: kind.into(),
            name: name.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Attaches operation and entity context to opaque remote failures.
    /// Typed errors (not found, validation, ...) are returned unchanged.
    pub fn with_context(
        self,
        operation: &str,
        kind: impl std::fmt::Display,
        identity: impl std::fmt::Display,
    ) -> Self {
        let message = match self {
            Self::Api(message) => message,
            Self::Http(err) => err.to_string(),
            other => return other,
        };
        Self::Remote {
            operation: operation.to_string(),
            kind: kind.to_string(),
            identity: identity.to_string(),
            message,
        }
    }
}

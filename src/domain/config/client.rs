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

use crate::infrastructure::constants::{DEFAULT_PAGE_LIMIT, DEFAULT_TIMEOUT_SECS};
use crate::shared::error::{ReconcileError, Result};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::Path;

/// Connection settings for one management API target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoint: String,
    pub api_key: String,
    pub organization: String,
    pub partner: String,
    /// Project used when a command does not name one.
    pub project: String,
    pub page_limit: u32,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            organization: String::new(),
            partner: String::new(),
            project: "default".to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = read_to_string(path).map_err(|e| {
            ReconcileError::config_error(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let conf: Self = toml::from_str(&content)?;
        Ok(conf)
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(ReconcileError::config_error("endpoint must be set"));
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ReconcileError::config_error(format!(
                "endpoint must be an http(s) URL: {}",
                self.endpoint
            )));
        }

        if self.api_key.trim().is_empty() {
            return Err(ReconcileError::config_error("api_key must be set"));
        }

        if self.page_limit == 0 {
            return Err(ReconcileError::config_error("page_limit must be > 0"));
        }

        Ok(())
    }

    pub fn api_context(&self) -> ApiContext {
        ApiContext {
            organization: self.organization.clone(),
            partner: self.partner.clone(),
            limit: self.page_limit,
        }
    }
}

/// Tenant scoping sent with every list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiContext {
    pub organization: String,
    pub partner: String,
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
endpoint = "https://console.example.com"
api_key = "secret"
organization = "org-1"
partner = "partner-1"
"#
        )
        .unwrap();

        let conf = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(conf.organization, "org-1");
        assert_eq!(conf.project, "default");
        assert_eq!(conf.page_limit, DEFAULT_PAGE_LIMIT);
        assert!(conf.validate().is_ok());

        let ctx = conf.api_context();
        assert_eq!(ctx.partner, "partner-1");
        assert_eq!(ctx.limit, DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn test_validate_rejects_incomplete_config() {
        let mut conf = ClientConfig {
            endpoint: "https://console.example.com".to_string(),
            api_key: "secret".to_string(),
            ..Default::default()
        };
        assert!(conf.validate().is_ok());

        conf.page_limit = 0;
        assert!(conf.validate().is_err());

        conf.page_limit = 10;
        conf.endpoint = "console.example.com".to_string();
        assert!(conf.validate().is_err());

        conf.endpoint = "https://console.example.com".to_string();
        conf.api_key = "  ".to_string();
        assert!(conf.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = ClientConfig::from_file("/nonexistent/reconciler.toml").unwrap_err();
        assert!(matches!(err, ReconcileError::ConfigError(_)));
    }
}

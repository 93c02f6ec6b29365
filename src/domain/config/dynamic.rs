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

use super::ClientConfig;
use crate::shared::error::{ReconcileError, Result};
use std::collections::HashMap;

/// Parse `-D key=value` properties.
pub fn parse_dynamic_configs(configs: &[String]) -> Result<HashMap<String, String>> {
    let mut map = HashMap::new();

    for config in configs {
        let (key, value) = config.split_once('=').ok_or_else(|| {
            ReconcileError::config_error(format!(
                "Invalid config format: '{}'. Expected 'key=value'",
                config
            ))
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(ReconcileError::config_error(format!(
                "Empty key in config: '{}'",
                config
            )));
        }

        map.insert(key.to_string(), value.trim().to_string());
    }

    Ok(map)
}

pub fn apply_to_client_config(
    configs: &HashMap<String, String>,
    conf: &mut ClientConfig,
) -> Result<()> {
    for (key, value) in configs {
        match key.as_str() {
            "api.endpoint" => conf.endpoint = value.clone(),
            "api.key" => conf.api_key = value.clone(),
            "api.organization" => conf.organization = value.clone(),
            "api.partner" => conf.partner = value.clone(),
            "api.project" => conf.project = value.clone(),
            "query.limit" => {
                conf.page_limit = value.parse::<u32>().map_err(|e| {
                    ReconcileError::config_error(format!("Invalid query.limit '{}': {}", value, e))
                })?
            }
            "http.timeout-secs" => {
                conf.timeout_secs = value.parse::<u64>().map_err(|e| {
                    ReconcileError::config_error(format!(
                        "Invalid http.timeout-secs '{}': {}",
                        value, e
                    ))
                })?
            }
            _ => {
                return Err(ReconcileError::config_error(format!(
                    "Unknown config property: {}",
                    key
                )))
            }
        }
    }

    Ok(())
}

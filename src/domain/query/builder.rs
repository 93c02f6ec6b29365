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

use crate::domain::config::ApiContext;
use crate::infrastructure::constants::*;
use crate::shared::error::{ReconcileError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered key/value pairs sent to a list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Replaces the value of `key` in place, or appends it.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.into(),
            None => self.push(key, value),
        }
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> Vec<&str> {
        self.0.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        f.write_str(&joined)
    }
}

/// Match criteria for a users query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsersFilter {
    pub project: Option<String>,
    pub role: Option<String>,
    pub group: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub case_sensitive: bool,
    pub allow_more_than_one: bool,
}

/// The single name field requested, applied after the fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    pub field: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltQuery {
    pub params: QueryParams,
    pub post_filter: Option<FieldMatch>,
}

pub struct QueryBuilder;

impl QueryBuilder {
    /// Builds the list parameters for `filter`. Pure; never touches the network.
    pub fn build(context: &ApiContext, filter: &UsersFilter) -> Result<BuiltQuery> {
        let name_filters: Vec<FieldMatch> = [
            (FIELD_EMAIL, &filter.email),
            (FIELD_FIRST_NAME, &filter.first_name),
            (FIELD_LAST_NAME, &filter.last_name),
        ]
        .into_iter()
        .filter_map(|(field, value)| {
            present(value).map(|v| FieldMatch {
                field,
                value: v.to_string(),
            })
        })
        .collect();

        if name_filters.len() > 1 {
            let fields: Vec<&str> = name_filters.iter().map(|m| m.field).collect();
            return Err(ReconcileError::validation(format!(
                "specify only one of email, first_name or last_name (got {})",
                fields.join(", ")
            )));
        }

        let mut params = QueryParams::new();
        params.push(PARAM_ORGANIZATION, context.organization.as_str());
        params.push(PARAM_PARTNER, context.partner.as_str());
        params.push(PARAM_LIMIT, context.limit.to_string());
        params.push(PARAM_OFFSET, DEFAULT_OFFSET.to_string());

        if let Some(role) = present(&filter.role) {
            params.push(PARAM_ROLE, role);
        }
        if let Some(project) = present(&filter.project) {
            params.push(PARAM_PROJECT, project);
        }
        if let Some(group) = present(&filter.group) {
            params.push(PARAM_GROUP, group);
        }

        let post_filter = name_filters.into_iter().next();
        if let Some(m) = &post_filter {
            params.push(PARAM_TEXT_QUERY, m.value.as_str());
        }

        Ok(BuiltQuery {
            params,
            post_filter,
        })
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

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

use super::Kind;
use crate::infrastructure::constants::IDENTITY_SEPARATOR;
use crate::shared::error::{ReconcileError, Result};
use std::fmt;

/// Composite key of a resource that exists remotely: `project:name` for
/// project scoped kinds, the bare name otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    pub project: Option<String>,
    pub name: String,
}

impl Identity {
    pub fn new(kind: Kind, name: impl Into<String>, project: Option<&str>) -> Self {
        let project = if kind.is_project_scoped() {
            project.map(str::to_string)
        } else {
            None
        };
        Self {
            project,
            name: name.into(),
        }
    }

    pub fn parse(kind: Kind, raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ReconcileError::validation(format!(
                "{} identity must not be empty",
                kind
            )));
        }

        if !kind.is_project_scoped() {
            return Ok(Self {
                project: None,
                name: raw.to_string(),
            });
        }

        match raw.split_once(IDENTITY_SEPARATOR) {
            Some((project, name)) if !project.is_empty() && !name.is_empty() => Ok(Self {
                project: Some(project.to_string()),
                name: name.to_string(),
            }),
            _ => Err(ReconcileError::validation(format!(
                "invalid {} identity '{}', expected <project>{}<name>",
                kind, raw, IDENTITY_SEPARATOR
            ))),
        }
    }

    pub fn project_or_empty(&self) -> &str {
        self.project.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.project {
            Some(project) => write!(f, "{}{}{}", project, IDENTITY_SEPARATOR, self.name),
            None => f.write_str(&self.name),
        }
    }
}

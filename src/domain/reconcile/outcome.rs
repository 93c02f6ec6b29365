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

use crate::domain::resource::Identity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A message returned next to a result rather than instead of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
}

impl Diagnostic {
    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            summary: summary.into(),
            detail: detail.into(),
        }
    }
}

/// Result of a successful create, update or import.
#[derive(Debug, Clone, PartialEq)]
pub struct Applied<T> {
    pub record: T,
    pub identity: Identity,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Applied<T> {
    pub fn new(record: T, identity: Identity) -> Self {
        Self {
            record,
            identity,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }
}

/// Result of a read. `record` and `identity` are empty when the resource no
/// longer exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Observed<T> {
    pub record: Option<T>,
    pub identity: Option<Identity>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Observed<T> {
    pub fn found(record: T, identity: Identity) -> Self {
        Self {
            record: Some(record),
            identity: Some(identity),
            diagnostics: Vec::new(),
        }
    }

    pub fn gone() -> Self {
        Self {
            record: None,
            identity: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn is_gone(&self) -> bool {
        self.identity.is_none()
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }
}

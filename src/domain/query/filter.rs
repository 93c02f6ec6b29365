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

use crate::domain::record::UserRecord;
use crate::domain::resource::User;
use crate::infrastructure::constants::{FIELD_EMAIL, FIELD_FIRST_NAME, FIELD_LAST_NAME};
use crate::shared::error::{ReconcileError, Result};

/// Exposes named string fields to the post-fetch matcher.
pub trait Filterable {
    fn field(&self, name: &str) -> Option<&str>;
}

impl Filterable for User {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            FIELD_EMAIL => Some(self.email()),
            FIELD_FIRST_NAME => Some(&self.spec.first_name),
            FIELD_LAST_NAME => Some(&self.spec.last_name),
            _ => None,
        }
    }
}

impl Filterable for UserRecord {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            FIELD_EMAIL => Some(&self.email),
            FIELD_FIRST_NAME => Some(&self.first_name),
            FIELD_LAST_NAME => Some(&self.last_name),
            _ => None,
        }
    }
}

/// Keeps the entries whose `field` equals `value` exactly.
///
/// An empty `field` passes `results` through untouched. Zero matches is always
/// an error; more than one is an error unless `allow_multiple` is set. Matches
/// keep the order they were fetched in.
pub fn filter_matches<T: Filterable>(
    results: Vec<T>,
    field: &str,
    value: &str,
    case_sensitive: bool,
    allow_multiple: bool,
) -> Result<Vec<T>> {
    if field.is_empty() {
        return Ok(results);
    }

    let wanted = normalize(value, case_sensitive);
    let matched: Vec<T> = results
        .into_iter()
        .filter(|item| {
            item.field(field)
                .map(|actual| normalize(actual, case_sensitive) == wanted)
                .unwrap_or(false)
        })
        .collect();

    match matched.len() {
        0 => Err(ReconcileError::NoMatch {
            field: field.to_string(),
            value: value.to_string(),
        }),
        1 => Ok(matched),
        count if !allow_multiple => Err(ReconcileError::AmbiguousMatch {
            field: field.to_string(),
            value: value.to_string(),
            count,
        }),
        _ => Ok(matched),
    }
}

fn normalize(value: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        value.to_string()
    } else {
        value.to_lowercase()
    }
}

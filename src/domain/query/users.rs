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

use super::builder::{QueryBuilder, QueryParams, UsersFilter};
use super::filter::filter_matches;
use crate::domain::config::ApiContext;
use crate::domain::record::{StructMapper, UserRecord};
use crate::domain::resource::{Kind, User};
use crate::infrastructure::client::ManagementClient;
use crate::infrastructure::constants::{DEFAULT_OFFSET, PARAM_OFFSET};
use crate::shared::error::Result;
use std::sync::Arc;
use tracing::debug;

/// Lists users matching a filter.
///
/// Pages through the list endpoint `limit` entries at a time until a short
/// page comes back, then applies the exact name match over everything fetched.
pub struct UsersQuery {
    client: Arc<dyn ManagementClient>,
    context: ApiContext,
}

impl UsersQuery {
    pub fn new(client: Arc<dyn ManagementClient>, context: ApiContext) -> Self {
        Self { client, context }
    }

    pub async fn run(&self, filter: &UsersFilter) -> Result<Vec<UserRecord>> {
        let built = QueryBuilder::build(&self.context, filter)?;
        let users = self.fetch_all(built.params).await?;

        let (field, value) = match &built.post_filter {
            Some(m) => (m.field, m.value.as_str()),
            None => ("", ""),
        };
        let matched = filter_matches(
            users,
            field,
            value,
            filter.case_sensitive,
            filter.allow_more_than_one,
        )?;

        Ok(matched.iter().map(UserRecord::from_domain).collect())
    }

    async fn fetch_all(&self, mut params: QueryParams) -> Result<Vec<User>> {
        let limit = self.context.limit.max(1) as usize;
        let mut offset = DEFAULT_OFFSET as usize;
        let mut users = Vec::new();

        loop {
            params.set(PARAM_OFFSET, offset.to_string());
            debug!(params = %params, "listing users");

            let page = self
                .client
                .list(Kind::User, &params)
                .await
                .map_err(|e| e.with_context("list", Kind::User, &params))?;
            let fetched = page.len();
            for object in page {
                users.push(User::from_object(object)?);
            }

            if fetched < limit {
                return Ok(users);
            }
            offset += fetched;
        }
    }
}

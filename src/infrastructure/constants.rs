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

/// Identity
pub const IDENTITY_SEPARATOR: char = ':';

/// API paths
pub const API_PREFIX: &str = "apis";
pub const INFRA_GROUP: &str = "infra.k8smgmt.io";
pub const SYSTEM_GROUP: &str = "system.k8smgmt.io";
pub const USER_GROUP: &str = "user.k8smgmt.io";
pub const API_VERSION: &str = "v3";
pub const BOOTSTRAP_SUFFIX: &str = "download";

/// Authentication header
pub const API_KEY_HEADER: &str = "x-api-key";

/// List query keys, in the order the API expects them
pub const PARAM_ORGANIZATION: &str = "organization";
pub const PARAM_PARTNER: &str = "partner";
pub const PARAM_LIMIT: &str = "limit";
pub const PARAM_OFFSET: &str = "offset";
pub const PARAM_ROLE: &str = "role";
pub const PARAM_PROJECT: &str = "project";
pub const PARAM_GROUP: &str = "group";
pub const PARAM_TEXT_QUERY: &str = "q";

/// Post-fetch filter fields
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_FIRST_NAME: &str = "first_name";
pub const FIELD_LAST_NAME: &str = "last_name";

/// Paging defaults
pub const DEFAULT_PAGE_LIMIT: u32 = 100;
pub const DEFAULT_OFFSET: u32 = 0;

/// HTTP defaults
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = "resource-reconciler";

/// Cluster types
pub const CLUSTER_TYPE_IMPORTED: &str = "imported";

/// Artifact file names
pub const KUBECONFIG_FILE_PREFIX: &str = "kubeconfig-";
pub const KUBECONFIG_FILE_SUFFIX: &str = ".yaml";
pub const BOOTSTRAP_FILE_SUFFIX: &str = "-bootstrap.yaml";

/// Environment variables
pub const ENV_CONFIG_FILE: &str = "RECONCILER_CONFIG";
pub const ENV_ENDPOINT: &str = "RECONCILER_ENDPOINT";
pub const ENV_API_KEY: &str = "RECONCILER_API_KEY";

//! Resource lifecycle and query commands

use crate::domain::config::{apply_to_client_config, parse_dynamic_configs, ClientConfig};
use crate::domain::query::{UsersFilter, UsersQuery};
use crate::domain::reconcile::{
    Applied, ArtifactDescriptor, ClusterDescriptor, GroupReconciler, Observed, ProjectReconciler,
};
use crate::domain::record::{BootstrapFileRecord, Declaration, KubeconfigRecord};
use crate::domain::resource::{Identity, Kind};
use crate::infrastructure::client::{HttpManagementClient, ManagementClient};
use crate::infrastructure::constants::{
    ENV_API_KEY, ENV_CONFIG_FILE, ENV_ENDPOINT, IDENTITY_SEPARATOR,
};
use super::display::{StatusIcon, TableRenderer};
use clap::Parser;
use colored::Colorize;
use serde::Serialize;
use std::sync::Arc;

/// Connection options shared by every command
#[derive(clap::Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Path to the client configuration file (TOML)
    #[arg(long, env = ENV_CONFIG_FILE, value_name = "PATH")]
    pub config: Option<String>,

    /// Management API endpoint, overrides the config file
    #[arg(long, env = ENV_ENDPOINT)]
    pub endpoint: Option<String>,

    /// API key, overrides the config file
    #[arg(long, env = ENV_API_KEY, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Dynamic configuration properties (-D key=value)
    ///
    /// Keys: api.endpoint, api.key, api.organization, api.partner, api.project,
    /// query.limit, http.timeout-secs
    ///
    /// Example: -Dapi.organization=acme -Dquery.limit=50
    #[arg(short = 'D', value_name = "KEY=VALUE")]
    pub properties: Vec<String>,
}

impl ConnectionArgs {
    /// Priority: flags/env > -D > config file > defaults
    pub fn load(&self) -> anyhow::Result<ClientConfig> {
        let mut conf = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if !self.properties.is_empty() {
            let dynamic = parse_dynamic_configs(&self.properties)
                .map_err(|e| anyhow::anyhow!("Failed to parse dynamic configs: {}", e))?;
            apply_to_client_config(&dynamic, &mut conf)?;
        }

        if let Some(endpoint) = &self.endpoint {
            conf.endpoint = endpoint.clone();
        }
        if let Some(api_key) = &self.api_key {
            conf.api_key = api_key.clone();
        }

        Ok(conf)
    }

    pub fn connect(&self) -> anyhow::Result<(ClientConfig, Arc<dyn ManagementClient>)> {
        let conf = self.load()?;
        let client = HttpManagementClient::new(&conf)
            .map_err(|e| anyhow::anyhow!("Failed to create API client: {}", e))?;
        Ok((conf, Arc::new(client)))
    }
}

/// A bare cluster name is qualified with the configured project.
fn qualify(kind: Kind, raw: &str, conf: &ClientConfig) -> String {
    if kind.is_project_scoped() && !raw.contains(IDENTITY_SEPARATOR) {
        format!("{}{}{}", conf.project, IDENTITY_SEPARATOR, raw)
    } else {
        raw.to_string()
    }
}

fn parse_kind(raw: &str) -> anyhow::Result<Kind> {
    match raw.parse::<Kind>()? {
        Kind::User => anyhow::bail!("users are read-only, use the `users` command"),
        kind => Ok(kind),
    }
}

fn print_applied<T: Serialize>(applied: &Applied<T>) -> anyhow::Result<()> {
    println!("{} {}", StatusIcon::SUCCESS.green(), applied.identity);
    print!("{}", serde_yaml::to_string(&applied.record)?);
    if applied.has_warnings() {
        println!();
        println!("{}", TableRenderer::new().render_diagnostics(&applied.diagnostics));
    }
    Ok(())
}

fn print_observed<T: Serialize>(observed: &Observed<T>, requested: &Identity) -> anyhow::Result<()> {
    match &observed.record {
        Some(record) => {
            print!("{}", serde_yaml::to_string(record)?);
            if observed.has_warnings() {
                println!();
                println!("{}", TableRenderer::new().render_diagnostics(&observed.diagnostics));
            }
        }
        None => println!(
            "{} {} no longer exists remotely",
            StatusIcon::GONE.bright_black(),
            requested
        ),
    }
    Ok(())
}

#[derive(Parser, Debug)]
pub struct ApplyCommand {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Declaration file (YAML, one or more documents)
    #[arg(long, short = 'f', value_name = "FILE")]
    pub file: String,

    /// Identity of an existing resource to update instead of creating
    #[arg(long)]
    pub id: Option<String>,
}

impl ApplyCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let content = std::fs::read_to_string(&self.file)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", self.file, e))?;
        let declarations = Declaration::from_yaml(&content)?;
        if declarations.is_empty() {
            anyhow::bail!("{} declares no resources", self.file);
        }
        if self.id.is_some() && declarations.len() > 1 {
            anyhow::bail!("--id can only be used with a single declaration");
        }

        let (conf, client) = self.connection.connect()?;

        for declaration in &declarations {
            let identity = match &self.id {
                Some(raw) => Some(Identity::parse(
                    declaration.kind(),
                    &qualify(declaration.kind(), raw, &conf),
                )?),
                None => None,
            };

            match declaration {
                Declaration::Cluster(record) => {
                    let descriptor = ClusterDescriptor::new(client.clone());
                    let applied = match &identity {
                        Some(id) => descriptor.update(id, record).await?,
                        None => descriptor.create(record).await?,
                    };
                    print_applied(&applied)?;
                }
                Declaration::Group(record) => {
                    let reconciler = GroupReconciler::new(client.clone());
                    let applied = match &identity {
                        Some(id) => reconciler.update(id, record).await?,
                        None => reconciler.create(record).await?,
                    };
                    print_applied(&applied)?;
                }
                Declaration::Project(record) => {
                    let reconciler = ProjectReconciler::new(client.clone());
                    let applied = match &identity {
                        Some(id) => reconciler.update(id, record).await?,
                        None => reconciler.create(record).await?,
                    };
                    print_applied(&applied)?;
                }
            }
        }

        Ok(())
    }
}

#[derive(Parser, Debug)]
pub struct GetCommand {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Resource kind (cluster, group, project)
    #[arg(long, short = 'k')]
    pub kind: String,

    /// Identity: `project:name` for clusters, the name otherwise
    #[arg(long)]
    pub id: String,
}

impl GetCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let kind = parse_kind(&self.kind)?;
        let (conf, client) = self.connection.connect()?;
        let identity = Identity::parse(kind, &qualify(kind, &self.id, &conf))?;

        match kind {
            Kind::Cluster => {
                let observed = ClusterDescriptor::new(client).read(&identity).await?;
                print_observed(&observed, &identity)
            }
            Kind::Group => {
                let observed = GroupReconciler::new(client).read(&identity).await?;
                print_observed(&observed, &identity)
            }
            Kind::Project => {
                let observed = ProjectReconciler::new(client).read(&identity).await?;
                print_observed(&observed, &identity)
            }
            Kind::User => anyhow::bail!("users are read-only"),
        }
    }
}

#[derive(Parser, Debug)]
pub struct DeleteCommand {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Resource kind (cluster, group, project)
    #[arg(long, short = 'k')]
    pub kind: String,

    /// Identity: `project:name` for clusters, the name otherwise
    #[arg(long)]
    pub id: String,
}

impl DeleteCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let kind = parse_kind(&self.kind)?;
        let (conf, client) = self.connection.connect()?;
        let identity = Identity::parse(kind, &qualify(kind, &self.id, &conf))?;

        match kind {
            Kind::Cluster => ClusterDescriptor::new(client).delete(&identity).await?,
            Kind::Group => GroupReconciler::new(client).delete(&identity).await?,
            Kind::Project => ProjectReconciler::new(client).delete(&identity).await?,
            Kind::User => anyhow::bail!("users are read-only"),
        }

        println!("{} {} {} deleted", StatusIcon::SUCCESS.green(), kind, identity);
        Ok(())
    }
}

#[derive(Parser, Debug)]
pub struct ImportCommand {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Resource kind (cluster, group, project)
    #[arg(long, short = 'k')]
    pub kind: String,

    /// Identity: `project:name` for clusters, the name otherwise
    #[arg(long)]
    pub id: String,
}

impl ImportCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let kind = parse_kind(&self.kind)?;
        let (conf, client) = self.connection.connect()?;
        let raw = qualify(kind, &self.id, &conf);

        match kind {
            Kind::Cluster => print_applied(&ClusterDescriptor::new(client).import(&raw).await?),
            Kind::Group => print_applied(&GroupReconciler::new(client).import(&raw).await?),
            Kind::Project => print_applied(&ProjectReconciler::new(client).import(&raw).await?),
            Kind::User => anyhow::bail!("users are read-only"),
        }
    }
}

#[derive(Parser, Debug)]
pub struct UsersCommand {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[arg(long)]
    pub project: Option<String>,

    #[arg(long)]
    pub role: Option<String>,

    #[arg(long)]
    pub group: Option<String>,

    /// Only one of --email, --first-name and --last-name may be given
    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub case_sensitive: bool,

    /// Accept several users matching the name filter
    #[arg(long)]
    pub allow_more_than_one: bool,

    /// Print YAML instead of a table
    #[arg(long)]
    pub yaml: bool,
}

impl UsersCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let filter = UsersFilter {
            project: self.project.clone(),
            role: self.role.clone(),
            group: self.group.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            case_sensitive: self.case_sensitive,
            allow_more_than_one: self.allow_more_than_one,
        };

        let (conf, client) = self.connection.connect()?;
        let users = UsersQuery::new(client, conf.api_context()).run(&filter).await?;

        if self.yaml {
            print!("{}", serde_yaml::to_string(&users)?);
        } else {
            print!("{}", TableRenderer::new().render_users(&users));
        }
        Ok(())
    }
}

#[derive(Parser, Debug)]
pub struct KubeconfigCommand {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Cluster name
    #[arg(long, short = 'c')]
    pub cluster: String,

    #[arg(long, short = 'n')]
    pub namespace: Option<String>,

    /// Folder to write the kubeconfig into; printed to stdout when omitted
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// File name inside --output-dir (default: kubeconfig-<cluster>.yaml)
    #[arg(long)]
    pub filename: Option<String>,
}

impl KubeconfigCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let (_, client) = self.connection.connect()?;
        let record = KubeconfigRecord {
            cluster: self.cluster.clone(),
            namespace: self.namespace.clone(),
            output_folder_path: self.output_dir.clone(),
            filename: self.filename.clone(),
            kubeconfig: None,
        };

        let out = ArtifactDescriptor::new(client).read_kubeconfig(&record).await?;
        match &self.output_dir {
            Some(dir) => println!(
                "{} kubeconfig for {} written to {}",
                StatusIcon::SUCCESS.green(),
                self.cluster,
                dir
            ),
            None => print!("{}", out.kubeconfig.unwrap_or_default()),
        }
        Ok(())
    }
}

#[derive(Parser, Debug)]
pub struct BootstrapCommand {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Cluster name
    #[arg(long, short = 'c')]
    pub name: String,

    /// Project of the cluster (default: api.project from config)
    #[arg(long, short = 'p')]
    pub project: Option<String>,

    /// File or folder to write the manifest to; printed to stdout when omitted
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<String>,
}

impl BootstrapCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let (conf, client) = self.connection.connect()?;
        let record = BootstrapFileRecord {
            name: self.name.clone(),
            project: self.project.clone().unwrap_or_else(|| conf.project.clone()),
            output_path: self.output.clone(),
            bootstrap_data: None,
        };

        let out = ArtifactDescriptor::new(client).read_bootstrap(&record).await?;
        match &self.output {
            Some(path) => println!(
                "{} bootstrap manifest for {} written to {}",
                StatusIcon::SUCCESS.green(),
                self.name,
                path
            ),
            None => print!("{}", out.bootstrap_data.unwrap_or_default()),
        }
        Ok(())
    }
}

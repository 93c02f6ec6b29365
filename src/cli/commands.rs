// CLI command definitions

use super::resource::{
    ApplyCommand, BootstrapCommand, DeleteCommand, GetCommand, ImportCommand, KubeconfigCommand,
    UsersCommand,
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "resource-reconciler",
    version,
    about = "Declarative cluster, group and project management",
    long_about = "Reconciles declared clusters, groups and projects against a remote management API"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Create the resources declared in a YAML file, or update one by identity
    Apply(ApplyCommand),

    /// Read a resource's current remote state
    Get(GetCommand),

    /// Delete a resource (succeeds if already gone)
    Delete(DeleteCommand),

    /// Adopt an existing remote resource by identity
    Import(ImportCommand),

    /// Query users with filters
    Users(UsersCommand),

    /// Download a kubeconfig for a cluster
    Kubeconfig(KubeconfigCommand),

    /// Download the bootstrap manifest of an imported cluster
    Bootstrap(BootstrapCommand),
}

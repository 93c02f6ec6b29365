//! Build automation for resource-reconciler
//!
//! Usage: cargo xtask <command>
//!
//! Available commands:
//! - build: Build the project
//! - test: Run tests
//! - init-config: Write a starter client configuration
//! - smoke: Check every CLI subcommand parses its help
//! - ci: Run CI checks

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use xshell::{cmd, Shell};

const BIN: &str = "resource-reconciler";

const SUBCOMMANDS: &[&str] = &[
    "apply",
    "get",
    "delete",
    "import",
    "users",
    "kubeconfig",
    "bootstrap",
];

const SAMPLE_CONFIG: &str = r#"# Client configuration for resource-reconciler
endpoint = "https://console.example.com"
api_key = ""
organization = ""
partner = ""
project = "default"
page_limit = 100
timeout_secs = 30
"#;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for resource-reconciler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the project
    Build {
        /// Build in release mode
        #[arg(long)]
        release: bool,
    },
    /// Run tests
    Test {
        /// Run only integration tests
        #[arg(long)]
        integration: bool,
    },
    /// Write a starter client configuration file
    InitConfig {
        /// Destination path
        #[arg(long, default_value = "reconciler.toml")]
        path: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Run `--help` for every CLI subcommand
    Smoke,
    /// Run CI checks (format, clippy, test, smoke)
    Ci,
    /// Format code
    Format {
        /// Check formatting without modifying files
        #[arg(long)]
        check: bool,
    },
    /// Run clippy
    Clippy,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    sh.change_dir(project_root());

    match cli.command {
        Commands::Build { release } => build(&sh, release),
        Commands::Test { integration } => test(&sh, integration),
        Commands::InitConfig { path, force } => init_config(&sh, &path, force),
        Commands::Smoke => smoke(&sh),
        Commands::Ci => ci(&sh),
        Commands::Format { check } => format(&sh, check),
        Commands::Clippy => clippy(&sh),
    }
}

fn build(sh: &Shell, release: bool) -> Result<()> {
    println!("🔨 Building {}...", BIN);

    if release {
        cmd!(sh, "cargo build --release").run()?;
        println!("✅ Release build completed: target/release/{}", BIN);
    } else {
        cmd!(sh, "cargo build").run()?;
        println!("✅ Debug build completed: target/debug/{}", BIN);
    }

    Ok(())
}

fn test(sh: &Shell, integration: bool) -> Result<()> {
    println!("🧪 Running tests...");

    if integration {
        cmd!(sh, "cargo test --test '*'").run()?;
    } else {
        cmd!(sh, "cargo test --all").run()?;
    }

    println!("✅ All tests passed");
    Ok(())
}

fn init_config(sh: &Shell, path: &str, force: bool) -> Result<()> {
    let target = project_root().join(path);
    if target.exists() && !force {
        anyhow::bail!("{} already exists, pass --force to overwrite", target.display());
    }

    sh.write_file(&target, SAMPLE_CONFIG)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    println!("✅ Wrote {}", target.display());
    println!("   Fill in endpoint and api_key, or export RECONCILER_ENDPOINT / RECONCILER_API_KEY");
    Ok(())
}

fn smoke(sh: &Shell) -> Result<()> {
    println!("💨 Smoke-testing {} subcommands...", BIN);

    for &sub in SUBCOMMANDS {
        cmd!(sh, "cargo run --quiet --bin {BIN} -- {sub} --help")
            .quiet()
            .ignore_stdout()
            .run()
            .with_context(|| format!("`{} {} --help` failed", BIN, sub))?;
        println!("  ✓ {}", sub);
    }

    println!("✅ All subcommands parse");
    Ok(())
}

fn ci(sh: &Shell) -> Result<()> {
    println!("🔍 Running CI checks...");

    println!("\n📝 Checking formatting...");
    format(sh, true)?;

    println!("\n🔧 Running clippy...");
    clippy(sh)?;

    println!("\n🧪 Running tests...");
    test(sh, false)?;

    println!("\n💨 Running smoke checks...");
    smoke(sh)?;

    println!("\n✅ All CI checks passed!");
    Ok(())
}

fn format(sh: &Shell, check: bool) -> Result<()> {
    if check {
        cmd!(sh, "cargo fmt --all -- --check").run()?;
        println!("✅ Code formatting is correct");
    } else {
        cmd!(sh, "cargo fmt --all").run()?;
        println!("✅ Code formatted");
    }
    Ok(())
}

fn clippy(sh: &Shell) -> Result<()> {
    cmd!(
        sh,
        "cargo clippy --all-targets --all-features -- -D warnings"
    )
    .run()?;
    println!("✅ Clippy checks passed");
    Ok(())
}

fn project_root() -> PathBuf {
    Path::new(&env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(1)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")))
        .to_path_buf()
}

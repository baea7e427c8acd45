//! Toolcase CLI library
//!
//! This library contains all the CLI logic for toolcase, making it reusable
//! for testing and integration with other tools.

pub mod cmd;
pub mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use toolcase_core::{Outcome, ProvisionReport};

/// Toolcase - provision configuration for managed command-line tools
#[derive(Parser)]
#[command(name = "toolcase")]
#[command(about = "Provision tool configuration with encrypted secrets")]
#[command(version)]
#[command(long_about = "Provision tool configuration with encrypted secrets

toolcase locates a tool's configuration folder (current or legacy layout),
bootstraps a master-password security file by delegating encryption to the
tool itself, and renders the settings template, replacing placeholders like
[PASSWORD] with encrypted secret values.")]
pub struct Cli {
    /// User configuration root
    #[arg(long, env = "TOOLCASE_CONF_DIR", value_name = "DIR")]
    pub conf: Option<PathBuf>,

    /// Settings repository checkout (templates live under templates/conf)
    #[arg(long, env = "TOOLCASE_SETTINGS_DIR", value_name = "DIR")]
    pub settings: Option<PathBuf>,

    /// Tool profile file (toolcase.toml)
    #[arg(long, env = "TOOLCASE_PROFILES", value_name = "FILE")]
    pub profiles: Option<PathBuf>,

    /// Enable verbose output (shows DEBUG level logs)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "TOOLCASE_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the toolcase CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Provision a tool's security and settings files
    Provision(cmd::provision::ProvisionCommand),

    /// Manage tool plugins
    #[command(subcommand)]
    Plugin(PluginCommands),
}

/// Plugin management commands
#[derive(Subcommand)]
pub enum PluginCommands {
    /// Download a plugin into the tool's extension directory
    Install(cmd::plugin::InstallCommand),
}

/// Resolved base directories shared by all commands
pub struct RuntimeDirs {
    /// User configuration root
    pub conf_dir: PathBuf,
    /// Settings repository checkout
    pub settings_dir: PathBuf,
    /// Base directory holding tool installations
    pub tools_dir: PathBuf,
    /// Loaded tool profiles
    pub profiles: toolcase_config::ToolProfiles,
}

fn toolcase_home() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join(".toolcase")
}

fn resolve_dirs(cli: &Cli) -> Result<RuntimeDirs> {
    let home = toolcase_home();
    let conf_dir = cli.conf.clone().unwrap_or_else(|| home.join("conf"));
    let settings_dir = cli.settings.clone().unwrap_or_else(|| home.join("settings"));
    let profile_path = cli
        .profiles
        .clone()
        .unwrap_or_else(|| home.join("toolcase.toml"));
    let profiles = toolcase_config::ToolProfiles::load(&profile_path)
        .map_err(|e| anyhow::anyhow!("Failed to load tool profiles: {e}"))?;
    Ok(RuntimeDirs {
        conf_dir,
        settings_dir,
        tools_dir: home.join("tools"),
        profiles,
    })
}

/// Print a per-step summary of a provisioning run
pub fn print_report(report: &ProvisionReport) {
    for step in report.steps() {
        match &step.outcome {
            Outcome::Success(Some(msg)) => println!("{} {}: {msg}", "✓".green(), step.name),
            Outcome::Success(None) => println!("{} {}", "✓".green(), step.name),
            Outcome::Error(msg) => println!("{} {}: {msg}", "✗".red(), step.name),
        }
    }
    if report.has_failures() {
        println!(
            "{}: some provisioning steps failed; the tool is installed but its configuration is incomplete",
            "Warning".yellow()
        );
    }
}

/// # Errors
///
/// Returns an error if logging initialization or profile loading fails.
/// Individual provisioning step failures are reported but do not abort the
/// run; the tool degrades to "installed, configuration incomplete".
pub fn run(cli: Cli) -> Result<()> {
    toolcase_config::logging::init(cli.verbose, cli.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let dirs = resolve_dirs(&cli)?;

    let report = match &cli.command {
        Commands::Provision(provision_cmd) => provision_cmd.execute(&dirs)?,
        Commands::Plugin(PluginCommands::Install(install_cmd)) => install_cmd.execute(&dirs),
    };
    print_report(&report);
    Ok(())
}

//! Provision command

use crate::RuntimeDirs;
use crate::prompt::InteractivePrompt;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use toolcase_core::{ProvisionContext, ProvisionReport};
use toolcase_engine::{GitRemote, Provisioner};
use toolcase_secrets::CommandEncryptor;
use tracing::debug;

/// Provision a tool's security and settings files
#[derive(Args)]
pub struct ProvisionCommand {
    /// Name of the tool to provision (e.g. mvn)
    pub tool: String,

    /// Installation root of the tool (default: <toolcase home>/tools/<tool>)
    #[arg(long, value_name = "DIR")]
    pub tool_root: Option<PathBuf>,

    /// Encrypt-capable executable to delegate to (default: the tool name)
    #[arg(long, value_name = "BIN")]
    pub executable: Option<String>,
}

impl ProvisionCommand {
    /// Run the provisioner for this tool
    pub fn execute(&self, dirs: &RuntimeDirs) -> Result<ProvisionReport> {
        let profile = dirs.profiles.get(&self.tool);
        let tool_root = self
            .tool_root
            .clone()
            .unwrap_or_else(|| dirs.tools_dir.join(&self.tool));
        let context = ProvisionContext::new(
            dirs.conf_dir.clone(),
            dirs.settings_dir.clone(),
            tool_root,
        );

        let executable = self.executable.clone().unwrap_or_else(|| self.tool.clone());
        debug!("Delegating encryption to {executable}");
        let encryptor = CommandEncryptor::new(
            executable,
            profile.encrypt_master_password_arg.clone(),
            profile.encrypt_password_arg.clone(),
            profile.security_property.clone(),
        );

        let mut report = ProvisionReport::new();
        Provisioner::new(
            &self.tool,
            &context,
            &profile,
            &encryptor,
            &InteractivePrompt,
            &GitRemote,
        )
        .provision(&mut report);
        Ok(report)
    }
}

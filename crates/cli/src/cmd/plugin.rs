//! Plugin install command

use crate::RuntimeDirs;
use clap::Args;
use std::path::PathBuf;
use toolcase_core::{ProvisionContext, ProvisionReport};
use toolcase_engine::{HttpDownloader, PluginDescriptor, install_plugin};

/// Download a plugin into a tool's extension directory
#[derive(Args)]
pub struct InstallCommand {
    /// Name of the tool owning the plugin
    pub tool: String,

    /// Plugin name; the artifact lands at lib/ext/<name>.jar
    pub name: String,

    /// Download URL of the plugin artifact
    pub url: String,

    /// Installation root of the tool (default: <toolcase home>/tools/<tool>)
    #[arg(long, value_name = "DIR")]
    pub tool_root: Option<PathBuf>,
}

impl InstallCommand {
    /// Download the plugin and verify its presence
    pub fn execute(&self, dirs: &RuntimeDirs) -> ProvisionReport {
        let tool_root = self
            .tool_root
            .clone()
            .unwrap_or_else(|| dirs.tools_dir.join(&self.tool));
        let context = ProvisionContext::new(
            dirs.conf_dir.clone(),
            dirs.settings_dir.clone(),
            tool_root,
        );
        let descriptor = PluginDescriptor {
            name: self.name.clone(),
            url: self.url.clone(),
        };

        let mut report = ProvisionReport::new();
        install_plugin(&context, &descriptor, &HttpDownloader::new(), &mut report);
        report
    }
}

//! Plugin installation into a tool's extension directory

use std::path::PathBuf;
use toolcase_core::{Downloader, ProvisionContext, ProvisionReport, Step};
use tracing::warn;

/// A named plugin artifact and where to fetch it
#[derive(Debug, Clone)]
pub struct PluginDescriptor {
    /// Plugin name; the artifact lands at `lib/ext/<name>.jar`
    pub name: String,
    /// Download URL
    pub url: String,
}

/// Expected artifact path for `descriptor` under the tool root
#[must_use]
pub fn plugin_path(context: &ProvisionContext, descriptor: &PluginDescriptor) -> PathBuf {
    context
        .tool_root()
        .join("lib")
        .join("ext")
        .join(format!("{}.jar", descriptor.name))
}

/// Download a plugin and verify its presence
///
/// The extension mechanism path is fixed per tool: `<tool_root>/lib/ext/`.
/// No retry is attempted here; retry policy belongs to the downloader.
pub fn install_plugin(
    context: &ProvisionContext,
    descriptor: &PluginDescriptor,
    downloader: &dyn Downloader,
    report: &mut ProvisionReport,
) {
    let target = plugin_path(context, descriptor);
    let mut step = Step::new(report, format!("Install plugin {}", descriptor.name));

    if let Err(e) = downloader.download(&descriptor.url, &target) {
        warn!("Download of plugin {} failed: {e}", descriptor.name);
    }

    // The existence check is the verdict, whatever the downloader reported
    if target.exists() {
        step.success_msg(format!(
            "Successfully added {} to {}",
            descriptor.name,
            target.display()
        ));
    } else {
        step.error(format!(
            "Plugin {} has wrong properties\nPlease check the plugin descriptor; expected artifact at {}",
            descriptor.name,
            target.display()
        ));
    }
}

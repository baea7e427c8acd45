//! Tool profiles
//!
//! A profile bundles the per-tool constants the provisioning engine needs:
//! configuration folder names (current and legacy), settings file names, the
//! arguments of the tool's own encrypt sub-commands, and the project-default
//! settings repository URL. Profiles load from `toolcase.toml` with a
//! Maven-flavored built-in default.

use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default documentation page referenced from IO error messages
pub const DEFAULT_DOCS_URL: &str = "https://github.com/toolcase/toolcase/blob/main/docs/conf.md";

/// Per-tool provisioning constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ToolProfile {
    /// Preferred configuration folder name
    #[serde(default = "default_config_folder")]
    pub config_folder: String,

    /// Deprecated configuration folder name, kept for backward compatibility
    #[serde(default = "default_legacy_folder")]
    pub legacy_folder: String,

    /// Rendered settings file name
    #[serde(default = "default_settings_file")]
    pub settings_file: String,

    /// Security file name holding the encrypted master password
    #[serde(default = "default_security_file")]
    pub security_file: String,

    /// Argument selecting the tool's encrypt-master-password sub-command
    #[serde(default = "default_encrypt_master_arg")]
    pub encrypt_master_password_arg: String,

    /// Argument selecting the tool's encrypt-password sub-command
    #[serde(default = "default_encrypt_password_arg")]
    pub encrypt_password_arg: String,

    /// Property prefix pointing the tool at the security file
    #[serde(default = "default_security_property")]
    pub security_property: String,

    /// Remote URL of the project-default settings repository
    ///
    /// When the user's settings checkout resolves to this URL, template
    /// substitution is bypassed and the template is copied verbatim.
    #[serde(default = "default_settings_url")]
    pub default_settings_url: String,

    /// Documentation pointer included in IO error messages
    #[serde(default = "default_docs_url")]
    pub docs_url: String,
}

fn default_config_folder() -> String {
    "mvn".to_string()
}

fn default_legacy_folder() -> String {
    ".m2".to_string()
}

fn default_settings_file() -> String {
    "settings.xml".to_string()
}

fn default_security_file() -> String {
    "settings-security.xml".to_string()
}

fn default_encrypt_master_arg() -> String {
    "--encrypt-master-password".to_string()
}

fn default_encrypt_password_arg() -> String {
    "--encrypt-password".to_string()
}

fn default_security_property() -> String {
    "-Dsettings.security=".to_string()
}

fn default_settings_url() -> String {
    "https://github.com/toolcase/settings".to_string()
}

fn default_docs_url() -> String {
    DEFAULT_DOCS_URL.to_string()
}

impl Default for ToolProfile {
    fn default() -> Self {
        Self {
            config_folder: default_config_folder(),
            legacy_folder: default_legacy_folder(),
            settings_file: default_settings_file(),
            security_file: default_security_file(),
            encrypt_master_password_arg: default_encrypt_master_arg(),
            encrypt_password_arg: default_encrypt_password_arg(),
            security_property: default_security_property(),
            default_settings_url: default_settings_url(),
            docs_url: default_docs_url(),
        }
    }
}

/// On-disk profile file structure
#[derive(Debug, Default, Serialize, Deserialize)]
struct ProfileFile {
    #[serde(default)]
    tools: IndexMap<String, ToolProfile>,
}

/// Loaded tool profiles with built-in fallback
#[derive(Debug, Default)]
pub struct ToolProfiles {
    tools: IndexMap<String, ToolProfile>,
}

impl ToolProfiles {
    /// Load profiles from a `toolcase.toml` file
    ///
    /// A missing file is not an error; it yields an empty set so every
    /// lookup falls back to the built-in default profile.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let file: ProfileFile = toml::from_str(&content).map_err(|e| Error::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { tools: file.tools })
    }

    /// Get the profile for `tool`, falling back to the built-in default
    #[must_use]
    pub fn get(&self, tool: &str) -> ToolProfile {
        self.tools.get(tool).cloned().unwrap_or_default()
    }

    /// Names of explicitly configured tools
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(String::as_str)
    }
}

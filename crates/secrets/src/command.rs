//! Encrypt-capable external command integration
//!
//! Delegates encryption to the managed tool's own sub-commands, e.g.
//! `mvn --encrypt-master-password <value>` and
//! `mvn --encrypt-password <value> -Dsettings.security=<path>`.

use crate::{Encryptor, Error, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Encryptor backed by an external encrypt-capable executable
pub struct CommandEncryptor {
    executable: String,
    encrypt_master_password_arg: String,
    encrypt_password_arg: String,
    security_property: String,
}

impl CommandEncryptor {
    /// Create an encryptor for `executable` with explicit sub-command arguments
    #[must_use]
    pub fn new(
        executable: impl Into<String>,
        encrypt_master_password_arg: impl Into<String>,
        encrypt_password_arg: impl Into<String>,
        security_property: impl Into<String>,
    ) -> Self {
        Self {
            executable: executable.into(),
            encrypt_master_password_arg: encrypt_master_password_arg.into(),
            encrypt_password_arg: encrypt_password_arg.into(),
            security_property: security_property.into(),
        }
    }

    /// The security-file pointer argument, with backslashes escaped so the
    /// path survives embedding in a process argument on Windows-style paths
    fn security_property_arg(&self, security_file: &Path) -> String {
        let escaped = security_file.display().to_string().replace('\\', "\\\\");
        format!("{}{escaped}", self.security_property)
    }

    /// Run the executable and capture the first stdout line
    fn run_capture_first_line(&self, args: &[&str]) -> Result<String> {
        debug!(
            "Invoking {} {}",
            self.executable,
            args.first().copied().unwrap_or_default()
        );
        let output = Command::new(&self.executable)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(Error::Io)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::EncryptionFailed(stderr.trim().to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        // Only the first line is the result; anything after is tool chatter
        match stdout.lines().next() {
            Some(line) if !line.trim().is_empty() => Ok(line.trim().to_string()),
            _ => Err(Error::NoOutput),
        }
    }
}

impl Encryptor for CommandEncryptor {
    fn encrypt_master_password(&self, plain: &str) -> Result<String> {
        self.run_capture_first_line(&[&self.encrypt_master_password_arg, plain])
    }

    fn encrypt_secret(&self, plain: &str, security_file: &Path) -> Result<String> {
        let security_arg = self.security_property_arg(security_file);
        self.run_capture_first_line(&[&self.encrypt_password_arg, plain, &security_arg])
    }
}

//! Idempotent provisioning of a tool's configuration files
//!
//! Two independent two-state flows per run, each guarded by an existence
//! check:
//!
//! 1. Security file: absent -> bootstrap master password and write; present
//!    -> no-op.
//! 2. Settings file: absent -> render the template, encrypting a secret for
//!    each placeholder; present -> no-op. Creation is skipped (with a
//!    warning, not an error) when no security file or no template exists.
//!
//! Failures are localized per artifact and surfaced through steps; the run
//! always continues to best-effort completion.

use std::fs;
use std::path::Path;
use toolcase_config::layout;
use toolcase_config::profile::ToolProfile;
use toolcase_core::{ProvisionContext, ProvisionReport, RemoteLookup, SecretPrompt, Step};
use toolcase_secrets::{Encryptor, generate_master_password, security_file_xml};
use toolcase_template::{VariableSyntax, find_variables, substitute};
use tracing::{debug, info, warn};

/// Provisions a tool's security and settings files
pub struct Provisioner<'a> {
    tool: &'a str,
    context: &'a ProvisionContext,
    profile: &'a ToolProfile,
    encryptor: &'a dyn Encryptor,
    prompt: &'a dyn SecretPrompt,
    remote: &'a dyn RemoteLookup,
    syntax: VariableSyntax,
}

impl<'a> Provisioner<'a> {
    /// Create a provisioner for `tool` using the square placeholder syntax
    #[must_use]
    pub fn new(
        tool: &'a str,
        context: &'a ProvisionContext,
        profile: &'a ToolProfile,
        encryptor: &'a dyn Encryptor,
        prompt: &'a dyn SecretPrompt,
        remote: &'a dyn RemoteLookup,
    ) -> Self {
        Self {
            tool,
            context,
            profile,
            encryptor,
            prompt,
            remote,
            syntax: VariableSyntax::square(),
        }
    }

    /// Override the placeholder syntax
    #[must_use]
    pub fn with_syntax(mut self, syntax: VariableSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Run one provisioning pass, recording outcomes into `report`
    ///
    /// Re-resolves folders and re-checks file existence from scratch, so
    /// repeated runs are no-ops for files that already exist.
    pub fn provision(&self, report: &mut ProvisionReport) {
        // Locate templates. Absence is not fatal: the tool may be usable
        // without custom settings.
        let templates_base = self.context.templates_conf_dir();
        let Some((template_dir, template_layout)) = layout::probe(&templates_base, self.profile)
        else {
            warn!(
                "No {} settings template found in {} (neither {} nor {}) - skipping configuration",
                self.tool,
                templates_base.display(),
                self.profile.config_folder,
                self.profile.legacy_folder,
            );
            return;
        };

        // The destination mirrors the template layout: legacy in, legacy out.
        let conf_dir =
            match layout::resolve_or_create(self.context.conf_dir(), self.profile, template_layout)
            {
                Ok(dir) => dir,
                Err(e) => {
                    warn!(
                        "Failed to resolve {} config folder under {}: {e}",
                        self.tool,
                        self.context.conf_dir().display()
                    );
                    return;
                }
            };
        debug!(
            "Provisioning {} configuration in {} ({template_layout:?} layout)",
            self.tool,
            conf_dir.display()
        );

        let security_file = conf_dir.join(&self.profile.security_file);
        self.create_security_file(&security_file, report);

        let settings_file = conf_dir.join(&self.profile.settings_file);
        let template_file = template_dir.join(&self.profile.settings_file);
        self.create_settings_file(&settings_file, &security_file, &template_file, report);
    }

    fn create_security_file(&self, security_file: &Path, report: &mut ProvisionReport) {
        if security_file.exists() {
            debug!("Security file already exists at {}", security_file.display());
            return;
        }
        let mut step = Step::new(
            report,
            format!(
                "Create {} settings security file at {}",
                self.tool,
                security_file.display()
            ),
        );

        let master_password = generate_master_password();
        let encrypted = match self.encryptor.encrypt_master_password(&master_password) {
            Ok(encrypted) => encrypted,
            Err(e) => {
                step.error(format!("Failed to encrypt master password: {e}"));
                return;
            }
        };

        if let Err(e) = fs::write(security_file, security_file_xml(&encrypted)) {
            step.error(format!(
                "Failed to create settings security file at: {}. For further details see:\n{}\n{e}",
                security_file.display(),
                self.profile.docs_url
            ));
            return;
        }
        step.success();
    }

    fn create_settings_file(
        &self,
        settings_file: &Path,
        security_file: &Path,
        template_file: &Path,
        report: &mut ProvisionReport,
    ) {
        if settings_file.exists() {
            debug!("Settings file already exists at {}", settings_file.display());
            return;
        }
        // Settings creation is gated on the security file: without it the
        // tool cannot decrypt the secrets we would embed. Skip, don't fail.
        if !security_file.exists() {
            warn!(
                "No security file at {} - skipping {} settings creation",
                security_file.display(),
                self.tool
            );
            return;
        }
        if !template_file.exists() {
            warn!(
                "Missing {} settings template at {} - skipping settings creation",
                self.tool,
                template_file.display()
            );
            return;
        }

        let mut step = Step::new(
            report,
            format!(
                "Create {} settings file at {}",
                self.tool,
                settings_file.display()
            ),
        );

        let content = match fs::read_to_string(template_file) {
            Ok(content) => content,
            Err(e) => {
                step.error(format!(
                    "Failed to read settings template at: {}. For further details see:\n{}\n{e}",
                    template_file.display(),
                    self.profile.docs_url
                ));
                return;
            }
        };

        let content = match self.render(&content, security_file) {
            Ok(content) => content,
            Err(message) => {
                step.error(message);
                return;
            }
        };

        if let Some(parent) = settings_file.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            step.error(format!(
                "Failed to create settings file at: {}. For further details see:\n{}\n{e}",
                settings_file.display(),
                self.profile.docs_url
            ));
            return;
        }
        if let Err(e) = fs::write(settings_file, content) {
            step.error(format!(
                "Failed to create settings file at: {}. For further details see:\n{}\n{e}",
                settings_file.display(),
                self.profile.docs_url
            ));
            return;
        }
        step.success();
    }

    /// Render the template, substituting an encrypted secret per placeholder
    ///
    /// When the settings checkout points at the project-default repository
    /// the template is copied verbatim: the default template carries no
    /// secrets requiring encryption. The bypass is all-or-nothing.
    fn render(&self, template: &str, security_file: &Path) -> Result<String, String> {
        match self.remote.retrieve_remote_url(self.context.settings_dir()) {
            Some(url) if url == self.profile.default_settings_url => {
                info!("Settings checkout is the project default - copying template verbatim");
                return Ok(template.to_string());
            }
            Some(_) => {}
            None => {
                warn!("Failed to determine git remote URL for settings folder.");
            }
        }

        let mut content = template.to_string();
        for variable in &find_variables(template, &self.syntax) {
            let plain = self
                .prompt
                .ask(&format!("Please enter secret value for variable {variable}:"))
                .map_err(|e| format!("Failed to read secret for variable {variable}: {e}"))?;
            let encrypted = self
                .encryptor
                .encrypt_secret(&plain, security_file)
                .map_err(|e| format!("Failed to encrypt secret for variable {variable}: {e}"))?;
            info!("Encrypted value for variable {variable}");
            content = substitute(&content, variable, &encrypted, &self.syntax);
        }
        Ok(content)
    }
}

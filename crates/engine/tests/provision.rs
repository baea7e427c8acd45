//! Integration tests for the provisioning engine
//!
//! Exercises the full provisioner against real temporary directories with
//! fake collaborators standing in for the encrypt command, the interactive
//! prompt, the git remote, and the downloader.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use toolcase_core::{
    Downloader, Error as CoreError, ProvisionContext, ProvisionReport, RemoteLookup, SecretPrompt,
};
use toolcase_engine::{PluginDescriptor, Provisioner, install_plugin};
use toolcase_secrets::{Encryptor, Error as SecretError};

const TEMPLATE: &str = "<settings>\n  <user>[USER]</user>\n  <pass>[PASS]</pass>\n  <alt>[USER]</alt>\n</settings>\n";

struct FakeEncryptor {
    fail_master: bool,
    fail_secret: bool,
}

impl FakeEncryptor {
    fn ok() -> Self {
        Self {
            fail_master: false,
            fail_secret: false,
        }
    }
}

impl Encryptor for FakeEncryptor {
    fn encrypt_master_password(&self, plain: &str) -> Result<String, SecretError> {
        if self.fail_master {
            return Err(SecretError::NoOutput);
        }
        Ok(format!("{{MASTER:{plain}}}"))
    }

    fn encrypt_secret(&self, plain: &str, _security_file: &Path) -> Result<String, SecretError> {
        if self.fail_secret {
            return Err(SecretError::EncryptionFailed("broken pipe".to_string()));
        }
        Ok(format!("ENC[{plain}]"))
    }
}

/// Answers each prompt with a value derived from the variable name
struct FakePrompt;

impl SecretPrompt for FakePrompt {
    fn ask(&self, prompt: &str) -> Result<String, CoreError> {
        let name = prompt
            .split_whitespace()
            .last()
            .unwrap()
            .trim_end_matches(':');
        Ok(format!("plain-{name}"))
    }
}

struct FakeRemote(Option<String>);

impl RemoteLookup for FakeRemote {
    fn retrieve_remote_url(&self, _path: &Path) -> Option<String> {
        self.0.clone()
    }
}

struct Fixture {
    _root: TempDir,
    context: ProvisionContext,
    profile: toolcase_config::ToolProfile,
}

impl Fixture {
    /// Build a settings checkout with a template in the given layout folder
    fn new(template_folder: &str) -> Self {
        let root = TempDir::new().unwrap();
        let settings_dir = root.path().join("settings");
        let conf_dir = root.path().join("conf");
        let tool_root = root.path().join("tools").join("mvn");

        let template_dir = settings_dir
            .join("templates")
            .join("conf")
            .join(template_folder);
        fs::create_dir_all(&template_dir).unwrap();
        fs::write(template_dir.join("settings.xml"), TEMPLATE).unwrap();
        fs::create_dir_all(&conf_dir).unwrap();

        let context = ProvisionContext::new(conf_dir, settings_dir, tool_root);
        Self {
            _root: root,
            context,
            profile: toolcase_config::ToolProfile::default(),
        }
    }

    /// Like `new`, but without any template folder at all
    fn without_templates() -> Self {
        let fixture = Self::new("mvn");
        let template_dir = fixture
            .context
            .templates_conf_dir()
            .join(&fixture.profile.config_folder);
        fs::remove_dir_all(template_dir).unwrap();
        fixture
    }

    fn security_file(&self) -> PathBuf {
        self.context.conf_dir().join("mvn").join("settings-security.xml")
    }

    fn settings_file(&self) -> PathBuf {
        self.context.conf_dir().join("mvn").join("settings.xml")
    }

    fn provision(
        &self,
        encryptor: &dyn Encryptor,
        remote: &FakeRemote,
        report: &mut ProvisionReport,
    ) {
        let provisioner = Provisioner::new(
            "mvn",
            &self.context,
            &self.profile,
            encryptor,
            &FakePrompt,
            remote,
        );
        provisioner.provision(report);
    }
}

#[test]
fn provision_creates_security_and_settings_files() {
    let fixture = Fixture::new("mvn");
    let remote = FakeRemote(Some("https://github.com/me/my-settings".to_string()));
    let mut report = ProvisionReport::new();

    fixture.provision(&FakeEncryptor::ok(), &remote, &mut report);

    assert!(report.succeeded("settings security file"));
    assert!(report.succeeded("settings file at"));
    assert!(!report.has_failures());

    let security = fs::read_to_string(fixture.security_file()).unwrap();
    assert!(security.contains("<master>{MASTER:"));
    assert_eq!(security.matches("<master>").count(), 1);

    let settings = fs::read_to_string(fixture.settings_file()).unwrap();
    assert!(settings.contains("<user>ENC[plain-USER]</user>"));
    assert!(settings.contains("<pass>ENC[plain-PASS]</pass>"));
    // Repeated placeholder gets the same substitution
    assert!(settings.contains("<alt>ENC[plain-USER]</alt>"));
    assert!(!settings.contains("[USER]"));
}

#[test]
fn provision_is_idempotent() {
    let fixture = Fixture::new("mvn");
    let remote = FakeRemote(Some("https://github.com/me/my-settings".to_string()));

    let mut first = ProvisionReport::new();
    fixture.provision(&FakeEncryptor::ok(), &remote, &mut first);
    let security_before = fs::read(fixture.security_file()).unwrap();
    let settings_before = fs::read(fixture.settings_file()).unwrap();

    let mut second = ProvisionReport::new();
    fixture.provision(&FakeEncryptor::ok(), &remote, &mut second);

    // Second run records no steps and leaves the files untouched
    assert!(second.is_empty());
    assert_eq!(fs::read(fixture.security_file()).unwrap(), security_before);
    assert_eq!(fs::read(fixture.settings_file()).unwrap(), settings_before);
}

#[test]
fn default_settings_url_bypasses_substitution() {
    let fixture = Fixture::new("mvn");
    let remote = FakeRemote(Some(fixture.profile.default_settings_url.clone()));
    let mut report = ProvisionReport::new();

    fixture.provision(&FakeEncryptor::ok(), &remote, &mut report);

    // Byte-identical to the template, placeholders and all
    let settings = fs::read_to_string(fixture.settings_file()).unwrap();
    assert_eq!(settings, TEMPLATE);
    assert!(report.succeeded("settings file at"));
}

#[test]
fn unresolvable_remote_still_substitutes() {
    let fixture = Fixture::new("mvn");
    let remote = FakeRemote(None);
    let mut report = ProvisionReport::new();

    fixture.provision(&FakeEncryptor::ok(), &remote, &mut report);

    let settings = fs::read_to_string(fixture.settings_file()).unwrap();
    assert!(settings.contains("ENC[plain-USER]"));
    assert!(!report.has_failures());
}

#[test]
fn missing_template_skips_everything() {
    let fixture = Fixture::without_templates();
    let remote = FakeRemote(None);
    let mut report = ProvisionReport::new();

    fixture.provision(&FakeEncryptor::ok(), &remote, &mut report);

    assert!(report.is_empty());
    assert!(!fixture.security_file().exists());
    assert!(!fixture.settings_file().exists());
}

#[test]
fn legacy_template_layout_is_mirrored() {
    let fixture = Fixture::new(".m2");
    let remote = FakeRemote(Some("https://github.com/me/my-settings".to_string()));
    let mut report = ProvisionReport::new();

    fixture.provision(&FakeEncryptor::ok(), &remote, &mut report);

    // Legacy in, legacy out: the destination keeps the legacy layout
    let legacy_dir = fixture.context.conf_dir().join(".m2");
    assert!(legacy_dir.join("settings-security.xml").exists());
    assert!(legacy_dir.join("settings.xml").exists());
    assert!(!fixture.context.conf_dir().join("mvn").exists());
}

#[test]
fn failed_master_password_gates_settings_creation() {
    let fixture = Fixture::new("mvn");
    let remote = FakeRemote(Some("https://github.com/me/my-settings".to_string()));
    let mut report = ProvisionReport::new();

    let encryptor = FakeEncryptor {
        fail_master: true,
        fail_secret: false,
    };
    fixture.provision(&encryptor, &remote, &mut report);

    // Security file step errored; settings creation was skipped without
    // recording any settings step or error.
    assert!(report.failed("settings security file"));
    assert_eq!(report.steps().len(), 1);
    assert!(!fixture.security_file().exists());
    assert!(!fixture.settings_file().exists());
}

#[test]
fn secret_encryption_failure_is_isolated() {
    let fixture = Fixture::new("mvn");
    let remote = FakeRemote(Some("https://github.com/me/my-settings".to_string()));
    let mut report = ProvisionReport::new();

    let encryptor = FakeEncryptor {
        fail_master: false,
        fail_secret: true,
    };
    fixture.provision(&encryptor, &remote, &mut report);

    // The completed security-file step stays successful even though the
    // settings file failed on its first variable.
    assert!(report.succeeded("settings security file"));
    assert!(report.failed("settings file at"));
    assert!(fixture.security_file().exists());
    assert!(!fixture.settings_file().exists());
}

#[test]
fn preexisting_security_file_is_never_regenerated() {
    let fixture = Fixture::new("mvn");
    let remote = FakeRemote(Some("https://github.com/me/my-settings".to_string()));

    let conf_mvn = fixture.context.conf_dir().join("mvn");
    fs::create_dir_all(&conf_mvn).unwrap();
    fs::write(fixture.security_file(), "hand-written").unwrap();

    let mut report = ProvisionReport::new();
    fixture.provision(&FakeEncryptor::ok(), &remote, &mut report);

    assert_eq!(
        fs::read_to_string(fixture.security_file()).unwrap(),
        "hand-written"
    );
    // Only the settings file needed creating
    assert_eq!(report.steps().len(), 1);
    assert!(report.succeeded("settings file at"));
}

// Plugin installation

/// Downloader that writes fixed content, or nothing at all
struct FakeDownloader {
    produce_file: bool,
}

impl Downloader for FakeDownloader {
    fn download(&self, _url: &str, dest: &Path) -> Result<(), CoreError> {
        if self.produce_file {
            fs::create_dir_all(dest.parent().unwrap())?;
            fs::write(dest, b"jar-bytes")?;
        }
        Ok(())
    }
}

#[test]
fn plugin_install_success() {
    let fixture = Fixture::new("mvn");
    let descriptor = PluginDescriptor {
        name: "demo".to_string(),
        url: "https://example.org/demo.jar".to_string(),
    };
    let mut report = ProvisionReport::new();

    install_plugin(
        &fixture.context,
        &descriptor,
        &FakeDownloader { produce_file: true },
        &mut report,
    );

    let expected = fixture
        .context
        .tool_root()
        .join("lib")
        .join("ext")
        .join("demo.jar");
    assert!(expected.exists());
    assert!(report.succeeded("Install plugin demo"));
}

#[test]
fn plugin_install_missing_artifact_is_error() {
    let fixture = Fixture::new("mvn");
    let descriptor = PluginDescriptor {
        name: "demo".to_string(),
        url: "https://example.org/demo.jar".to_string(),
    };
    let mut report = ProvisionReport::new();

    install_plugin(
        &fixture.context,
        &descriptor,
        &FakeDownloader {
            produce_file: false,
        },
        &mut report,
    );

    assert!(report.failed("Install plugin demo"));
    let toolcase_core::Outcome::Error(message) = &report.steps()[0].outcome else {
        panic!("expected an error outcome");
    };
    assert!(message.contains("demo.jar"));
}

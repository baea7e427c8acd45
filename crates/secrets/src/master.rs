//! Master password generation and the security file document

use rand::RngCore;

/// Number of random bytes in a generated master password
const MASTER_PASSWORD_BYTES: usize = 20;

/// Generate a random master password, base64 encoded
///
/// The plaintext only ever exists in memory long enough to be handed to the
/// tool's encrypt-master-password sub-command.
#[must_use]
pub fn generate_master_password() -> String {
    let mut bytes = [0u8; MASTER_PASSWORD_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    base64::Engine::encode(&base64::engine::general_purpose::STANDARD, bytes)
}

/// Render the security file holding one encrypted master password
///
/// A fixed small XML document with exactly one `<master>` element.
#[must_use]
pub fn security_file_xml(encrypted_master_password: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <settingsSecurity>\n  <master>{encrypted_master_password}</master>\n\
         </settingsSecurity>"
    )
}

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::core::errors::{FieldCryptError, Result};
use crate::core::traits::crypto::{CryptoProvider, Decryptor, Encryptor};

/// Reversible stand-in provider that Base64-encodes field values.
///
/// Not encryption. Useful for wiring checks, demos, and tests where no
/// real key store is available: every credential resolves to the same
/// transform, and encrypt followed by decrypt is the identity.
#[derive(Debug, Default)]
pub struct Base64Backend;

impl CryptoProvider for Base64Backend {
    fn encryptor(&self, _credential_name: Option<&str>) -> Result<Box<dyn Encryptor>> {
        Ok(Box::new(Base64Encryptor))
    }

    fn decryptor(&self, _credential_name: Option<&str>) -> Result<Box<dyn Decryptor>> {
        Ok(Box::new(Base64Decryptor))
    }
}

/// Encodes plaintext as standard Base64.
#[derive(Debug, Default)]
pub struct Base64Encryptor;

impl Encryptor for Base64Encryptor {
    fn encrypt(&self, plain_text: &str) -> Result<String> {
        Ok(STANDARD.encode(plain_text.as_bytes()))
    }
}

/// Decodes standard Base64 back to UTF-8 plaintext.
#[derive(Debug, Default)]
pub struct Base64Decryptor;

impl Decryptor for Base64Decryptor {
    fn decrypt(&self, cipher_text: &str) -> Result<String> {
        let bytes = STANDARD
            .decode(cipher_text)
            .map_err(|e| FieldCryptError::DecryptionFailed {
                reason: format!("invalid Base64: {e}"),
            })?;

        String::from_utf8(bytes).map_err(|e| FieldCryptError::DecryptionFailed {
            reason: format!("decoded bytes are not UTF-8: {e}"),
        })
    }
}

/// All domain errors for fieldcrypt.
///
/// Providers construct these; the adapter never does. Anything that
/// fails below the adapter propagates unchanged to the serializer,
/// which surfaces it as a failure of the whole pass.
#[derive(Debug, thiserror::Error)]
pub enum FieldCryptError {
    #[error("cannot resolve an encryptor for credential {credential}: {reason}")]
    EncryptorUnavailable { credential: String, reason: String },

    #[error("cannot resolve a decryptor for credential {credential}: {reason}")]
    DecryptorUnavailable { credential: String, reason: String },

    #[error("encryption failed: {reason}")]
    EncryptionFailed { reason: String },

    #[error("decryption failed: {reason}")]
    DecryptionFailed { reason: String },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FieldCryptError>;

use crate::core::errors::Result;

/// Port for crypto providers.
///
/// A provider resolves credential names into one-directional transform
/// capabilities. Implementations own key lookup and the actual cipher;
/// this crate never sees key material. `None` selects the provider's
/// default credential and is distinct from a credential named `""`.
///
/// One provider instance typically lives for the whole application and
/// is shared across concurrent passes.
pub trait CryptoProvider: Send + Sync {
    /// Resolve an encryptor bound to the given credential.
    fn encryptor(&self, credential_name: Option<&str>) -> Result<Box<dyn Encryptor>>;

    /// Resolve a decryptor bound to the given credential.
    fn decryptor(&self, credential_name: Option<&str>) -> Result<Box<dyn Decryptor>>;
}

/// Plaintext-to-ciphertext transform bound to one credential.
///
/// Scoped to a single pass; the pass owner drops it when the pass
/// ends.
pub trait Encryptor: Send {
    fn encrypt(&self, plain_text: &str) -> Result<String>;
}

/// Ciphertext-to-plaintext transform bound to one credential.
///
/// Same lifecycle rules as [`Encryptor`].
pub trait Decryptor: Send {
    fn decrypt(&self, cipher_text: &str) -> Result<String>;
}

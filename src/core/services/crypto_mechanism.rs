use crate::core::errors::Result;
use crate::core::models::key_identifier::KeyIdentifier;
use crate::core::traits::crypto::CryptoProvider;
use crate::core::traits::mechanism::{DecryptState, EncryptState, EncryptionMechanism};

/// Bridges the serializer's encryption port to a [`CryptoProvider`].
///
/// Holds the injected provider for its whole lifetime and nothing
/// else, so one instance is shared read-only across any number of
/// concurrent passes without locking. All per-pass state lives in the
/// state the serializer threads through each call.
pub struct CryptoMechanism<C: CryptoProvider> {
    provider: C,
}

impl<C: CryptoProvider> CryptoMechanism<C> {
    /// Wrap a provider.
    pub fn new(provider: C) -> Self {
        Self { provider }
    }

    /// The provider performing the actual cryptography.
    pub fn provider(&self) -> &C {
        &self.provider
    }
}

impl<C: CryptoProvider> EncryptionMechanism for CryptoMechanism<C> {
    /// Resolve-or-reuse the pass's encryptor, then transform.
    ///
    /// Resolution goes through the state, so the provider is consulted
    /// once per pass. Provider and transform failures propagate
    /// unchanged; nothing is caught or wrapped here.
    fn encrypt(
        &self,
        plain_text: &str,
        key: &KeyIdentifier,
        state: &mut EncryptState,
    ) -> Result<String> {
        let encryptor =
            state.get_or_resolve(|| self.provider.encryptor(key.as_credential_name()))?;
        encryptor.encrypt(plain_text)
    }

    /// Decrypt twin of [`encrypt`](Self::encrypt).
    fn decrypt(
        &self,
        cipher_text: &str,
        key: &KeyIdentifier,
        state: &mut DecryptState,
    ) -> Result<String> {
        let decryptor =
            state.get_or_resolve(|| self.provider.decryptor(key.as_credential_name()))?;
        decryptor.decrypt(cipher_text)
    }
}

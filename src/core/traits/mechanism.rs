use serde_json::Value;

use crate::core::errors::Result;
use crate::core::models::key_identifier::KeyIdentifier;
use crate::core::models::serialization_state::SerializationState;
use crate::core::traits::crypto::{Decryptor, Encryptor};

/// State threaded through one serialize pass.
pub type EncryptState = SerializationState<Box<dyn Encryptor>>;

/// State threaded through one deserialize pass.
pub type DecryptState = SerializationState<Box<dyn Decryptor>>;

/// Port the host serializer drives once per field tagged for
/// encryption.
///
/// The serializer creates a fresh state at the start of a pass and
/// threads it through every call belonging to that pass; a pass is
/// either a serialize pass (encrypt, [`EncryptState`]) or a
/// deserialize pass (decrypt, [`DecryptState`]), never both.
///
/// Ships with one production implementation
/// ([`CryptoMechanism`](crate::CryptoMechanism)); test doubles
/// implement it directly.
pub trait EncryptionMechanism: Send + Sync {
    /// Encrypt one field value.
    fn encrypt(
        &self,
        plain_text: &str,
        key: &KeyIdentifier,
        state: &mut EncryptState,
    ) -> Result<String>;

    /// Decrypt one field value.
    fn decrypt(
        &self,
        cipher_text: &str,
        key: &KeyIdentifier,
        state: &mut DecryptState,
    ) -> Result<String>;

    /// Encrypt with the field key as the serializer's raw metadata
    /// value.
    ///
    /// Type-erasure shim for serializers whose field metadata is
    /// untyped: converts once at the edge and delegates to
    /// [`encrypt`](Self::encrypt). No logic of its own.
    fn encrypt_value_keyed(
        &self,
        plain_text: &str,
        key: &Value,
        state: &mut EncryptState,
    ) -> Result<String> {
        self.encrypt(plain_text, &KeyIdentifier::from_value(key), state)
    }

    /// Decrypt twin of [`encrypt_value_keyed`](Self::encrypt_value_keyed).
    fn decrypt_value_keyed(
        &self,
        cipher_text: &str,
        key: &Value,
        state: &mut DecryptState,
    ) -> Result<String> {
        self.decrypt(cipher_text, &KeyIdentifier::from_value(key), state)
    }
}

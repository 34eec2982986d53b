//! Field-level encryption adapter for object serializers.
//!
//! Serializers that support tagging individual fields for transparent
//! encryption need someone to actually do the cryptography. This crate
//! is the bridge: it exposes the [`EncryptionMechanism`] port the
//! serializer drives once per tagged field, and implements it with
//! [`CryptoMechanism`], which delegates to any [`CryptoProvider`] the
//! host application injects.
//!
//! A serialization pass threads a fresh [`SerializationState`] through
//! every field it touches, so the provider lookup (key-store access,
//! credential validation) happens once per pass instead of once per
//! field.
//!
//! ```
//! use fieldcrypt::adapters::crypto::base64_backend::Base64Backend;
//! use fieldcrypt::{CryptoMechanism, EncryptState, EncryptionMechanism, KeyIdentifier};
//!
//! let mechanism = CryptoMechanism::new(Base64Backend);
//! let mut state = EncryptState::new();
//!
//! let sealed = mechanism
//!     .encrypt("123", &KeyIdentifier::Default, &mut state)
//!     .unwrap();
//! assert_eq!(sealed, "MTIz");
//! ```
//!
//! One state instance serves exactly one credential for its pass's
//! lifetime; see [`SerializationState`] for the reuse contract and its
//! known limitation.

pub mod adapters;
pub mod core;

pub use crate::core::errors::{FieldCryptError, Result};
pub use crate::core::models::key_identifier::KeyIdentifier;
pub use crate::core::models::serialization_state::SerializationState;
pub use crate::core::services::crypto_mechanism::CryptoMechanism;
pub use crate::core::traits::crypto::{CryptoProvider, Decryptor, Encryptor};
pub use crate::core::traits::mechanism::{DecryptState, EncryptState, EncryptionMechanism};

use serde_json::Value;

/// Selects the credential a field is encrypted or decrypted with.
///
/// Serializer field metadata may carry the key as an arbitrary value;
/// it is converted to a `KeyIdentifier` once at the boundary (see
/// [`KeyIdentifier::from_value`]) instead of being threaded through
/// the adapter untyped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum KeyIdentifier {
    /// Use the provider's default credential.
    #[default]
    Default,
    /// Use the credential registered under this name.
    Named(String),
}

impl KeyIdentifier {
    /// Identifier for a named credential.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// The credential name forwarded to the provider.
    ///
    /// `Default` maps to `None`, which is forwarded unchanged — the
    /// provider distinguishes "default credential" from a credential
    /// literally named `""`.
    pub fn as_credential_name(&self) -> Option<&str> {
        match self {
            Self::Default => None,
            Self::Named(name) => Some(name),
        }
    }

    /// Convert a serializer-supplied metadata value into an identifier.
    ///
    /// Null selects the default credential, strings are used verbatim,
    /// and any other value is named by its canonical text rendering
    /// (so a numeric key `123` selects the credential `"123"`).
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Default,
            Value::String(name) => Self::Named(name.clone()),
            other => Self::Named(other.to_string()),
        }
    }
}

impl From<&str> for KeyIdentifier {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<Option<&str>> for KeyIdentifier {
    fn from(name: Option<&str>) -> Self {
        match name {
            Some(name) => Self::Named(name.to_string()),
            None => Self::Default,
        }
    }
}

impl std::fmt::Display for KeyIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "(default)"),
            Self::Named(name) => write!(f, "'{name}'"),
        }
    }
}

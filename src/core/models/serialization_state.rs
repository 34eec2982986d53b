use crate::core::errors::Result;

/// Single-slot memo threaded through one serialization pass.
///
/// The serializer creates one fresh state per pass and hands it to
/// every encrypt (or decrypt) call belonging to that pass. The first
/// call resolves a capability through the provider and caches it here;
/// every later call reuses the cached capability, so an expensive
/// credential lookup runs once per pass instead of once per field.
///
/// The slot is keyed only on whether it has been populated, never on
/// the credential that populated it. A state instance therefore serves
/// exactly one credential for its pass's lifetime: a pass that mixes
/// credentials through a single state silently keeps using the first
/// credential's capability. Known limitation, kept as-is.
///
/// A state must not be shared across concurrent passes; the `&mut`
/// receiver makes one-pass ownership the only way to use it.
#[derive(Debug, Default)]
pub struct SerializationState<T> {
    cached: Option<T>,
}

impl<T> SerializationState<T> {
    /// An empty state for the start of a pass.
    pub fn new() -> Self {
        Self { cached: None }
    }

    /// Whether a capability has already been resolved into this state.
    pub fn is_populated(&self) -> bool {
        self.cached.is_some()
    }

    /// Return the cached capability, resolving it on first use.
    ///
    /// Later calls ignore the resolver they are given, even a
    /// different closure, and return the first resolved value.
    ///
    /// # Errors
    ///
    /// A failing resolver leaves the slot empty and its error
    /// propagates; a later call is free to retry with a fresh
    /// resolver. Failure never poisons the state.
    pub fn get_or_resolve<F>(&mut self, resolve: F) -> Result<&T>
    where
        F: FnOnce() -> Result<T>,
    {
        if self.cached.is_none() {
            self.cached = Some(resolve()?);
        }
        match self.cached {
            Some(ref capability) => Ok(capability),
            // Slot was filled just above.
            None => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::FieldCryptError;

    #[test]
    fn first_resolver_populates_the_slot() {
        let mut state = SerializationState::new();
        assert!(!state.is_populated());

        let value = state.get_or_resolve(|| Ok(41)).unwrap();
        assert_eq!(*value, 41);
        assert!(state.is_populated());
    }

    #[test]
    fn later_resolvers_are_ignored() {
        let mut state = SerializationState::new();
        let mut resolutions = 0;

        for candidate in [1, 2, 3] {
            let value = state
                .get_or_resolve(|| {
                    resolutions += 1;
                    Ok(candidate)
                })
                .unwrap();
            assert_eq!(*value, 1);
        }

        assert_eq!(resolutions, 1);
    }

    #[test]
    fn failed_resolution_leaves_the_slot_empty() {
        let mut state: SerializationState<i32> = SerializationState::new();

        let err = state
            .get_or_resolve(|| {
                Err(FieldCryptError::EncryptorUnavailable {
                    credential: "(default)".into(),
                    reason: "key store unreachable".into(),
                })
            })
            .unwrap_err();

        assert!(matches!(err, FieldCryptError::EncryptorUnavailable { .. }));
        assert!(!state.is_populated());
    }

    #[test]
    fn retry_after_failure_populates() {
        let mut state = SerializationState::new();

        let _ = state.get_or_resolve(|| {
            Err(FieldCryptError::EncryptorUnavailable {
                credential: "(default)".into(),
                reason: "transient".into(),
            })
        });

        let value = state.get_or_resolve(|| Ok("recovered")).unwrap();
        assert_eq!(*value, "recovered");
        assert!(state.is_populated());
    }
}

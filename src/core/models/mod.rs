pub mod key_identifier;
pub mod serialization_state;

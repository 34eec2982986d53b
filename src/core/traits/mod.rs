pub mod crypto;
pub mod mechanism;

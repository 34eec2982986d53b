pub mod crypto_mechanism;

pub mod base64_backend;

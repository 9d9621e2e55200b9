//! Service Layer

pub mod cipher_service;

pub use cipher_service::CipherService;

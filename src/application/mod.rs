//! Application layer containing business logic services.
//!
//! Services are generic over the repository trait so unit tests can inject
//! `mockall` mocks while the server injects the configured store.

pub mod services;

//! Data transfer objects for the application layer.

mod auth_dto;

pub use auth_dto::{ActivationOutcome, LoginRequest, LoginResponse, TokenSource};

//! Application layer with use cases and DTOs.

/// Data transfer objects.
pub mod dto;
/// Use case implementations.
pub mod use_cases;

pub use dto::{ActivationOutcome, LoginRequest, LoginResponse, TokenSource};
pub use use_cases::{
    ActivateAccountUseCase, LoginUseCase, RegisterUseCase, ResolveTokenUseCase,
};

//! Domain error types.

mod api_error;
mod auth_error;

pub use api_error::ApiError;
pub use auth_error::AuthError;

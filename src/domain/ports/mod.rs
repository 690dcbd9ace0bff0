//! Port definitions for external dependencies.

mod auth_port;
mod catalog_port;
mod token_storage_port;

pub use auth_port::AuthPort;
pub use catalog_port::{BookCatalogPort, ListParams};
pub use token_storage_port::TokenStoragePort;

#[cfg(test)]
pub mod mocks {
    pub use super::auth_port::mock::MockAuthPort;
    pub use super::catalog_port::mock::MockBookCatalog;
    pub use super::token_storage_port::mock::MockTokenStorage;
}

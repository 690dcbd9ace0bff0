//! Book-network API adapter.

mod client;
pub(crate) mod dto;
mod request;

pub use client::BooknetClient;
pub use request::RequestBuilder;

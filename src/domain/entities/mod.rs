//! Domain entity definitions.

mod book;
mod credentials;
mod page;
mod token;

pub use book::{Book, BookId, BorrowedBook};
pub use credentials::{Credentials, Registration};
pub use page::Page;
pub use token::AuthToken;

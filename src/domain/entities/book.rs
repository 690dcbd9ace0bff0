//! Book entities.

use serde::{Deserialize, Serialize};

/// Numeric book identifier assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(pub i64);

impl BookId {
    /// Returns the identifier as a plain integer.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for BookId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A book listed in the network catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Backend identifier.
    pub id: BookId,
    /// Book title.
    pub title: String,
    /// Author name.
    pub author_name: String,
    /// ISBN code.
    pub isbn: String,
    /// Short synopsis.
    pub synopsis: String,
    /// Display name of the owning user.
    pub owner: String,
    /// Average feedback rate.
    pub rate: f64,
    /// Whether the owner archived the book.
    pub archived: bool,
    /// Whether the book can currently be borrowed.
    pub shareable: bool,
}

impl Book {
    /// Returns whether the book is visible to borrowers.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.shareable && !self.archived
    }
}

/// A book the current user has borrowed or returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorrowedBook {
    /// Backend identifier.
    pub id: BookId,
    /// Book title.
    pub title: String,
    /// Author name.
    pub author_name: String,
    /// ISBN code.
    pub isbn: String,
    /// Average feedback rate.
    pub rate: f64,
    /// Whether the borrower returned the book.
    pub returned: bool,
    /// Whether the owner approved the return.
    pub return_approved: bool,
}

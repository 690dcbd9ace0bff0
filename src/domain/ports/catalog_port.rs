//! Book catalog port definition.

use async_trait::async_trait;

use crate::domain::entities::{AuthToken, Book, BookId, BorrowedBook, Page};
use crate::domain::errors::ApiError;

/// Pagination parameters passed through to the backend query string.
///
/// Absent values are omitted from the request entirely; the backend applies
/// its own defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Zero-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub size: Option<u32>,
}

impl ListParams {
    /// Creates params for a specific page.
    #[must_use]
    pub const fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            size: None,
        }
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }
}

/// Port for book catalog operations.
///
/// Every method maps to exactly one backend request per invocation; there is
/// no caching or deduplication across calls.
#[async_trait]
pub trait BookCatalogPort: Send + Sync {
    /// Lists all displayable books in the network.
    async fn find_all_books(
        &self,
        token: &AuthToken,
        params: ListParams,
    ) -> Result<Page<Book>, ApiError>;

    /// Lists books owned by the current user.
    async fn find_all_books_by_owner(
        &self,
        token: &AuthToken,
        params: ListParams,
    ) -> Result<Page<Book>, ApiError>;

    /// Lists books the current user has borrowed.
    async fn find_all_borrowed_books(
        &self,
        token: &AuthToken,
        params: ListParams,
    ) -> Result<Page<BorrowedBook>, ApiError>;

    /// Lists books the current user has returned.
    async fn find_all_returned_books(
        &self,
        token: &AuthToken,
        params: ListParams,
    ) -> Result<Page<BorrowedBook>, ApiError>;

    /// Borrows a book.
    async fn borrow_book(&self, token: &AuthToken, book_id: BookId) -> Result<BookId, ApiError>;

    /// Returns a borrowed book.
    async fn return_book(&self, token: &AuthToken, book_id: BookId) -> Result<BookId, ApiError>;

    /// Approves the return of one of the owner's books.
    async fn approve_return(&self, token: &AuthToken, book_id: BookId)
    -> Result<BookId, ApiError>;

    /// Flips the shareable flag on one of the owner's books.
    async fn toggle_shareable(
        &self,
        token: &AuthToken,
        book_id: BookId,
    ) -> Result<BookId, ApiError>;

    /// Flips the archived flag on one of the owner's books.
    async fn toggle_archived(&self, token: &AuthToken, book_id: BookId)
    -> Result<BookId, ApiError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock catalog recording every invocation.
    pub struct MockBookCatalog {
        owner_calls: AtomicUsize,
        borrow_calls: AtomicUsize,
        approve_calls: AtomicUsize,
        shareable_calls: AtomicUsize,
        archived_calls: AtomicUsize,
        recorded_params: Mutex<Vec<ListParams>>,
        books: Vec<Book>,
        loans: Vec<BorrowedBook>,
    }

    impl MockBookCatalog {
        /// Creates mock serving the given books.
        pub fn new(books: Vec<Book>) -> Self {
            Self {
                owner_calls: AtomicUsize::new(0),
                borrow_calls: AtomicUsize::new(0),
                approve_calls: AtomicUsize::new(0),
                shareable_calls: AtomicUsize::new(0),
                archived_calls: AtomicUsize::new(0),
                recorded_params: Mutex::new(Vec::new()),
                books,
                loans: Vec::new(),
            }
        }

        /// Sets the borrowed/returned listings served by the mock.
        pub fn with_loans(mut self, loans: Vec<BorrowedBook>) -> Self {
            self.loans = loans;
            self
        }

        /// Returns how many times the owner listing ran.
        pub fn owner_calls(&self) -> usize {
            self.owner_calls.load(Ordering::SeqCst)
        }

        /// Returns how many times `borrow_book` ran.
        pub fn borrow_calls(&self) -> usize {
            self.borrow_calls.load(Ordering::SeqCst)
        }

        /// Returns how many times `approve_return` ran.
        pub fn approve_calls(&self) -> usize {
            self.approve_calls.load(Ordering::SeqCst)
        }

        /// Returns how many times `toggle_shareable` ran.
        pub fn shareable_calls(&self) -> usize {
            self.shareable_calls.load(Ordering::SeqCst)
        }

        /// Returns how many times `toggle_archived` ran.
        pub fn archived_calls(&self) -> usize {
            self.archived_calls.load(Ordering::SeqCst)
        }

        /// Returns the params each owner listing was invoked with.
        pub fn recorded_params(&self) -> Vec<ListParams> {
            self.recorded_params.lock().unwrap().clone()
        }

        fn page_of(&self) -> Page<Book> {
            Page {
                content: self.books.clone(),
                number: 0,
                size: self.books.len() as u32,
                total_elements: self.books.len() as u64,
                total_pages: 1,
                first: true,
                last: true,
            }
        }

        fn loans_page(&self) -> Page<BorrowedBook> {
            Page {
                content: self.loans.clone(),
                number: 0,
                size: self.loans.len() as u32,
                total_elements: self.loans.len() as u64,
                total_pages: 1,
                first: true,
                last: true,
            }
        }
    }

    #[async_trait]
    impl BookCatalogPort for MockBookCatalog {
        async fn find_all_books(
            &self,
            _token: &AuthToken,
            _params: ListParams,
        ) -> Result<Page<Book>, ApiError> {
            Ok(self.page_of())
        }

        async fn find_all_books_by_owner(
            &self,
            _token: &AuthToken,
            params: ListParams,
        ) -> Result<Page<Book>, ApiError> {
            self.owner_calls.fetch_add(1, Ordering::SeqCst);
            self.recorded_params.lock().unwrap().push(params);
            Ok(self.page_of())
        }

        async fn find_all_borrowed_books(
            &self,
            _token: &AuthToken,
            _params: ListParams,
        ) -> Result<Page<BorrowedBook>, ApiError> {
            Ok(self.loans_page())
        }

        async fn find_all_returned_books(
            &self,
            _token: &AuthToken,
            _params: ListParams,
        ) -> Result<Page<BorrowedBook>, ApiError> {
            Ok(self.loans_page())
        }

        async fn borrow_book(
            &self,
            _token: &AuthToken,
            book_id: BookId,
        ) -> Result<BookId, ApiError> {
            self.borrow_calls.fetch_add(1, Ordering::SeqCst);
            Ok(book_id)
        }

        async fn return_book(
            &self,
            _token: &AuthToken,
            book_id: BookId,
        ) -> Result<BookId, ApiError> {
            Ok(book_id)
        }

        async fn approve_return(
            &self,
            _token: &AuthToken,
            book_id: BookId,
        ) -> Result<BookId, ApiError> {
            self.approve_calls.fetch_add(1, Ordering::SeqCst);
            Ok(book_id)
        }

        async fn toggle_shareable(
            &self,
            _token: &AuthToken,
            book_id: BookId,
        ) -> Result<BookId, ApiError> {
            self.shareable_calls.fetch_add(1, Ordering::SeqCst);
            Ok(book_id)
        }

        async fn toggle_archived(
            &self,
            _token: &AuthToken,
            book_id: BookId,
        ) -> Result<BookId, ApiError> {
            self.archived_calls.fetch_add(1, Ordering::SeqCst);
            Ok(book_id)
        }
    }
}

//! Wire DTOs for the book-network REST API.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Book, BookId, BorrowedBook};

/// Authentication request body.
#[derive(Debug, Serialize)]
pub struct AuthenticationRequest<'a> {
    /// Account email.
    pub email: &'a str,
    /// Account password.
    pub password: &'a str,
}

/// Authentication response body.
#[derive(Debug, Deserialize)]
pub struct AuthenticationResponse {
    /// JWT access token.
    pub token: String,
}

/// Registration request body.
#[derive(Debug, Serialize)]
pub struct RegistrationRequest<'a> {
    /// First name.
    pub firstname: &'a str,
    /// Last name.
    pub lastname: &'a str,
    /// Account email.
    pub email: &'a str,
    /// Account password.
    pub password: &'a str,
}

/// Error payload produced by the backend's exception handler.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionResponse {
    /// Business error description, if any.
    #[serde(default)]
    pub business_error_description: Option<String>,
    /// Raw error message, if any.
    #[serde(default)]
    pub error: Option<String>,
    /// Per-field validation messages, if any.
    #[serde(default)]
    pub validation_errors: Option<Vec<String>>,
}

impl ExceptionResponse {
    /// Returns the most specific message the payload carries.
    pub fn message(&self) -> Option<&str> {
        self.business_error_description
            .as_deref()
            .or(self.error.as_deref())
    }
}

/// Book listing response item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    /// Backend identifier.
    pub id: i64,
    /// Book title.
    pub title: String,
    /// Author name.
    pub author_name: String,
    /// ISBN code.
    pub isbn: String,
    /// Short synopsis.
    #[serde(default)]
    pub synopsis: String,
    /// Owner display name.
    #[serde(default)]
    pub owner: String,
    /// Average feedback rate.
    #[serde(default)]
    pub rate: f64,
    /// Archived flag.
    #[serde(default)]
    pub archived: bool,
    /// Shareable flag.
    #[serde(default)]
    pub shareable: bool,
}

impl From<BookResponse> for Book {
    fn from(response: BookResponse) -> Self {
        Self {
            id: BookId(response.id),
            title: response.title,
            author_name: response.author_name,
            isbn: response.isbn,
            synopsis: response.synopsis,
            owner: response.owner,
            rate: response.rate,
            archived: response.archived,
            shareable: response.shareable,
        }
    }
}

/// Borrowed book listing response item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowedBookResponse {
    /// Backend identifier.
    pub id: i64,
    /// Book title.
    pub title: String,
    /// Author name.
    pub author_name: String,
    /// ISBN code.
    pub isbn: String,
    /// Average feedback rate.
    #[serde(default)]
    pub rate: f64,
    /// Whether the borrower returned the book.
    #[serde(default)]
    pub returned: bool,
    /// Whether the owner approved the return.
    #[serde(default)]
    pub return_approved: bool,
}

impl From<BorrowedBookResponse> for BorrowedBook {
    fn from(response: BorrowedBookResponse) -> Self {
        Self {
            id: BookId(response.id),
            title: response.title,
            author_name: response.author_name,
            isbn: response.isbn,
            rate: response.rate,
            returned: response.returned,
            return_approved: response.return_approved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Page;

    #[test]
    fn test_book_page_deserializes_from_backend_shape() {
        let json = r#"{
            "content": [{
                "id": 7,
                "title": "Rocannon's World",
                "authorName": "Ursula K. Le Guin",
                "isbn": "9780060125694",
                "synopsis": "First of the Hainish novels.",
                "owner": "gethen",
                "rate": 4.0,
                "archived": false,
                "shareable": true
            }],
            "number": 0,
            "size": 10,
            "totalElements": 1,
            "totalPages": 1,
            "first": true,
            "last": true
        }"#;

        let page: Page<BookResponse> = serde_json::from_str(json).unwrap();
        let page = page.map(Book::from);

        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].author_name, "Ursula K. Le Guin");
        assert!(page.content[0].is_available());
    }

    #[test]
    fn test_exception_message_priority() {
        let payload: ExceptionResponse = serde_json::from_str(
            r#"{"businessErrorDescription": "Login and / or Password is incorrect",
                "error": "Bad credentials"}"#,
        )
        .unwrap();

        assert_eq!(
            payload.message(),
            Some("Login and / or Password is incorrect")
        );
    }

    #[test]
    fn test_validation_errors_deserialize() {
        let payload: ExceptionResponse = serde_json::from_str(
            r#"{"validationErrors": ["Email is not formatted", "Password is mandatory"]}"#,
        )
        .unwrap();

        assert_eq!(payload.validation_errors.unwrap().len(), 2);
    }
}

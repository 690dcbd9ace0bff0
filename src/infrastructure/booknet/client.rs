//! Book-network API HTTP client.

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, header};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{
    AuthenticationRequest, AuthenticationResponse, BookResponse, BorrowedBookResponse,
    ExceptionResponse, RegistrationRequest,
};
use super::request::RequestBuilder;
use crate::domain::entities::{AuthToken, Book, BookId, BorrowedBook, Credentials, Page, Registration};
use crate::domain::errors::{ApiError, AuthError};
use crate::domain::ports::{AuthPort, BookCatalogPort, ListParams};

const DEFAULT_ROOT_URL: &str = "http://localhost:8088/api/v1";
const USER_AGENT: &str = concat!("bookbound/", env!("CARGO_PKG_VERSION"));

/// Book-network API client.
///
/// Every method issues exactly one request per invocation through
/// [`RequestBuilder`]; there is no retry, caching, or deduplication of
/// concurrent identical calls.
pub struct BooknetClient {
    client: Client,
    root_url: String,
}

impl BooknetClient {
    /// Creates new client with the default root URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, AuthError> {
        Self::with_root_url(DEFAULT_ROOT_URL)
    }

    /// Creates client with custom root URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_root_url(root_url: impl Into<String>) -> Result<Self, AuthError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| AuthError::unexpected(format!("failed to create HTTP client: {e}")))?;

        let mut root_url = root_url.into();
        while root_url.ends_with('/') {
            root_url.pop();
        }

        Ok(Self { client, root_url })
    }

    /// Returns the configured root URL.
    #[must_use]
    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    fn list_request(&self, path: &str, params: ListParams) -> RequestBuilder {
        RequestBuilder::new(&self.root_url, path, Method::GET)
            .query_opt("page", params.page)
            .query_opt("size", params.size)
    }

    fn map_transport(e: &reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::network("request timed out")
        } else if e.is_connect() {
            ApiError::network("failed to connect to the backend")
        } else {
            ApiError::network(e.to_string())
        }
    }

    async fn handle_api_error(status: StatusCode, response: reqwest::Response) -> ApiError {
        let message = match response.json::<ExceptionResponse>().await {
            Ok(payload) => payload.message().unwrap_or("no details").to_string(),
            Err(_) => format!("HTTP {status}"),
        };

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            ApiError::Unauthorized
        } else {
            ApiError::status(status.as_u16(), message)
        }
    }

    async fn send_page<T, U>(
        &self,
        token: &AuthToken,
        request: RequestBuilder,
    ) -> Result<Page<U>, ApiError>
    where
        T: DeserializeOwned + Into<U>,
    {
        let response = request
            .build(&self.client)?
            .header(header::AUTHORIZATION, format!("Bearer {}", token.as_str()))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach the backend");
                Self::map_transport(&e)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_api_error(status, response).await);
        }

        let page: Page<T> = response
            .json()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))?;

        Ok(page.map(Into::into))
    }

    async fn send_for_id(
        &self,
        token: &AuthToken,
        request: RequestBuilder,
    ) -> Result<BookId, ApiError> {
        let response = request
            .build(&self.client)?
            .header(header::AUTHORIZATION, format!("Bearer {}", token.as_str()))
            .send()
            .await
            .map_err(|e| Self::map_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_api_error(status, response).await);
        }

        let id: i64 = response
            .json()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))?;

        Ok(BookId(id))
    }

    fn map_auth_transport(e: &reqwest::Error) -> AuthError {
        if e.is_timeout() {
            AuthError::network("request timed out")
        } else if e.is_connect() {
            AuthError::network("failed to connect to the backend")
        } else {
            AuthError::network(e.to_string())
        }
    }

    async fn handle_auth_error(status: StatusCode, response: reqwest::Response) -> AuthError {
        let mut payload = response
            .json::<ExceptionResponse>()
            .await
            .unwrap_or_default();

        if let Some(messages) = payload.validation_errors.take().filter(|m| !m.is_empty()) {
            return AuthError::validation(messages);
        }

        let message = payload
            .message()
            .unwrap_or("Login and / or Password is incorrect")
            .to_string();

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::BAD_REQUEST => {
                AuthError::rejected(message)
            }
            _ => AuthError::unexpected(format!("unexpected response: {status} - {message}")),
        }
    }
}

#[async_trait]
impl AuthPort for BooknetClient {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthToken, AuthError> {
        let url = format!("{}/auth/authenticate", self.root_url);

        debug!("Authenticating against the backend");

        let response = self
            .client
            .post(&url)
            .json(&AuthenticationRequest {
                email: &credentials.email,
                password: &credentials.password,
            })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach the backend");
                Self::map_auth_transport(&e)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_auth_error(status, response).await);
        }

        let auth_response: AuthenticationResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse authentication response");
            AuthError::unexpected(format!("failed to parse response: {e}"))
        })?;

        debug!("Authentication accepted by the backend");

        AuthToken::new(&auth_response.token)
            .ok_or_else(|| AuthError::invalid_format("backend returned a malformed token"))
    }

    async fn register(&self, registration: &Registration) -> Result<(), AuthError> {
        let url = format!("{}/auth/register", self.root_url);

        debug!(email = %registration.email, "Registering account");

        let response = self
            .client
            .post(&url)
            .json(&RegistrationRequest {
                firstname: &registration.firstname,
                lastname: &registration.lastname,
                email: &registration.email,
                password: &registration.password,
            })
            .send()
            .await
            .map_err(|e| Self::map_auth_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_auth_error(status, response).await);
        }

        debug!("Registration accepted");
        Ok(())
    }

    async fn confirm(&self, code: &str) -> Result<(), AuthError> {
        let request = RequestBuilder::new(&self.root_url, "/auth/activate-account", Method::GET)
            .query("token", code);

        debug!("Confirming account activation");

        let response = request
            .build(&self.client)
            .map_err(|e| AuthError::unexpected(e.to_string()))?
            .send()
            .await
            .map_err(|e| Self::map_auth_transport(&e))?;

        if response.status().is_success() {
            debug!("Activation confirmed");
            Ok(())
        } else {
            warn!(status = %response.status(), "Activation rejected");
            Err(AuthError::ActivationRejected)
        }
    }
}

#[async_trait]
impl BookCatalogPort for BooknetClient {
    async fn find_all_books(
        &self,
        token: &AuthToken,
        params: ListParams,
    ) -> Result<Page<Book>, ApiError> {
        self.send_page::<BookResponse, Book>(token, self.list_request("/books", params))
            .await
    }

    async fn find_all_books_by_owner(
        &self,
        token: &AuthToken,
        params: ListParams,
    ) -> Result<Page<Book>, ApiError> {
        self.send_page::<BookResponse, Book>(token, self.list_request("/books/owner", params))
            .await
    }

    async fn find_all_borrowed_books(
        &self,
        token: &AuthToken,
        params: ListParams,
    ) -> Result<Page<BorrowedBook>, ApiError> {
        self.send_page::<BorrowedBookResponse, BorrowedBook>(
            token,
            self.list_request("/books/borrowed", params),
        )
        .await
    }

    async fn find_all_returned_books(
        &self,
        token: &AuthToken,
        params: ListParams,
    ) -> Result<Page<BorrowedBook>, ApiError> {
        self.send_page::<BorrowedBookResponse, BorrowedBook>(
            token,
            self.list_request("/books/returned", params),
        )
        .await
    }

    async fn borrow_book(&self, token: &AuthToken, book_id: BookId) -> Result<BookId, ApiError> {
        let request = RequestBuilder::new(&self.root_url, "/books/borrow/{book-id}", Method::POST)
            .path_param("book-id", book_id);
        self.send_for_id(token, request).await
    }

    async fn return_book(&self, token: &AuthToken, book_id: BookId) -> Result<BookId, ApiError> {
        let request = RequestBuilder::new(
            &self.root_url,
            "/books/borrow/return/{book-id}",
            Method::POST,
        )
        .path_param("book-id", book_id);
        self.send_for_id(token, request).await
    }

    async fn approve_return(
        &self,
        token: &AuthToken,
        book_id: BookId,
    ) -> Result<BookId, ApiError> {
        let request = RequestBuilder::new(
            &self.root_url,
            "/books/borrow/return/approve/{book-id}",
            Method::POST,
        )
        .path_param("book-id", book_id);
        self.send_for_id(token, request).await
    }

    async fn toggle_shareable(
        &self,
        token: &AuthToken,
        book_id: BookId,
    ) -> Result<BookId, ApiError> {
        let request =
            RequestBuilder::new(&self.root_url, "/books/shareable/{book-id}", Method::PATCH)
                .path_param("book-id", book_id);
        self.send_for_id(token, request).await
    }

    async fn toggle_archived(&self, token: &AuthToken, book_id: BookId) -> Result<BookId, ApiError> {
        let request =
            RequestBuilder::new(&self.root_url, "/books/archived/{book-id}", Method::PATCH)
                .path_param("book-id", book_id);
        self.send_for_id(token, request).await
    }
}

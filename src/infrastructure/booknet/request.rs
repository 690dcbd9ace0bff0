//! Outgoing request assembly.

use reqwest::{Client, Method, Url};

use crate::domain::errors::ApiError;

/// Assembles one outgoing request from a path template, method, and
/// parameter bindings.
///
/// Building is deterministic: the same root URL, template, and bindings
/// always produce the same request shape. The builder performs no I/O and
/// applies no retry, caching, or deduplication; each built request maps to
/// exactly one network call when sent.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    root_url: String,
    path: String,
    method: Method,
    query: Vec<(String, String)>,
}

impl RequestBuilder {
    /// Creates a builder for the given path template.
    ///
    /// `path` may contain `{name}` segments to be filled by
    /// [`path_param`](Self::path_param).
    #[must_use]
    pub fn new(root_url: impl Into<String>, path: impl Into<String>, method: Method) -> Self {
        Self {
            root_url: root_url.into(),
            path: path.into(),
            method,
            query: Vec::new(),
        }
    }

    /// Substitutes a `{name}` segment in the path template.
    #[must_use]
    pub fn path_param(mut self, name: &str, value: impl ToString) -> Self {
        self.path = self
            .path
            .replace(&format!("{{{name}}}"), &value.to_string());
        self
    }

    /// Binds a query parameter.
    #[must_use]
    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Binds a query parameter only if a value is present.
    #[must_use]
    pub fn query_opt(self, name: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Returns the request method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Resolves the final request URL.
    ///
    /// # Errors
    /// Returns error if the root URL and path do not form a valid URL.
    pub fn url(&self) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}{}", self.root_url, self.path))
            .map_err(|e| ApiError::invalid_request(format!("invalid request URL: {e}")))?;

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.query {
                pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }

    /// Turns the descriptor into a sendable reqwest builder.
    ///
    /// # Errors
    /// Returns error if the URL cannot be resolved.
    pub fn build(self, client: &Client) -> Result<reqwest::RequestBuilder, ApiError> {
        let url = self.url()?;
        Ok(client.request(self.method, url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "http://localhost:8088/api/v1";

    #[test]
    fn test_plain_path() {
        let url = RequestBuilder::new(ROOT, "/books/owner", Method::GET)
            .url()
            .unwrap();

        assert_eq!(url.as_str(), "http://localhost:8088/api/v1/books/owner");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_present_query_parameter_is_bound() {
        let url = RequestBuilder::new(ROOT, "/books/owner", Method::GET)
            .query_opt("page", Some(3))
            .url()
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:8088/api/v1/books/owner?page=3"
        );
    }

    #[test]
    fn test_absent_query_parameter_is_omitted() {
        let url = RequestBuilder::new(ROOT, "/books/owner", Method::GET)
            .query_opt("page", None::<u32>)
            .query_opt("size", None::<u32>)
            .url()
            .unwrap();

        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_multiple_query_parameters() {
        let url = RequestBuilder::new(ROOT, "/books/owner", Method::GET)
            .query_opt("page", Some(0))
            .query_opt("size", Some(10))
            .url()
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:8088/api/v1/books/owner?page=0&size=10"
        );
    }

    #[test]
    fn test_path_param_substitution() {
        let rb = RequestBuilder::new(ROOT, "/books/borrow/{book-id}", Method::POST)
            .path_param("book-id", 42);

        assert_eq!(
            rb.url().unwrap().as_str(),
            "http://localhost:8088/api/v1/books/borrow/42"
        );
        assert_eq!(rb.method(), &Method::POST);
    }

    #[test]
    fn test_identical_inputs_build_identical_requests() {
        let make = || {
            RequestBuilder::new(ROOT, "/books/owner", Method::GET)
                .query_opt("page", Some(3))
                .url()
                .unwrap()
        };

        assert_eq!(make(), make());
    }

    #[test]
    fn test_invalid_root_is_rejected() {
        let result = RequestBuilder::new("not a url", "/books", Method::GET).url();
        assert!(matches!(result, Err(ApiError::InvalidRequest { .. })));
    }
}

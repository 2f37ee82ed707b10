//! Book registry service
//!
//! Validates payloads at the boundary and maps missing records to the
//! client-facing error messages. The registry below only ever sees
//! well-formed input.

use crate::{
    error::{AppError, AppResult},
    models::{Book, CreateBookRequest, UpdateBookRequest},
    registry::Registry,
};

const BOOK_NOT_FOUND: &str = "Book not found";

#[derive(Clone)]
pub struct BooksService {
    registry: Registry,
}

impl BooksService {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// List all books in insertion order
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        Ok(self.registry.books.list().await)
    }

    /// Get a book by id
    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.registry
            .books
            .get(id)
            .await
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))
    }

    /// Create a book; both fields must be present and non-empty
    pub async fn create_book(&self, payload: CreateBookRequest) -> AppResult<Book> {
        let (title, author) = match (non_empty(payload.title), non_empty(payload.author)) {
            (Some(title), Some(author)) => (title, author),
            _ => {
                return Err(AppError::Validation(
                    "Missing title or author in request body".to_string(),
                ))
            }
        };

        Ok(self.registry.books.insert(title, author).await)
    }

    /// Update a book; fields left out (or empty) keep their current value.
    /// An unknown id is reported before the payload is judged.
    pub async fn update_book(&self, id: i64, payload: UpdateBookRequest) -> AppResult<Book> {
        let title = non_empty(payload.title);
        let author = non_empty(payload.author);

        if title.is_none() && author.is_none() {
            if self.registry.books.get(id).await.is_none() {
                return Err(AppError::NotFound(BOOK_NOT_FOUND.to_string()));
            }
            return Err(AppError::Validation(
                "Provide title or author to update".to_string(),
            ));
        }

        self.registry
            .books
            .update(id, title, author)
            .await
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))
    }

    /// Delete a book, returning the removed record
    pub async fn delete_book(&self, id: i64) -> AppResult<Book> {
        self.registry
            .books
            .remove(id)
            .await
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))
    }
}

/// The empty string counts as absent; surrounding whitespace does not.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

//! Book record and request payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A book record held by the registry.
///
/// Ids are assigned by the registry and never supplied by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Registry-assigned identifier
    pub id: i64,
    /// Book title
    pub title: String,
    /// Book author
    pub author: String,
}

/// Payload for creating a book.
///
/// Both fields are required but modeled as optional so that an incomplete
/// body reaches the validation step instead of a deserialization rejection.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Payload for updating a book. At least one field must be supplied and
/// non-empty; fields left out keep their current value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Records the registry is seeded with at startup.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book {
            id: 1,
            title: "The Hobbit".to_string(),
            author: "J.R.R. Tolkien".to_string(),
        },
        Book {
            id: 2,
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
        },
        Book {
            id: 3,
            title: "Clean Code".to_string(),
            author: "Robert C. Martin".to_string(),
        },
    ]
}

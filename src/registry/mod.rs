//! Registry layer for in-memory storage
//!
//! The registry owns the record sequences outright; handlers reach it only
//! through the service layer, so every mutation goes through one place.

pub mod books;

use crate::models::Book;

/// Main registry struct holding the in-memory stores
#[derive(Clone)]
pub struct Registry {
    pub books: books::BooksRegistry,
}

impl Registry {
    /// Create a new registry seeded with the given books
    pub fn new(seed: Vec<Book>) -> Self {
        Self {
            books: books::BooksRegistry::new(seed),
        }
    }
}

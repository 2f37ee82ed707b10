//! Business logic services

pub mod books;

use crate::registry::Registry;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
}

impl Services {
    /// Create all services with the given registry
    pub fn new(registry: Registry) -> Self {
        Self {
            books: books::BooksService::new(registry),
        }
    }
}

//! Books registry: an ordered in-memory sequence of book records.
//!
//! The sequence lives behind an `RwLock` because the runtime serves requests
//! on multiple worker threads; every mutation takes the write guard and
//! completes fully before the next writer proceeds. Records keep insertion
//! order. Nothing is persisted; the collection dies with the process.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Book;

#[derive(Clone)]
pub struct BooksRegistry {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRegistry {
    /// Create a registry holding the given initial records
    pub fn new(initial: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(initial)),
        }
    }

    /// Return the full sequence in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    /// Find a record by id
    pub async fn get(&self, id: i64) -> Option<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }

    /// Append a new record with a freshly assigned id.
    /// Inputs are expected to be validated non-empty by the caller.
    pub async fn insert(&self, title: String, author: String) -> Book {
        let mut books = self.books.write().await;
        let book = Book {
            id: next_id(&books),
            title,
            author,
        };
        books.push(book.clone());
        book
    }

    /// Replace the supplied fields on an existing record.
    /// Returns the updated record, or `None` if the id is unknown.
    pub async fn update(
        &self,
        id: i64,
        title: Option<String>,
        author: Option<String>,
    ) -> Option<Book> {
        let mut books = self.books.write().await;
        let book = books.iter_mut().find(|b| b.id == id)?;
        if let Some(title) = title {
            book.title = title;
        }
        if let Some(author) = author {
            book.author = author;
        }
        Some(book.clone())
    }

    /// Remove a record by id, returning it if it existed
    pub async fn remove(&self, id: i64) -> Option<Book> {
        let mut books = self.books.write().await;
        let index = books.iter().position(|b| b.id == id)?;
        Some(books.remove(index))
    }
}

/// Next id is `max(existing ids) + 1`, or 1 for an empty collection.
/// Removed ids are forgotten: deleting the current maximum makes its id
/// eligible for reassignment.
fn next_id(books: &[Book]) -> i64 {
    books.iter().map(|b| b.id).max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::seed_books;

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let registry = BooksRegistry::new(Vec::new());

        let first = registry.insert("A".into(), "a".into()).await;
        let second = registry.insert("B".into(), "b".into()).await;
        let third = registry.insert("C".into(), "c".into()).await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn insert_appends_in_order() {
        let registry = BooksRegistry::new(seed_books());
        registry.insert("Dune".into(), "Herbert".into()).await;

        let titles: Vec<String> = registry.list().await.into_iter().map(|b| b.title).collect();
        assert_eq!(titles, ["The Hobbit", "1984", "Clean Code", "Dune"]);
    }

    #[tokio::test]
    async fn get_returns_inserted_record() {
        let registry = BooksRegistry::new(seed_books());
        let created = registry.insert("Dune".into(), "Herbert".into()).await;

        let found = registry.get(created.id).await;
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn remove_then_get_yields_none() {
        let registry = BooksRegistry::new(seed_books());

        let removed = registry.remove(2).await.unwrap();
        assert_eq!(removed.title, "1984");
        assert_eq!(registry.get(2).await, None);
    }

    #[tokio::test]
    async fn removing_the_max_id_frees_it_for_reuse() {
        let registry = BooksRegistry::new(seed_books());

        registry.remove(3).await.unwrap();
        let created = registry.insert("Dune".into(), "Herbert".into()).await;

        // ids of removed records are not remembered
        assert_eq!(created.id, 3);
    }

    #[tokio::test]
    async fn removing_below_the_max_does_not_affect_next_id() {
        let registry = BooksRegistry::new(seed_books());

        registry.remove(1).await.unwrap();
        let created = registry.insert("Dune".into(), "Herbert".into()).await;

        assert_eq!(created.id, 4);
    }

    #[tokio::test]
    async fn update_replaces_only_supplied_fields() {
        let registry = BooksRegistry::new(seed_books());

        let updated = registry
            .update(1, Some("The Silmarillion".into()), None)
            .await
            .unwrap();
        assert_eq!(updated.title, "The Silmarillion");
        assert_eq!(updated.author, "J.R.R. Tolkien");

        let updated = registry.update(1, None, Some("Tolkien".into())).await.unwrap();
        assert_eq!(updated.title, "The Silmarillion");
        assert_eq!(updated.author, "Tolkien");
    }

    #[tokio::test]
    async fn update_unknown_id_yields_none() {
        let registry = BooksRegistry::new(seed_books());
        assert!(registry.update(42, Some("X".into()), None).await.is_none());
    }
}

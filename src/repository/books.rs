//! In-memory book storage

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookChanges, NewBook},
};

struct BookTable {
    next_id: i64,
    rows: BTreeMap<i64, Book>,
}

impl Default for BookTable {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

/// Process-lifetime book store: id -> record plus a counter that never goes back.
///
/// Ids are issued in increasing order, so iterating the map yields insertion order.
#[derive(Clone, Default)]
pub struct BooksRepository {
    table: Arc<RwLock<BookTable>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// List books, optionally keeping only titles containing `title`
    pub async fn list(&self, title: Option<&str>) -> Vec<Book> {
        let table = self.table.read().await;
        table
            .rows
            .values()
            .filter(|book| title.map_or(true, |t| book.title.contains(t)))
            .cloned()
            .collect()
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Insert a book under the next id
    pub async fn create(&self, data: NewBook) -> AppResult<Book> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id = id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("book id space exhausted".to_string()))?;

        let book = Book {
            id,
            title: data.title,
            author: data.author,
            published_year: data.published_year,
        };
        table.rows.insert(id, book.clone());
        Ok(book)
    }

    /// Overwrite the supplied fields of a book, keeping the others
    pub async fn update(&self, id: i64, changes: BookChanges) -> AppResult<Book> {
        let mut table = self.table.write().await;
        let book = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

        if let Some(title) = changes.title {
            book.title = title;
        }
        if let Some(author) = changes.author {
            book.author = author;
        }
        if let Some(year) = changes.published_year {
            book.published_year = Some(year);
        }
        Ok(book.clone())
    }

    /// Delete book
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut table = self.table.write().await;
        if table.rows.remove(&id).is_none() {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }

    #[cfg(test)]
    async fn count(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

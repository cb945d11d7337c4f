//! Book catalog service

use crate::{
    error::{AppError, AppResult},
    models::book::{non_empty, Book, BookChanges, CreateBook, NewBook, UpdateBook, YearValue},
    repository::Repository,
};

/// Books loaded at startup when `store.seed_samples` is enabled
const SAMPLE_BOOKS: [(&str, &str, i32); 2] = [
    ("Node.js Master Guide", "Gemini", 2023),
    ("Building APIs with Express", "Developer B", 2024),
];

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Insert the sample books
    pub async fn seed_samples(&self) -> AppResult<()> {
        for (title, author, year) in SAMPLE_BOOKS {
            self.repository
                .books
                .create(NewBook {
                    title: title.to_string(),
                    author: author.to_string(),
                    published_year: Some(year),
                })
                .await?;
        }
        tracing::info!("Seeded {} sample books", SAMPLE_BOOKS.len());
        Ok(())
    }

    /// List books, optionally filtered by a title substring
    pub async fn list(&self, title: Option<&str>) -> AppResult<Vec<Book>> {
        Ok(self.repository.books.list(title).await)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Create a book; title and author are required
    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        let (Some(title), Some(author)) = (
            non_empty(data.title.as_deref()),
            non_empty(data.author.as_deref()),
        ) else {
            return Err(AppError::Validation(
                "Book title and author are required".to_string(),
            ));
        };

        let book = self
            .repository
            .books
            .create(NewBook {
                title,
                author,
                published_year: data.published_year.as_ref().and_then(YearValue::to_year),
            })
            .await?;
        tracing::info!("Created book {} ({:?})", book.id, book.title);
        Ok(book)
    }

    /// Update a book; empty fields keep their previous value
    pub async fn update(&self, id: i64, data: &UpdateBook) -> AppResult<Book> {
        let book = self
            .repository
            .books
            .update(id, BookChanges::from(data))
            .await?;
        tracing::info!("Updated book {}", id);
        Ok(book)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!("Deleted book {}", id);
        Ok(())
    }
}

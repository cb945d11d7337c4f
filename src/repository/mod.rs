//! Repository layer for in-memory storage

pub mod books;

/// Main repository struct holding every store the server owns
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
        }
    }
}

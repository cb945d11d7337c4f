//! Data models for the book store

pub mod book;

// Re-export commonly used types
pub use book::{Book, BookChanges, BookQuery, CreateBook, NewBook, UpdateBook};

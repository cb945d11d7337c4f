//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::book::{parse_leading_int, Book, BookQuery, CreateBook, DeleteResponse, UpdateBook},
};

use super::JsonBody;

/// Path ids are read like `parseInt` (`"1abc"` is 1); ids without leading digits name no book
fn parse_book_id(raw: &str) -> AppResult<i64> {
    parse_leading_int(raw).ok_or_else(|| AppError::NotFound(format!("Book {} not found", raw)))
}

/// List books, optionally filtered by title
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "List of books", body = Vec<Book>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<Vec<Book>>> {
    tracing::debug!("GET /books title={:?}", query.title);
    let books = state.services.books.list(query.title.as_deref()).await?;
    Ok(Json(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let id = parse_book_id(&id)?;
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Title or author missing", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    JsonBody(data): JsonBody<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.books.create(&data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    JsonBody(data): JsonBody<UpdateBook>,
) -> AppResult<Json<Book>> {
    let id = parse_book_id(&id)?;
    let book = state.services.books.update(id, &data).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = DeleteResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let id = parse_book_id(&id)?;
    state.services.books.delete(id).await?;
    Ok(Json(DeleteResponse {
        message: format!("Book {} was deleted successfully", id),
    }))
}

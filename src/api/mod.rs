//! API handlers for the book store REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON request body. A missing or blank body reads as `T::default()`;
/// malformed JSON is a validation error.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(T::default()));
        }

        let Json(value) =
            Json::<T>::from_bytes(&bytes).map_err(|e| AppError::Validation(e.body_text()))?;
        Ok(JsonBody(value))
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .merge(api)
        .merge(openapi)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Fallback for unmatched routes
async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::{CreateBook, UpdateBook};
    use axum::body::Body;

    fn request(body: &'static str) -> Request {
        axum::http::Request::builder()
            .method("PUT")
            .uri("/books/1")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn blank_body_reads_as_default() {
        let JsonBody(data) = JsonBody::<UpdateBook>::from_request(request(""), &())
            .await
            .unwrap();
        assert!(data.title.is_none() && data.author.is_none() && data.published_year.is_none());

        let JsonBody(data) = JsonBody::<UpdateBook>::from_request(request("  \n"), &())
            .await
            .unwrap();
        assert!(data.title.is_none());
    }

    #[tokio::test]
    async fn body_is_parsed_without_content_type() {
        let JsonBody(data) =
            JsonBody::<CreateBook>::from_request(request(r#"{"title":"Dune","author":"Herbert"}"#), &())
                .await
                .unwrap();
        assert_eq!(data.title.as_deref(), Some("Dune"));
        assert_eq!(data.author.as_deref(), Some("Herbert"));
    }

    #[tokio::test]
    async fn malformed_or_mistyped_body_is_a_validation_error() {
        let result = JsonBody::<CreateBook>::from_request(request("{not json"), &()).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result =
            JsonBody::<CreateBook>::from_request(request(r#"{"title":5,"author":"x"}"#), &()).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}

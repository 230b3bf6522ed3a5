use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::errors::{handle_panic, json_error_envelope, route_not_found};
use super::handlers::{categories, health, questions, quizzes};
use super::state::AppState;

/// Build the application router
///
/// Every error response, including unmatched routes and methods, leaves
/// as a JSON envelope.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Categories
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/:id/questions",
            get(categories::list_category_questions),
        )
        // Questions
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/search", post(questions::search_questions))
        .route("/questions/:id", delete(questions::delete_question))
        // Quiz play
        .route("/quizzes", post(quizzes::next_quiz_question))
        .fallback(route_not_found)
        // Middleware
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::map_response(json_error_envelope))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}

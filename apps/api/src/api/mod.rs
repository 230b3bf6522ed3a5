// API layer module (HTTP adapter)
// Handlers translate requests into repository calls and JSON responses

pub mod deserializers;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use errors::ApiError;
pub use routes::router;
pub use state::AppState;

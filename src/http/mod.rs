//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → request.rs (request ID assigned and propagated)
//!     → recommendation.rs (parse query, call engine)
//!     → response.rs (JSON body, error → status mapping)
//!     → Send to client
//! ```

pub mod recommendation;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{build_router, AppState, HttpServer, ServerError};

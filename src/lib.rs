//! Hotel recommendation service library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod money;
pub mod observability;
pub mod partner;
pub mod recommendation;
pub mod resilience;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use money::{Currency, Money};
pub use recommendation::{Offer, Recommendation, RecommendationEngine, RecommendationError};

//! Recommendation decision engine.
//!
//! # Data Flow
//! ```text
//! (trip window, location, budget)
//!     → engine.rs (validate, fetch availability, filter, select)
//!     → Recommendation | RecommendationError
//! ```
//!
//! # Design Decisions
//! - Exactly one availability call per request, no caching, no retries here
//! - Cheapest offer within budget wins; ties go to the first in source order
//! - Errors are a tagged enum so the HTTP layer can pick status codes

pub mod engine;
pub mod error;
pub mod types;

pub use engine::RecommendationEngine;
pub use error::RecommendationError;
pub use types::{Offer, Recommendation};

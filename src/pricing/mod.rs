//! Quote pricing engine.
//!
//! Maps a structured service specification to a price, a turnaround
//! estimate and a quantity discount. The engine is a pure, synchronous
//! computation over immutable lookup tables; the route handlers here are a
//! thin JSON wrapper around it.

pub mod calculators;
pub mod engine;
pub mod formatters;
pub mod responses;
pub mod routes;
pub mod spec;
pub mod tables;

// Re-export commonly used items
pub use engine::compute_quote;
pub use routes::router;
pub use spec::{Quote, QuoteSpec, ServiceType};

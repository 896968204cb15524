//! # Dishbook
//!
//! Dish catalogue: JSON API, document storage and a browser page.
//!
//! ## Crates
//!
//! - `dishbook_server` - HTTP service, SurrealDB store and UI page

// Re-export all sub-crates
pub use dishbook_server;

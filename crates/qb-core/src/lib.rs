//! quillboard/crates/qb-core/src/lib.rs
//!
//! The central domain logic and interface definitions for Quillboard.

pub mod error;
pub mod id;
pub mod models;
pub mod traits;
pub mod validate;
pub mod view;

// Re-exporting for easier access in other crates
pub use error::*;
pub use id::*;
pub use models::*;
pub use traits::*;
pub use view::*;

//! Core types for the osidb catalog
//!
//! This crate defines the foundational pieces used throughout the system:
//! - Entity: uniquely identified object with an ordered multi-valued
//!   property bag
//! - List: homogeneous, id-deduplicated ordered container with set algebra
//! - Filter: constraint predicate over entity properties
//! - Matcher: the trait seam that lets specialized filters drive list
//!   filtering uniformly
//! - Error: error type hierarchy for the bulk-load boundary
//! - dates: schema date parsing helpers

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod dates;
pub mod entity;
pub mod error;
pub mod filter;
pub mod list;
pub mod traits;

// Re-export commonly used types and traits
pub use entity::{Entity, ParamEnum, PropertyBag};
pub use error::{Error, Result};
pub use filter::Filter;
pub use list::List;
pub use traits::{AsEntity, Matcher};

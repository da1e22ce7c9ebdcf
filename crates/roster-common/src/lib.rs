//! Roster-Common: Shared types and utilities.
//!
//! This crate provides common functionality used across roster:
//!
//! - **Typed IDs**: A type-safe wrapper around database-assigned row ids
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use roster_common::{Error, Result, UserId};
//!
//! let id = UserId::from(42);
//! assert_eq!(id.to_string(), "42");
//!
//! fn example() -> Result<()> {
//!     Err(Error::not_found("user"))
//! }
//! ```

pub mod error;
pub mod ids;

pub use error::{Error, Result};
pub use ids::*;

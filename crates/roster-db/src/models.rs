//! Internal Rust models matching the database schema.
//!
//! This module provides strongly-typed Rust structures that map to database
//! tables. All models use types from roster-common where appropriate.

use roster_common::UserId;
use serde::{Deserialize, Serialize};

/// User record model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

// The console line format printed by the demo driver and CLI.
impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "User{{id={}, name='{}', email='{}'}}",
            self.id, self.name, self.email
        )
    }
}

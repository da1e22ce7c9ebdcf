//! Typed ID wrapper for user records.
//!
//! This module provides a newtype wrapper around the database-assigned row id
//! so that a user id cannot be confused with an arbitrary integer. Ids are
//! minted by the database on insert, never by this code, so there is no
//! constructor that invents one.

use serde::{Deserialize, Serialize};

/// Unique identifier for a user, assigned by the database on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Roster-DB: Database schema, migrations, and query operations
//!
//! This crate provides database functionality for roster using SQLite
//! with rusqlite and r2d2 connection pooling.
//!
//! # Modules
//!
//! - `migrations` - Database schema migrations
//! - `pool` - Connection pool management
//! - `models` - Rust models matching database schema
//! - `queries` - Database query operations
//!
//! # Example
//!
//! ```no_run
//! use roster_db::pool::{init_pool, get_conn};
//! use roster_db::queries::users;
//!
//! let pool = init_pool("/var/lib/roster/roster.db", 4).unwrap();
//! let conn = get_conn(&pool).unwrap();
//!
//! let user = users::create_user(&conn, "Ada Lovelace", "ada@example.com").unwrap();
//! println!("Created user: {}", user);
//! ```

pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;

//! User database queries.
//!
//! This module provides CRUD operations for user records. Each function
//! executes a single parameterized statement on the supplied connection;
//! SQLite auto-commits it as one implicit transaction.

use roster_common::{Error, Result, UserId};
use rusqlite::Connection;

use crate::models::User;

/// Create a new user.
///
/// The id is assigned by the database's auto-increment mechanism and read
/// back from the connection after the insert.
///
/// # Arguments
///
/// * `conn` - Database connection
/// * `name` - Display name
/// * `email` - Email address (no uniqueness or format constraint)
///
/// # Returns
///
/// * `Ok(User)` - The created user, carrying its assigned id
/// * `Err(Error)` - If a database error occurs
pub fn create_user(conn: &Connection, name: &str, email: &str) -> Result<User> {
    conn.execute(
        "INSERT INTO users (name, email) VALUES (:name, :email)",
        rusqlite::named_params! {
            ":name": name,
            ":email": email,
        },
    )
    .map_err(|e| Error::database(e.to_string()))?;

    let id = UserId::from(conn.last_insert_rowid());

    Ok(User {
        id,
        name: name.to_string(),
        email: email.to_string(),
    })
}

/// Get a user by ID.
///
/// # Arguments
///
/// * `conn` - Database connection
/// * `id` - User ID
///
/// # Returns
///
/// * `Ok(Some(User))` - The user if found
/// * `Ok(None)` - If the user does not exist
/// * `Err(Error)` - If a database error occurs
pub fn get_user(conn: &Connection, id: UserId) -> Result<Option<User>> {
    let result = conn.query_row(
        "SELECT id, name, email FROM users WHERE id = :id",
        rusqlite::named_params! { ":id": i64::from(id) },
        |row| {
            Ok(User {
                id: UserId::from(row.get::<_, i64>(0)?),
                name: row.get(1)?,
                email: row.get(2)?,
            })
        },
    );

    match result {
        Ok(user) => Ok(Some(user)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List all users.
///
/// No ORDER BY: callers see whatever order the storage engine returns,
/// which for SQLite is rowid scan order. The cursor is drained to
/// completion, so either the full result set is returned or the call
/// fails entirely.
///
/// # Arguments
///
/// * `conn` - Database connection
///
/// # Returns
///
/// * `Ok(Vec<User>)` - List of all users
/// * `Err(Error)` - If a database error occurs
pub fn list_users(conn: &Connection) -> Result<Vec<User>> {
    let mut stmt = conn
        .prepare("SELECT id, name, email FROM users")
        .map_err(|e| Error::database(e.to_string()))?;

    let users = stmt
        .query_map([], |row| {
            Ok(User {
                id: UserId::from(row.get::<_, i64>(0)?),
                name: row.get(1)?,
                email: row.get(2)?,
            })
        })
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(users)
}

/// Overwrite a user's name and email.
///
/// A missing id is not an error: the statement succeeds with zero rows
/// affected and the count is returned so callers can detect the miss.
///
/// # Arguments
///
/// * `conn` - Database connection
/// * `id` - User ID
/// * `name` - Replacement name
/// * `email` - Replacement email
///
/// # Returns
///
/// * `Ok(usize)` - Number of rows affected (0 or 1)
/// * `Err(Error)` - If a database error occurs
pub fn update_user(conn: &Connection, id: UserId, name: &str, email: &str) -> Result<usize> {
    let rows_affected = conn
        .execute(
            "UPDATE users SET name = :name, email = :email WHERE id = :id",
            rusqlite::named_params! {
                ":id": i64::from(id),
                ":name": name,
                ":email": email,
            },
        )
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(rows_affected)
}

/// Delete a user.
///
/// Deleting a non-existent id is a no-op, observably identical to a
/// successful deletion apart from the returned flag.
///
/// # Arguments
///
/// * `conn` - Database connection
/// * `id` - User ID to delete
///
/// # Returns
///
/// * `Ok(true)` - If the user was deleted
/// * `Ok(false)` - If the user did not exist
/// * `Err(Error)` - If a database error occurs
pub fn delete_user(conn: &Connection, id: UserId) -> Result<bool> {
    let rows_affected = conn
        .execute(
            "DELETE FROM users WHERE id = :id",
            rusqlite::named_params! { ":id": i64::from(id) },
        )
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(rows_affected > 0)
}

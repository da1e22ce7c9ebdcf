//! The sequential CRUD demonstration.
//!
//! Runs the four operations in order against a [`RecordStore`], printing
//! progress lines and one line per record. Any failure aborts the
//! sequence; the effects of earlier steps persist in the database.

use roster_common::Result;

use crate::store::RecordStore;

/// Run the demonstration sequence: create two users, list, update the
/// first, list, delete the first, list.
pub fn run(store: &RecordStore) -> Result<()> {
    println!("--- Record store demo ---");

    println!("\n1. Creating users...");
    let ada = store.create("Ada Lovelace", "ada@example.com")?;
    let grace = store.create("Grace Hopper", "grace@example.com")?;
    println!("Created users with ids {} and {}", ada.id, grace.id);

    println!("\n2. Reading all users...");
    print_all(store)?;

    println!("\n3. Updating user with id {}...", ada.id);
    store.update(ada.id, "Ada Lovelace King", "ada.king@example.com")?;
    println!("User updated. Reading all users again:");
    print_all(store)?;

    println!("\n4. Deleting user with id {}...", ada.id);
    store.delete(ada.id)?;
    println!("User deleted. Final list of users:");
    print_all(store)?;

    println!("\n--- Demo finished ---");

    Ok(())
}

fn print_all(store: &RecordStore) -> Result<()> {
    for user in store.read_all()? {
        println!("{}", user);
    }
    Ok(())
}

mod cli;

use roster::{config, demo, store::RecordStore};
use roster_common::UserId;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "roster=trace,roster_db=debug,roster_common=debug".to_string()
        } else {
            "roster=debug,roster_db=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Demo => run_demo(cli.config.as_deref()),
        Commands::Add { name, email } => add_user(cli.config.as_deref(), &name, &email),
        Commands::List => list_users(cli.config.as_deref()),
        Commands::Show { id } => show_user(cli.config.as_deref(), id),
        Commands::Update { id, name, email } => {
            update_user(cli.config.as_deref(), id, &name, &email)
        }
        Commands::Remove { id } => remove_user(cli.config.as_deref(), id),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("roster {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Load config and open the store it points at.
fn open_store(config_path: Option<&Path>) -> Result<RecordStore> {
    let config = config::load_config_or_default(config_path)?;
    let db_path = config.database.path.to_string_lossy();

    tracing::info!("Opening database at {}", db_path);
    let store = RecordStore::open(&db_path, config.database.pool_size)?;

    Ok(store)
}

fn run_demo(config_path: Option<&Path>) -> Result<()> {
    let store = open_store(config_path)?;
    demo::run(&store)?;
    Ok(())
}

fn add_user(config_path: Option<&Path>, name: &str, email: &str) -> Result<()> {
    let store = open_store(config_path)?;
    let user = store.create(name, email)?;
    println!("{}", user);
    Ok(())
}

fn list_users(config_path: Option<&Path>) -> Result<()> {
    let store = open_store(config_path)?;
    let users = store.read_all()?;

    if users.is_empty() {
        println!("No users.");
        return Ok(());
    }

    for user in users {
        println!("{}", user);
    }

    Ok(())
}

fn show_user(config_path: Option<&Path>, id: i64) -> Result<()> {
    let store = open_store(config_path)?;

    match store.get(UserId::from(id))? {
        Some(user) => println!("{}", user),
        None => println!("No user with id {}", id),
    }

    Ok(())
}

fn update_user(config_path: Option<&Path>, id: i64, name: &str, email: &str) -> Result<()> {
    let store = open_store(config_path)?;

    // Zero rows affected is not an error, just report the miss
    let affected = store.update(UserId::from(id), name, email)?;
    if affected == 0 {
        println!("No user with id {}", id);
    } else {
        println!("Updated user {}", id);
    }

    Ok(())
}

fn remove_user(config_path: Option<&Path>, id: i64) -> Result<()> {
    let store = open_store(config_path)?;

    if store.delete(UserId::from(id))? {
        println!("Removed user {}", id);
    } else {
        println!("No user with id {}", id);
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Database: {:?}", config.database.path);
            println!("  Pool size: {}", config.database.pool_size);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Database: {:?}", config.database.path);
            println!("  Pool size: {}", config.database.pool_size);
        }
    }

    Ok(())
}

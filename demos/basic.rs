//! Basic usage example

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // RUST_LOG=typenv=debug shows which settings fell back
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("DEBUG", "on");

    // Required: aborts startup if unset
    let database_url = typenv::require_string("DATABASE_URL")?;

    // With fallback
    let server_name = typenv::get_string("SERVER_NAME", "typenv-demo");
    let max_connections = typenv::get_i32("MAX_CONNECTIONS", 10)?;
    let port = typenv::get_port("PORT", 8080)?;

    // Unset booleans read as false
    let debug = typenv::get_bool("DEBUG")?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", database_url);
    println!("  Server Name: {}", server_name);
    println!("  Max Connections: {}", max_connections);
    println!("  Port: {}", port);
    println!("  Debug Mode: {}", debug);

    Ok(())
}

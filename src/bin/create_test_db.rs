use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use tallybook::initialize_db;

/// A utility for creating a test database for the REST API server of tallybook.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test transactions...");

    let now = OffsetDateTime::now_utc();
    let sample_transactions = [
        (now - Duration::days(3), 1500.00, "Salary - August"),
        (now - Duration::days(2), -45.99, "Coffee shop purchase"),
        (now - Duration::days(1), -320.50, "Weekly groceries"),
        (now, -15.00, "Bus fare"),
    ];

    for (created_at, amount, description) in sample_transactions {
        conn.execute(
            "INSERT INTO \"transaction\" (created_at, amount, description) VALUES (?1, ?2, ?3)",
            (created_at, amount, description),
        )?;
    }

    println!("Success!");

    Ok(())
}

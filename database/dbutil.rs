use anyhow::{ Context, Result };
use clap::{ Parser, ValueEnum };
use std::fs;
use std::path::PathBuf;

use studio_repo::db::pool::{ Database, DbConfig };
use studio_repo::db::schema::{ apply_schema, DELETE_SQL, SCHEMA_SQL };
use studio_repo::utils::logging::{ init_logger, log_activity, log_debug };

// Define valid operations
#[derive(Debug, Clone, ValueEnum)]
enum Operation {
    Create,
    Delete,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Database utility for schema management")]
struct Args {
    /// Operation to perform (create or delete)
    #[arg(value_enum)]
    operation: Operation,

    /// Database URL (overrides .env)
    #[arg(long)]
    database_url: Option<String>,

    /// SQL script to run instead of the bundled one
    #[arg(long)]
    script: Option<PathBuf>,

    /// Skip confirmation prompts
    #[arg(long)]
    yes: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let args = Args::parse();
    init_logger(if args.verbose { "debug" } else { "info" });
    log_debug("dbutil", "Arguments", &args);

    let mut db_config = match &args.database_url {
        Some(url) => DbConfig::new(url.clone()),
        None => DbConfig::from_env().context("Failed to get database configuration")?,
    };
    // Schema scripts run on a single connection
    db_config.max_connections = 1;

    let sql = match (&args.script, &args.operation) {
        (Some(path), _) =>
            fs
                ::read_to_string(path)
                .with_context(|| format!("Failed to read schema file: {}", path.display()))?,
        (None, Operation::Create) => SCHEMA_SQL.to_string(),
        (None, Operation::Delete) => DELETE_SQL.to_string(),
    };

    if matches!(args.operation, Operation::Delete) && !args.yes {
        println!("WARNING: You are about to delete the studio schema!");
        println!("This will delete all clients, coaches, halls and trainings.");
        println!("Please type 'yes' to continue or any other input to abort:");

        let mut input = String::new();
        std::io::stdin().read_line(&mut input).context("Failed to read input")?;
        if input.trim().to_lowercase() != "yes" {
            println!("Aborted.");
            return Ok(());
        }
    }

    let db = Database::connect(db_config).await.context("Failed to connect to database")?;

    apply_schema(db.pool(), &sql, args.verbose).await?;

    log_activity("dbutil", "Database operation completed", Some(&format!("{:?}", args.operation)));
    Ok(())
}

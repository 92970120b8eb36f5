//! filekv CLI
//!
//! Command-line interface over a file-backed store of string keys and values.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use filekv::{Config, KvStore, OpenMode, PersistentStore, Result};
use tracing_subscriber::{fmt, EnvFilter};

type StringStore = PersistentStore<String, String>;

/// filekv CLI
#[derive(Parser, Debug)]
#[command(name = "filekv-cli")]
#[command(about = "CLI for the filekv persistent key-value store")]
#[command(version)]
struct Args {
    /// Backing file
    #[arg(short, long, default_value = "database.db")]
    path: PathBuf,

    /// Wipe an existing backing file when opening it
    #[arg(long)]
    truncate: bool,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key-value pair
    Set {
        /// The key to set
        key: String,

        /// The value to set
        value: String,
    },

    /// Delete a key, printing the removed value
    Del {
        /// The key to delete
        key: String,
    },

    /// Empty the store
    Reset,

    /// List all keys
    Keys,

    /// Run the set/get/delete scenario against the store (wipes it; needs --truncate)
    Selftest,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(args.log_file.as_deref()) {
        eprintln!("Failed to open log file: {}", e);
        process::exit(1);
    }

    if matches!(args.command, Commands::Selftest) && !args.truncate {
        tracing::error!("selftest wipes {}; rerun with --truncate", args.path.display());
        process::exit(1);
    }

    let open_mode = if args.truncate {
        OpenMode::Truncate
    } else {
        OpenMode::Load
    };
    let config = Config::builder()
        .path(&args.path)
        .open_mode(open_mode)
        .build();

    let mut store: StringStore = match PersistentStore::open(config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            process::exit(1);
        }
    };

    match run(&mut store, args.command) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            tracing::error!("{}", e);
            process::exit(1);
        }
    }
}

/// Initialize tracing, to stderr or to an append-mode log file
fn init_logging(log_file: Option<&Path>) -> std::io::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,filekv=debug"));
    let builder = fmt().with_env_filter(filter).with_target(true);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}

/// Execute one command. Returns `false` when the self-test fails.
fn run(store: &mut StringStore, command: Commands) -> Result<bool> {
    match command {
        Commands::Get { key } => print_lookup(store.get(&key)?),
        Commands::Set { key, value } => {
            store.set(value, key)?;
            println!("OK");
        }
        Commands::Del { key } => print_lookup(store.delete(&key)?),
        Commands::Reset => {
            store.reset()?;
            println!("OK");
        }
        Commands::Keys => {
            let mut keys = store.keys()?;
            keys.sort();
            for key in keys {
                println!("{}", key);
            }
        }
        Commands::Selftest => {
            store.reset()?;
            let passed = selftest(store)?;
            store.reset()?;
            return Ok(passed);
        }
    }
    Ok(true)
}

fn print_lookup(value: Option<String>) {
    match value {
        Some(value) => println!("{}", value),
        None => println!("Key not found"),
    }
}

/// Walk through set, overwrite, lookup and delete, printing each check
fn selftest<S: KvStore<String, String>>(store: &mut S) -> Result<bool> {
    let a = "a".to_string();
    let b = "b".to_string();

    let checks = vec![
        ("set a = 10", store.set("10".to_string(), a.clone())?),
        ("get a is 10", store.get(&a)? == Some("10".to_string())),
        ("set a = 20", store.set("20".to_string(), a.clone())?),
        ("get a is 20", store.get(&a)? == Some("20".to_string())),
        ("get b is absent", store.get(&b)?.is_none()),
        ("delete a returns 20", store.delete(&a)? == Some("20".to_string())),
        ("get a is absent", store.get(&a)?.is_none()),
        ("delete b returns absent", store.delete(&b)?.is_none()),
    ];

    let mut passed = true;
    for (name, ok) in checks {
        println!("{} ... {}", name, if ok { "ok" } else { "FAILED" });
        passed &= ok;
    }

    if passed {
        tracing::info!("All self-test checks passed");
    } else {
        tracing::warn!("Self-test failed");
    }
    Ok(passed)
}

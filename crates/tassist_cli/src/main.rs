//! Interactive command-line front-end.
//!
//! # Responsibility
//! - Resolve configuration, start logging, and load the address book.
//! - Relay each input line to `tassist_core::Logic` and print the outcome.

use clap::Parser;
use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tassist_core::config::DEFAULT_CONFIG_FILE;
use tassist_core::{
    init_logging, sample_address_book, AddressBook, AddressBookStorage, AppConfig,
    JsonAddressBookStorage, Logic, Model, StorageError,
};

#[derive(Parser)]
#[command(name = "tassist")]
#[command(about = "Contact manager for teaching assistants")]
#[command(version)]
struct Cli {
    /// Path to the JSON config file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Overrides the address book file from the config.
    #[arg(long)]
    data: Option<PathBuf>,
    /// Overrides the log level from the config.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("tassist: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let cwd = std::env::current_dir().map_err(|err| format!("cannot read working dir: {err}"))?;

    let mut config = AppConfig::load(&cli.config).map_err(|err| err.to_string())?;
    if let Some(level) = cli.log_level.as_deref() {
        config.set_log_level(level).map_err(|err| err.to_string())?;
    }
    if let Some(data) = cli.data {
        config.address_book_file_path = data;
    }
    let config = config.resolved_against(&cwd);

    init_logging(&config.log_level, &config.log_dir).map_err(|err| err.to_string())?;

    let storage = JsonAddressBookStorage::new(config.address_book_file_path.clone());
    let address_book = initial_address_book(&storage);
    let mut logic = Logic::new(Model::new(address_book), storage);

    println!("Welcome to TAssist! Type `help` to see available commands.");
    print_list(&logic);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush().map_err(|err| err.to_string())?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|err| format!("failed to read input: {err}"))?;
        if line.trim().is_empty() {
            continue;
        }

        match logic.execute(&line) {
            Ok(result) => {
                println!("{}", result.feedback);
                if result.exit {
                    break;
                }
                if !result.show_help {
                    print_list(&logic);
                }
            }
            Err(err) => println!("{err}"),
        }
    }

    info!("event=app_exit module=cli status=ok");
    Ok(())
}

/// Loads saved data, falling back to samples or an empty book.
fn initial_address_book(storage: &JsonAddressBookStorage) -> AddressBook {
    match storage.read_address_book() {
        Ok(Some(address_book)) => address_book,
        Ok(None) => {
            info!("event=data_load module=cli status=ok source=sample");
            sample_address_book().unwrap_or_else(|err| {
                warn!("event=data_load module=cli status=error source=sample error={err}");
                AddressBook::new()
            })
        }
        Err(err) => {
            let kind = match &err {
                StorageError::Io { .. } => "io",
                StorageError::Json { .. } => "json",
                StorageError::InvalidData { .. } => "invalid_data",
            };
            warn!("event=data_load module=cli status=error error_code={kind}");
            println!(
                "Data file at {} could not be loaded ({err}). Starting with an empty address book.",
                storage.address_book_file_path().display()
            );
            AddressBook::new()
        }
    }
}

fn print_list<S: AddressBookStorage>(logic: &Logic<S>) {
    for (idx, person) in logic.filtered_persons().iter().enumerate() {
        println!("{:>3}. {person}", idx + 1);
    }
}

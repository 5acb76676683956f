//! Discogs Top Rated Search Library
//!
//! This library searches the Discogs catalog, fetches the detail record of
//! every release found while respecting the API's request quota, and keeps
//! the releases whose community rating is above a threshold.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `discogs` - Discogs API client, pagination and rate limiting
//! - `error` - Error type shared by all modules
//! - `management` - Local style list storage
//! - `types` - Data structures and type definitions
//! - `utils` - Filtering, sorting and formatting helpers
//!
//! # Example
//!
//! ```
//! use toprated::{cli, config, types::{SearchCriteria, SearchField}};
//!
//! #[tokio::main]
//! async fn main() -> toprated::Res<()> {
//!     config::load_env().await?;
//!     let mut criteria = SearchCriteria::new();
//!     criteria.set(SearchField::Style, Some("techno".into()));
//!     cli::search(criteria, 4.0, false).await
//! }
//! ```

pub mod cli;
pub mod config;
pub mod discogs;
pub mod error;
pub mod management;
pub mod types;
pub mod utils;

pub use error::{Error, Res};

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Found {} releases", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal errors: the process terminates with exit code 1 right
/// after printing.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, such as a release the catalog refused to
/// return, or an empty result.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

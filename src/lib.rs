//! Spotify Catalog CLI Library
//!
//! This library provides the pieces behind the `spotcli` binary: a small
//! request pipeline, a client-credentials Spotify client and the command
//! implementations that print catalog data as tables.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management, credentials and environment variables
//! - `error` - Error type shared by all layers
//! - `request` - Single-shot HTTP helper (slugs, query, headers, JSON decode)
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and table rows
//!
//! # Example
//!
//! ```
//! use spotcli::{config, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> spotcli::error::Result<()> {
//!     config::load_env().await?;
//!     let client = SpotifyClient::from_env().await?;
//!     let artist = client.get_artist("The Black Keys").await?;
//!     println!("{}", artist.name);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod request;
pub mod spotify;
pub mod types;

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Found {} albums", count);
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
/// The process terminates with exit code 1 right after printing, so the
/// macro can be used in any expression position (it evaluates to `!`).
///
/// # Example
///
/// ```
/// let client = match SpotifyClient::from_env().await {
///     Ok(c) => c,
///     Err(e) => error!("Failed to create spotify client: {}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

//! # CLI Module
//!
//! User-facing command implementations for spotcli. Every command follows the
//! same shape: build a [`SpotifyClient`], call one client method while a
//! spinner runs, then print the result as a table or plain lines.
//!
//! ## Commands
//!
//! ### Artists
//!
//! - [`artist`] - Name, popularity and follower count of an artist
//! - [`artist_albums`] - Albums of an artist
//! - [`recommendations`] - Albums of tracks recommended from an artist seed
//!
//! ### Albums
//!
//! - [`album`] - Name, main artist and popularity of an album
//! - [`album_tracks`] - Track listing of an album
//!
//! ### Browse
//!
//! - [`categories`] - Browse categories
//! - [`category_playlist`] - Playlists tagged with a category
//! - [`new_releases`] - Featured new album releases
//!
//! ### Token
//!
//! - [`token`] - Checks the configured credentials by fetching a token
//!
//! ## Error Handling
//!
//! Failures are printed once, at this layer, with the `error!` macro, which
//! terminates the process with exit code 1. Empty results print a warning
//! instead of an empty table.
//!
//! ## Usage
//!
//! ```bash
//! spotcli artist The Black Keys
//! spotcli album-tracks Control
//! spotcli categories 10
//! spotcli category-playlist chill
//! ```

mod albums;
mod artists;
mod browse;
mod token;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error, spotify::SpotifyClient};

pub use albums::album;
pub use albums::album_tracks;
pub use artists::artist;
pub use artists::artist_albums;
pub use artists::recommendation_lines;
pub use artists::recommendations;
pub use browse::categories;
pub use browse::category_playlist;
pub use browse::new_releases;
pub use browse::playlist_lines;
pub use token::token;

/// Joins positional words into one search query, e.g. `The Black Keys`.
pub fn join_args(args: &[String]) -> String {
    args.iter()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

async fn client() -> SpotifyClient {
    match SpotifyClient::from_env().await {
        Ok(client) => client,
        Err(e) => error!("Failed to create new spotify client. Err: {}", e),
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

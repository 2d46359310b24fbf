use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotcli::{cli, config, spotify::browse::DEFAULT_CATEGORY_LIMIT, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Get an artist
    #[clap(after_help = "Example: spotcli artist The Black Keys")]
    Artist(NameOptions),

    /// Get an artist's albums
    #[clap(after_help = "Example: spotcli artist-albums The Black Keys")]
    ArtistAlbums(NameOptions),

    /// Get a list of categories
    #[clap(after_help = "Example: spotcli categories 2")]
    Categories(CategoriesOptions),

    /// Get a list of playlists tagged with the specified category
    #[clap(after_help = "Example: spotcli category-playlist chill")]
    CategoryPlaylist(CategoryPlaylistOptions),

    /// Get a list of new album releases featured in Spotify
    NewReleases,

    /// Get recommended tracks based on the provided artist
    #[clap(after_help = "Example: spotcli recommendations Fleetwood Mac")]
    Recommendations(NameOptions),

    /// Get Spotify catalog information for a single album
    #[clap(after_help = "Example: spotcli album Control")]
    Album(NameOptions),

    /// Get Spotify catalog information about an album's tracks
    #[clap(after_help = "Example: spotcli album-tracks Control")]
    AlbumTracks(NameOptions),

    /// Check the configured credentials by requesting an access token
    Token,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct NameOptions {
    /// Name to search for; multiple words are joined with spaces
    #[clap(required = true, num_args = 1..)]
    pub name: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CategoriesOptions {
    /// Number of categories to list (1-50)
    #[clap(
        default_value_t = DEFAULT_CATEGORY_LIMIT,
        value_parser = clap::value_parser!(u32).range(1..=50)
    )]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct CategoryPlaylistOptions {
    /// Category id, e.g. `chill`
    pub category_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Artist(opt) => cli::artist(opt.name).await,
        Command::ArtistAlbums(opt) => cli::artist_albums(opt.name).await,
        Command::Categories(opt) => cli::categories(opt.limit).await,
        Command::CategoryPlaylist(opt) => cli::category_playlist(opt.category_id).await,
        Command::NewReleases => cli::new_releases().await,
        Command::Recommendations(opt) => cli::recommendations(opt.name).await,
        Command::Album(opt) => cli::album(opt.name).await,
        Command::AlbumTracks(opt) => cli::album_tracks(opt.name).await,
        Command::Token => cli::token().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}

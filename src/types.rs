use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use tabled::Tabled;

#[derive(Debug, Clone, Deserialize)]
pub struct ClientSecrets {
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub scope: String,
    #[serde(skip_deserializing)]
    pub obtained_at: i64,
}

impl Token {
    /// Value for the `Authorization` header of API requests.
    pub fn authorization(&self) -> String {
        let token_type = if self.token_type.is_empty() {
            "Bearer"
        } else {
            &self.token_type
        };
        format!("{} {}", token_type, self.access_token)
    }

    /// `None` when the lifetime does not fit a timestamp.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.expires_in)
            .ok()
            .and_then(|secs| self.obtained_at.checked_add(secs))
            .and_then(|at| DateTime::from_timestamp(at, 0))
    }
}

/// Error bodies returned by the Web API and the accounts service.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorPayload {
    Api {
        error: ApiErrorBody,
    },
    Auth {
        error: String,
        #[serde(default)]
        error_description: Option<String>,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub status: u16,
    pub message: String,
}

impl ErrorPayload {
    pub fn message(&self) -> String {
        match self {
            ErrorPayload::Api { error } => error.message.clone(),
            ErrorPayload::Auth {
                error,
                error_description: Some(description),
            } => format!("{}: {}", error, description),
            ErrorPayload::Auth { error, .. } => error.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Followers {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Artist {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub followers: Followers,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumArtist {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub artists: Vec<AlbumArtist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub album: Album,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub href: String,
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Playlist {
    pub name: String,
    pub uri: String,
    #[serde(default)]
    pub collaborative: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumTrack {
    pub id: String,
    pub name: String,
    pub track_number: u32,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumDetails {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub artists: Vec<AlbumArtist>,
}

/// A list of items as the API wraps them. `null` entries are dropped.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Items<T> {
    #[serde(deserialize_with = "skip_null_items")]
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistSearchResponse {
    pub artists: Items<Artist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumSearchResponse {
    pub albums: Items<Album>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistAlbumsResponse {
    #[serde(deserialize_with = "skip_null_items")]
    pub items: Vec<Album>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryPage {
    #[serde(deserialize_with = "skip_null_items")]
    pub items: Vec<Category>,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub total: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesResponse {
    pub categories: CategoryPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryPlaylistsResponse {
    pub playlists: Items<Playlist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewReleasesResponse {
    pub albums: Items<Album>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsResponse {
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumTracksResponse {
    #[serde(deserialize_with = "skip_null_items")]
    pub items: Vec<AlbumTrack>,
    #[serde(default)]
    pub total: u32,
}

fn skip_null_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items: Vec<Option<T>> = Deserialize::deserialize(deserializer)?;
    Ok(items.into_iter().flatten().collect())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value: Option<T> = Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

pub fn join_artist_names(artists: &[AlbumArtist]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats a track length as `m:ss`.
pub fn format_duration(duration_ms: u64) -> String {
    let seconds = duration_ms / 1000;
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Popularity")]
    pub popularity: u32,
    #[tabled(rename = "Followers")]
    pub followers: u64,
}

impl From<&Artist> for ArtistTableRow {
    fn from(artist: &Artist) -> Self {
        ArtistTableRow {
            name: artist.name.clone(),
            popularity: artist.popularity,
            followers: artist.followers.total,
        }
    }
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Released")]
    pub release_date: String,
    #[tabled(rename = "Artists")]
    pub artists: String,
}

impl From<&Album> for AlbumTableRow {
    fn from(album: &Album) -> Self {
        AlbumTableRow {
            name: album.name.clone(),
            release_date: album.release_date.clone().unwrap_or_default(),
            artists: join_artist_names(&album.artists),
        }
    }
}

#[derive(Tabled)]
pub struct AlbumDetailsTableRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Artist")]
    pub artist: String,
    #[tabled(rename = "Popularity")]
    pub popularity: u32,
}

impl From<&AlbumDetails> for AlbumDetailsTableRow {
    fn from(album: &AlbumDetails) -> Self {
        AlbumDetailsTableRow {
            name: album.name.clone(),
            artist: album
                .artists
                .first()
                .map(|a| a.name.clone())
                .unwrap_or_default(),
            popularity: album.popularity,
        }
    }
}

#[derive(Tabled)]
pub struct AlbumTrackTableRow {
    #[tabled(rename = "Track Number")]
    pub track_number: u32,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Duration")]
    pub duration: String,
}

impl From<&AlbumTrack> for AlbumTrackTableRow {
    fn from(track: &AlbumTrack) -> Self {
        AlbumTrackTableRow {
            track_number: track.track_number,
            name: track.name.clone(),
            duration: format_duration(track.duration_ms),
        }
    }
}

#[derive(Tabled)]
pub struct CategoryTableRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "ID")]
    pub id: String,
}

impl From<&Category> for CategoryTableRow {
    fn from(category: &Category) -> Self {
        CategoryTableRow {
            name: category.name.clone(),
            id: category.id.clone(),
        }
    }
}

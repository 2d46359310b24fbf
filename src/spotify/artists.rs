use crate::{
    error::{Error, Result},
    types::{
        Album, Artist, ArtistAlbumsResponse, ArtistSearchResponse, RecommendationsResponse, Token,
        Track,
    },
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Searches for `name` and returns the best matching artist.
    pub async fn get_artist(&self, name: &str) -> Result<Artist> {
        let name = Self::require_query("artist name", name)?;
        let token = self.fetch_token().await?;
        self.search_artist(&token, name).await
    }

    pub async fn search_artist_id(&self, name: &str) -> Result<String> {
        let name = Self::require_query("artist name", name)?;
        let token = self.fetch_token().await?;
        self.search_artist_id_with(&token, name).await
    }

    /// Albums of the artist best matching `name`.
    pub async fn get_artist_albums(&self, name: &str) -> Result<Vec<Album>> {
        let name = Self::require_query("artist name", name)?;
        let token = self.fetch_token().await?;
        let artist_id = self.search_artist_id_with(&token, name).await?;

        let res: ArtistAlbumsResponse = self
            .get_with_token(
                &token,
                "/artists/{artistID}/albums",
                &[("{artistID}", artist_id.as_str())],
                &[("limit", "50")],
            )
            .await?;

        Ok(res.items)
    }

    /// Tracks recommended from the artist best matching `name` as seed.
    pub async fn get_recommendations_by_artist(&self, name: &str) -> Result<Vec<Track>> {
        let name = Self::require_query("artist name", name)?;
        let token = self.fetch_token().await?;
        let artist_id = self.search_artist_id_with(&token, name).await?;

        let res: RecommendationsResponse = self
            .get_with_token(
                &token,
                "/recommendations",
                &[],
                &[("seed_artists", artist_id.as_str()), ("limit", "3")],
            )
            .await?;

        Ok(res.tracks)
    }

    async fn search_artist(&self, token: &Token, name: &str) -> Result<Artist> {
        let res: ArtistSearchResponse = self
            .get_with_token(
                token,
                "/search",
                &[],
                &[("q", name), ("type", "artist"), ("limit", "1")],
            )
            .await?;

        res.artists
            .items
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound {
                kind: "artist",
                query: name.to_string(),
            })
    }

    async fn search_artist_id_with(&self, token: &Token, name: &str) -> Result<String> {
        self.search_artist(token, name)
            .await?
            .id
            .ok_or_else(|| Error::NotFound {
                kind: "artist",
                query: name.to_string(),
            })
    }
}

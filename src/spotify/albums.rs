use crate::{
    error::{Error, Result},
    types::{AlbumDetails, AlbumSearchResponse, AlbumTrack, AlbumTracksResponse, Token},
};

use super::SpotifyClient;

impl SpotifyClient {
    pub async fn search_album_id(&self, name: &str) -> Result<String> {
        let name = Self::require_query("album name", name)?;
        let token = self.fetch_token().await?;
        self.search_album_id_with(&token, name).await
    }

    /// Catalog information for the album best matching `name`.
    pub async fn get_album(&self, name: &str) -> Result<AlbumDetails> {
        let name = Self::require_query("album name", name)?;
        let token = self.fetch_token().await?;
        let album_id = self.search_album_id_with(&token, name).await?;

        self.get_with_token(
            &token,
            "/albums/{albumID}",
            &[("{albumID}", album_id.as_str())],
            &[],
        )
        .await
    }

    /// Track listing for the album best matching `name`.
    pub async fn get_album_tracks(&self, name: &str) -> Result<Vec<AlbumTrack>> {
        let name = Self::require_query("album name", name)?;
        let token = self.fetch_token().await?;
        let album_id = self.search_album_id_with(&token, name).await?;

        let res: AlbumTracksResponse = self
            .get_with_token(
                &token,
                "/albums/{albumID}/tracks",
                &[("{albumID}", album_id.as_str())],
                &[("limit", "50")],
            )
            .await?;

        Ok(res.items)
    }

    async fn search_album_id_with(&self, token: &Token, name: &str) -> Result<String> {
        let res: AlbumSearchResponse = self
            .get_with_token(
                token,
                "/search",
                &[],
                &[("q", name), ("type", "album"), ("limit", "1")],
            )
            .await?;

        res.albums
            .items
            .into_iter()
            .next()
            .and_then(|album| album.id)
            .ok_or_else(|| Error::NotFound {
                kind: "album",
                query: name.to_string(),
            })
    }
}

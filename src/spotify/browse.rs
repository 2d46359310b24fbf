use crate::{
    error::Result,
    types::{
        Album, CategoriesResponse, Category, CategoryPlaylistsResponse, NewReleasesResponse,
        Playlist,
    },
};

use super::SpotifyClient;

pub const DEFAULT_CATEGORY_LIMIT: u32 = 50;

impl SpotifyClient {
    pub async fn get_category_list(&self, limit: u32) -> Result<Vec<Category>> {
        let token = self.fetch_token().await?;
        let limit = limit.to_string();

        let res: CategoriesResponse = self
            .get_with_token(
                &token,
                "/browse/categories",
                &[],
                &[("limit", limit.as_str())],
            )
            .await?;

        Ok(res.categories.items)
    }

    /// Playlists Spotify tagged with the category, e.g. `chill`.
    pub async fn get_category_playlists(&self, category_id: &str) -> Result<Vec<Playlist>> {
        let category_id = Self::require_query("category id", category_id)?;
        let token = self.fetch_token().await?;

        let res: CategoryPlaylistsResponse = self
            .get_with_token(
                &token,
                "/browse/categories/{categoryID}/playlists",
                &[("{categoryID}", category_id)],
                &[("limit", "5")],
            )
            .await?;

        Ok(res.playlists.items)
    }

    pub async fn get_new_releases(&self) -> Result<Vec<Album>> {
        let token = self.fetch_token().await?;

        let res: NewReleasesResponse = self
            .get_with_token(&token, "/browse/new-releases", &[], &[("limit", "50")])
            .await?;

        Ok(res.albums.items)
    }
}

use tabled::Table;

use crate::{
    error,
    types::{AlbumTableRow, CategoryTableRow, Playlist},
    warning,
};

use super::{client, spinner};

pub async fn categories(limit: u32) {
    let client = client().await;

    let pb = spinner("Fetching categories...");
    let result = client.get_category_list(limit).await;
    pb.finish_and_clear();

    match result {
        Ok(categories) if categories.is_empty() => warning!("No categories found."),
        Ok(categories) => {
            let rows: Vec<CategoryTableRow> =
                categories.iter().map(CategoryTableRow::from).collect();
            println!("{}", Table::new(rows));
        }
        Err(e) => error!("Failed to get category list. Err: {}", e),
    }
}

pub async fn category_playlist(category_id: String) {
    let client = client().await;

    let pb = spinner(&format!("Fetching playlists for category '{}'...", category_id));
    let result = client.get_category_playlists(&category_id).await;
    pb.finish_and_clear();

    match result {
        Ok(playlists) if playlists.is_empty() => {
            warning!("No playlists found for category '{}'.", category_id)
        }
        Ok(playlists) => {
            for line in playlist_lines(&playlists) {
                println!("{}", line);
            }
        }
        Err(e) => error!("Failed to get category playlists. Err: {}", e),
    }
}

pub async fn new_releases() {
    let client = client().await;

    let pb = spinner("Fetching new releases...");
    let result = client.get_new_releases().await;
    pb.finish_and_clear();

    match result {
        Ok(albums) if albums.is_empty() => warning!("No new releases found."),
        Ok(albums) => {
            let rows: Vec<AlbumTableRow> = albums.iter().map(AlbumTableRow::from).collect();
            println!("{}", Table::new(rows));
        }
        Err(e) => error!("Failed to get new releases. Err: {}", e),
    }
}

pub fn playlist_lines(playlists: &[Playlist]) -> Vec<String> {
    playlists
        .iter()
        .map(|p| format!("{} -- {}", p.name, p.uri))
        .collect()
}

use tabled::Table;

use crate::{
    error,
    types::{AlbumTableRow, ArtistTableRow, Track},
    warning,
};

use super::{client, join_args, spinner};

pub async fn artist(name: Vec<String>) {
    let query = join_args(&name);
    let client = client().await;

    let pb = spinner(&format!("Searching artist '{}'...", query));
    let result = client.get_artist(&query).await;
    pb.finish_and_clear();

    match result {
        Ok(artist) => {
            let table = Table::new(vec![ArtistTableRow::from(&artist)]);
            println!("{}", table);
        }
        Err(e) => error!("Failed to get artist. Err: {}", e),
    }
}

pub async fn artist_albums(name: Vec<String>) {
    let query = join_args(&name);
    let client = client().await;

    let pb = spinner(&format!("Fetching albums of '{}'...", query));
    let result = client.get_artist_albums(&query).await;
    pb.finish_and_clear();

    match result {
        Ok(albums) if albums.is_empty() => warning!("No albums found for '{}'.", query),
        Ok(albums) => {
            let rows: Vec<AlbumTableRow> = albums.iter().map(AlbumTableRow::from).collect();
            println!("{}", Table::new(rows));
        }
        Err(e) => error!("Failed to get artist albums. Err: {}", e),
    }
}

pub async fn recommendations(name: Vec<String>) {
    let query = join_args(&name);
    let client = client().await;

    let pb = spinner(&format!("Fetching recommendations for '{}'...", query));
    let result = client.get_recommendations_by_artist(&query).await;
    pb.finish_and_clear();

    match result {
        Ok(tracks) if tracks.is_empty() => warning!("No recommendations for '{}'.", query),
        Ok(tracks) => {
            for line in recommendation_lines(&tracks) {
                println!("{}", line);
            }
        }
        Err(e) => error!("Failed to get recommendations by artist. Err: {}", e),
    }
}

/// One line per recommended track: the album it appears on, plus the track
/// name when the API includes it.
pub fn recommendation_lines(tracks: &[Track]) -> Vec<String> {
    tracks
        .iter()
        .map(|t| match &t.name {
            Some(name) => format!("{} ({})", t.album.name, name),
            None => t.album.name.clone(),
        })
        .collect()
}

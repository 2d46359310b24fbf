use tabled::Table;

use crate::{
    error,
    types::{AlbumDetailsTableRow, AlbumTrackTableRow},
    warning,
};

use super::{client, join_args, spinner};

pub async fn album(name: Vec<String>) {
    let query = join_args(&name);
    let client = client().await;

    let pb = spinner(&format!("Fetching album '{}'...", query));
    let result = client.get_album(&query).await;
    pb.finish_and_clear();

    match result {
        Ok(album) => {
            let table = Table::new(vec![AlbumDetailsTableRow::from(&album)]);
            println!("{}", table);
        }
        Err(e) => error!("Failed to get album. Err: {}", e),
    }
}

pub async fn album_tracks(name: Vec<String>) {
    let query = join_args(&name);
    let client = client().await;

    let pb = spinner(&format!("Fetching tracks of '{}'...", query));
    let result = client.get_album_tracks(&query).await;
    pb.finish_and_clear();

    match result {
        Ok(tracks) if tracks.is_empty() => warning!("Album '{}' has no tracks.", query),
        Ok(tracks) => {
            let rows: Vec<AlbumTrackTableRow> =
                tracks.iter().map(AlbumTrackTableRow::from).collect();
            println!("{}", Table::new(rows));
        }
        Err(e) => error!("Failed to get album tracks. Err: {}", e),
    }
}

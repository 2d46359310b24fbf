use spotcli::cli::{join_args, playlist_lines, recommendation_lines};
use spotcli::types::*;

fn album_artist(name: &str) -> AlbumArtist {
    AlbumArtist {
        id: None,
        name: name.to_string(),
    }
}

// Helper function to create a test album
fn create_test_album(name: &str, release_date: Option<&str>, artists: &[&str]) -> Album {
    Album {
        id: Some(format!("{}_id", name)),
        name: name.to_string(),
        release_date: release_date.map(str::to_string),
        artists: artists.iter().map(|a| album_artist(a)).collect(),
    }
}

fn create_test_token(token_type: &str) -> Token {
    Token {
        access_token: "abc".to_string(),
        token_type: token_type.to_string(),
        expires_in: 3600,
        scope: String::new(),
        obtained_at: 1_700_000_000,
    }
}

#[test]
fn test_token_authorization() {
    assert_eq!(create_test_token("Bearer").authorization(), "Bearer abc");

    // Missing type falls back to Bearer
    assert_eq!(create_test_token("").authorization(), "Bearer abc");
}

#[test]
fn test_token_expires_at() {
    let token = create_test_token("Bearer");
    let expires_at = token.expires_at().unwrap();
    assert_eq!(expires_at.timestamp(), 1_700_003_600);
}

#[test]
fn test_token_expires_at_out_of_range() {
    let mut token = create_test_token("Bearer");

    token.expires_in = i64::MAX as u64;
    assert!(token.expires_at().is_none());

    token.expires_in = u64::MAX;
    assert!(token.expires_at().is_none());

    // Fits in i64 but not in a calendar date
    token.expires_in = 1 << 50;
    assert!(token.expires_at().is_none());
}

#[test]
fn test_token_deserialize_without_scope() {
    let token: Token = serde_json::from_str(
        r#"{"access_token":"xyz","token_type":"Bearer","expires_in":3600}"#,
    )
    .unwrap();
    assert_eq!(token.access_token, "xyz");
    assert_eq!(token.scope, "");
    assert_eq!(token.obtained_at, 0);
}

#[test]
fn test_error_payload_message() {
    let payload: ErrorPayload =
        serde_json::from_str(r#"{"error":{"status":429,"message":"API rate limit exceeded"}}"#)
            .unwrap();
    assert_eq!(payload.message(), "API rate limit exceeded");

    let payload: ErrorPayload = serde_json::from_str(r#"{"error":"invalid_grant"}"#).unwrap();
    assert_eq!(payload.message(), "invalid_grant");
}

#[test]
fn test_items_skip_null_entries() {
    let res: CategoryPlaylistsResponse = serde_json::from_str(
        r#"{"playlists":{"items":[null,{"name":"P","uri":"spotify:playlist:1"},null]}}"#,
    )
    .unwrap();
    assert_eq!(res.playlists.items.len(), 1);
    assert_eq!(res.playlists.items[0].name, "P");
    assert!(!res.playlists.items[0].collaborative);
}

#[test]
fn test_artist_missing_required_name_is_an_error() {
    let res = serde_json::from_str::<ArtistSearchResponse>(r#"{"artists":{"items":[{"id":"x"}]}}"#);
    assert!(res.is_err());
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(61_000), "1:01");
    assert_eq!(format_duration(245_500), "4:05");
    assert_eq!(format_duration(3_600_000), "60:00");
}

#[test]
fn test_join_artist_names() {
    assert_eq!(join_artist_names(&[]), "");
    assert_eq!(
        join_artist_names(&[album_artist("Simon"), album_artist("Garfunkel")]),
        "Simon, Garfunkel"
    );
}

#[test]
fn test_artist_table_row() {
    let artist = Artist {
        id: None,
        name: "The Black Keys".to_string(),
        popularity: 73,
        followers: Followers { total: 42 },
    };
    let row = ArtistTableRow::from(&artist);
    assert_eq!(row.name, "The Black Keys");
    assert_eq!(row.popularity, 73);
    assert_eq!(row.followers, 42);
}

#[test]
fn test_album_table_row() {
    let album = create_test_album("El Camino", Some("2011-12-06"), &["The Black Keys"]);
    let row = AlbumTableRow::from(&album);
    assert_eq!(row.name, "El Camino");
    assert_eq!(row.release_date, "2011-12-06");
    assert_eq!(row.artists, "The Black Keys");

    let album = create_test_album("Unknown", None, &[]);
    let row = AlbumTableRow::from(&album);
    assert_eq!(row.release_date, "");
    assert_eq!(row.artists, "");
}

#[test]
fn test_album_details_table_row_uses_first_artist() {
    let details = AlbumDetails {
        id: "1".to_string(),
        name: "Watch the Throne".to_string(),
        popularity: 70,
        release_date: None,
        artists: vec![album_artist("JAY-Z"), album_artist("Kanye West")],
    };
    let row = AlbumDetailsTableRow::from(&details);
    assert_eq!(row.artist, "JAY-Z");
    assert_eq!(row.popularity, 70);

    let details = AlbumDetails {
        artists: Vec::new(),
        ..details
    };
    assert_eq!(AlbumDetailsTableRow::from(&details).artist, "");
}

#[test]
fn test_album_track_table_row() {
    let track = AlbumTrack {
        id: "t".to_string(),
        name: "Intro".to_string(),
        track_number: 1,
        duration_ms: 61_000,
        preview_url: None,
    };
    let row = AlbumTrackTableRow::from(&track);
    assert_eq!(row.track_number, 1);
    assert_eq!(row.name, "Intro");
    assert_eq!(row.duration, "1:01");
}

#[test]
fn test_join_args() {
    let args = vec!["The".to_string(), "Black".to_string(), "Keys".to_string()];
    assert_eq!(join_args(&args), "The Black Keys");

    let args = vec!["  Control ".to_string(), "".to_string()];
    assert_eq!(join_args(&args), "Control");
}

#[test]
fn test_playlist_lines() {
    let playlists = vec![Playlist {
        name: "Chill Hits".to_string(),
        uri: "spotify:playlist:1".to_string(),
        collaborative: false,
        description: String::new(),
    }];
    assert_eq!(
        playlist_lines(&playlists),
        vec!["Chill Hits -- spotify:playlist:1"]
    );
}

#[test]
fn test_recommendation_lines() {
    let tracks = vec![
        Track {
            album: create_test_album("El Camino", None, &[]),
            name: Some("Lonely Boy".to_string()),
        },
        Track {
            album: create_test_album("Brothers", None, &[]),
            name: None,
        },
    ];
    assert_eq!(
        recommendation_lines(&tracks),
        vec!["El Camino (Lonely Boy)", "Brothers"]
    );
}

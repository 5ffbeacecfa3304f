use std::fs;

use tempfile::tempdir;

use super::*;

const SAMPLE: &str = r#"[
  {
    "name": "Kind of Blue",
    "artist": "Miles Davis",
    "code": 101,
    "cover": "covers/kind-of-blue.jpg",
    "tracks": [
      { "name": "So What", "duration": 545 },
      { "name": "Blue in Green", "duration": 327 }
    ]
  },
  {
    "name": "Empty Shelf",
    "artist": "Nobody",
    "id": 102,
    "cover": "",
    "tracks": []
  }
]"#;

#[test]
fn load_records_parses_the_documented_shape() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("albums.json");
    fs::write(&path, SAMPLE).unwrap();

    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Kind of Blue");
    assert_eq!(records[0].code, 101);
    assert_eq!(records[0].tracks.len(), 2);
    assert_eq!(records[0].tracks[1].duration, 327);
}

#[test]
fn code_is_accepted_under_the_legacy_id_alias() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("albums.json");
    fs::write(&path, SAMPLE).unwrap();

    let records = load_records(&path).unwrap();
    assert_eq!(records[1].code, 102);
}

#[test]
fn load_albums_builds_tracks_in_file_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("albums.json");
    fs::write(&path, SAMPLE).unwrap();

    let albums = load_albums(&path).unwrap();
    assert_eq!(albums[0].track_count(), 2);
    assert_eq!(albums[0].tracks()[0].name, "So What");
    assert_eq!(albums[0].total_duration(), 872);
    assert_eq!(albums[1].track_count(), 0);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = load_records(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, SourceError::Io(_)));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("albums.json");
    fs::write(&path, "[ { \"name\": ").unwrap();

    let err = load_records(&path).unwrap_err();
    assert!(matches!(err, SourceError::Parse(_)));
}

#[test]
fn out_of_range_code_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("albums.json");
    fs::write(
        &path,
        r#"[ { "name": "X", "artist": "Y", "code": 100000, "cover": "", "tracks": [] } ]"#,
    )
    .unwrap();

    let err = load_records(&path).unwrap_err();
    assert!(matches!(err, SourceError::Parse(_)));
}

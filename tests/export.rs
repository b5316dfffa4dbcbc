// tests/export.rs
//
// Export path resolution and file contents, without the network.
//
use std::fs;
use std::path::PathBuf;

use filmography_scrape::config::options::{ExportFormat, ExportOptions};
use filmography_scrape::file::{resolve_out_path, write_export};
use filmography_scrape::{FilmRow, FilmographyTable};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("filmography_export_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn table() -> FilmographyTable {
    FilmographyTable::from_rows(vec![
        FilmRow::new("Sully", Some(2016)),
        FilmRow::new("Forrest Gump", Some(1994)),
        FilmRow::new("Untitled Project", None),
    ])
}

#[test]
fn existing_dir_gets_actor_file() {
    let dir = tmp_dir("dir");
    let path = resolve_out_path(&dir, "Tom Hanks", "csv").unwrap();
    assert_eq!(path, dir.join("tom_hanks.csv"));
}

#[test]
fn trailing_separator_creates_dir() {
    let dir = tmp_dir("hint").join("nested");
    let hinted = PathBuf::from(format!("{}/", dir.display()));
    let path = resolve_out_path(&hinted, "Cher", "tsv").unwrap();
    assert!(dir.is_dir());
    assert!(path.to_string_lossy().ends_with("cher.tsv"));
}

#[test]
fn file_path_used_as_given() {
    let dir = tmp_dir("file");
    let target = dir.join("deep").join("hanks.txt");
    let path = resolve_out_path(&target, "Tom Hanks", "csv").unwrap();
    assert_eq!(path, target);
    assert!(dir.join("deep").is_dir());
}

#[test]
fn writes_csv_with_headers() {
    let dir = tmp_dir("csv");
    let export = ExportOptions {
        format: ExportFormat::Csv,
        out: Some(dir.clone()),
        include_headers: true,
    };
    let path = write_export(&export, "Tom Hanks", &table()).unwrap();
    let s = fs::read_to_string(&path).unwrap();
    assert_eq!(s, "Title,Year\nSully,2016\nForrest Gump,1994\nUntitled Project,\n");
}

#[test]
fn writes_tsv_without_headers() {
    let dir = tmp_dir("tsv");
    let export = ExportOptions {
        format: ExportFormat::Tsv,
        out: Some(dir.join("hanks.tsv")),
        include_headers: false,
    };
    let path = write_export(&export, "Tom Hanks", &table()).unwrap();
    let s = fs::read_to_string(&path).unwrap();
    assert!(s.starts_with("Sully\t2016\n"));
    assert!(!s.contains("Title"));
}

#[test]
fn file_in_place_of_dir_is_error() {
    let dir = tmp_dir("clash");
    let blocker = dir.join("blocker");
    fs::write(&blocker, "x").unwrap();
    let err = resolve_out_path(&blocker.join("out.csv"), "Cher", "csv").unwrap_err();
    assert!(err.to_string().contains("not a directory"));
}

//! Listing tests for peek.
//!
//! These tests run the scan and ordering pipeline against real temporary
//! directories: hidden-file filtering toggled by the all flag, panel split
//! and ordering, child counts, and the empty-directory case. Temporary
//! resources are cleaned up automatically after the tests complete.

use peek::core::{Listing, scan_dir};

use std::error;
use std::fs::{self, File};
use std::io::Write;
use tempfile::tempdir;

#[test]
fn test_empty_dir_listing() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    let entries = scan_dir(tmp.path(), false, true)?;
    let listing = Listing::from_entries(entries, false);

    assert!(listing.is_empty(), "Directory should be empty");
    Ok(())
}

#[test]
fn test_hidden_filter_toggle() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    File::create(tmp.path().join(".gitignore"))?;
    File::create(tmp.path().join("Cargo.toml"))?;
    fs::create_dir(tmp.path().join(".git"))?;
    fs::create_dir(tmp.path().join("src"))?;

    let default = Listing::from_entries(scan_dir(tmp.path(), false, true)?, false);
    assert_eq!(default.dirs().len(), 1);
    assert_eq!(default.files().len(), 1);

    let all = Listing::from_entries(scan_dir(tmp.path(), true, true)?, false);
    assert_eq!(all.dirs().len(), 2);
    assert_eq!(all.files().len(), 2);
    assert!(all.dirs().iter().any(|d| d.is_hidden()));
    Ok(())
}

#[test]
fn test_split_and_ordering() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    fs::create_dir(tmp.path().join("Zebra"))?;
    fs::create_dir(tmp.path().join("alpha"))?;

    let mut big = File::create(tmp.path().join("big.bin"))?;
    big.write_all(&[0u8; 4096])?;
    let mut small = File::create(tmp.path().join("small.txt"))?;
    small.write_all(b"hi")?;

    let listing = Listing::from_entries(scan_dir(tmp.path(), false, true)?, false);

    let dir_names: Vec<String> = listing
        .dirs()
        .iter()
        .map(|d| d.name_str().into_owned())
        .collect();
    assert_eq!(dir_names, ["alpha", "Zebra"]);

    let file_names: Vec<String> = listing
        .files()
        .iter()
        .map(|f| f.name_str().into_owned())
        .collect();
    assert_eq!(file_names, ["big.bin", "small.txt"]);
    Ok(())
}

#[test]
fn test_files_only_listing() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    fs::create_dir(tmp.path().join("src"))?;
    File::create(tmp.path().join("main.rs"))?;

    let entries = scan_dir(tmp.path(), false, false)?;
    let listing = Listing::from_entries(entries, true);

    assert!(listing.dirs().is_empty());
    assert_eq!(listing.files().len(), 1);
    Ok(())
}

#[test]
fn test_child_counts_feed_subtitles() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    let project = tmp.path().join("project");
    fs::create_dir(&project)?;
    fs::create_dir(project.join("src"))?;
    fs::create_dir(project.join("tests"))?;
    File::create(project.join("Cargo.toml"))?;

    let listing = Listing::from_entries(scan_dir(tmp.path(), false, true)?, false);
    let dir = listing.dirs().first().ok_or("no dir scanned")?;

    assert_eq!(dir.sub_dirs(), 2);
    assert_eq!(dir.sub_files(), 1);
    assert_eq!(
        peek::core::dir_subtitle(dir.sub_dirs(), dir.sub_files()),
        "2 dirs, 1 file"
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlink_classification() -> Result<(), Box<dyn error::Error>> {
    use std::os::unix::fs::symlink;

    let tmp = tempdir()?;
    fs::create_dir(tmp.path().join("real_dir"))?;
    File::create(tmp.path().join("real_file"))?;
    symlink(tmp.path().join("real_dir"), tmp.path().join("dir_link"))?;
    symlink(tmp.path().join("real_file"), tmp.path().join("file_link"))?;
    symlink(tmp.path().join("missing"), tmp.path().join("broken_link"))?;

    let listing = Listing::from_entries(scan_dir(tmp.path(), false, true)?, false);

    let dir_link = listing
        .dirs()
        .iter()
        .find(|d| d.name_str() == "dir_link")
        .ok_or("dir symlink not classified as dir")?;
    assert!(dir_link.is_symlink());

    // File symlinks and broken symlinks both land in the file panel
    assert!(listing.files().iter().any(|f| f.name_str() == "file_link"));
    assert!(listing.files().iter().any(|f| f.name_str() == "broken_link"));
    Ok(())
}

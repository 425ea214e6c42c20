//! End-to-end integration tests for the full mirror flow.
//!
//! These tests exercise the complete lifecycle across several runs: new
//! files, edits, deletions, and the marker conventions, through both the
//! library API and the compiled binary.

use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;
use mirror_core::{MirrorEngine, MirrorJob, MirrorOptions};
use mirror_fs::MarkerKind;
use tempfile::TempDir;

/// Two source trees and a destination root inside one TempDir.
fn setup_sources() -> (TempDir, PathBuf, PathBuf, PathBuf) {
    let temp = TempDir::new().unwrap();
    let docs = temp.path().join("docs");
    let photos = temp.path().join("photos");
    let dest = temp.path().join("backup");

    fs::create_dir_all(docs.join("projects")).unwrap();
    fs::write(docs.join("notes.txt"), b"meeting notes").unwrap();
    fs::write(docs.join("projects").join("plan.md"), b"# plan").unwrap();
    fs::create_dir(&photos).unwrap();
    fs::write(photos.join("trip.jpg"), b"\xff\xd8fakejpeg").unwrap();

    (temp, docs, photos, dest)
}

fn execute(dest: &Path, sources: Vec<PathBuf>, options: MirrorOptions) -> mirror_core::MirrorReport {
    MirrorEngine::new(options)
        .execute(&MirrorJob::new(dest, sources))
        .unwrap()
}

#[test]
fn full_lifecycle_across_runs() {
    let (_temp, docs, photos, dest) = setup_sources();

    // Run 1: everything is new
    let report = execute(&dest, vec![docs.clone(), photos.clone()], MirrorOptions::default());
    assert_eq!(report.copied, 3);
    assert!(dest.join("docs").join("notes.txt").exists());
    assert!(dest.join("docs").join("projects").join("plan.md").exists());
    assert!(dest.join("photos").join("trip.jpg").exists());

    // Run 2: nothing changed
    let report = execute(&dest, vec![docs.clone(), photos.clone()], MirrorOptions::default());
    assert!(report.is_noop());
    assert_eq!(report.skipped, 3);

    // Edit one file, remove another
    fs::write(docs.join("notes.txt"), b"meeting notes, revised today").unwrap();
    fs::remove_file(photos.join("trip.jpg")).unwrap();

    // Run 3: one update with backup, one deletion marker
    let report = execute(&dest, vec![docs.clone(), photos.clone()], MirrorOptions::default());
    assert_eq!(report.updated, 1);
    assert_eq!(report.backed_up, 1);
    assert_eq!(report.marked_deleted, 1);

    assert_eq!(
        fs::read(dest.join("docs").join("~bak.notes.txt")).unwrap(),
        b"meeting notes"
    );
    assert_eq!(
        fs::read(dest.join("docs").join("notes.txt")).unwrap(),
        b"meeting notes, revised today"
    );
    assert_eq!(
        fs::read(dest.join("photos").join("~del.trip.jpg")).unwrap(),
        b"\xff\xd8fakejpeg"
    );

    // Run 4: the markers rest untouched and nothing else changes
    let report = execute(&dest, vec![docs, photos], MirrorOptions::default());
    assert!(report.is_noop());
}

#[test]
fn mirrored_attributes_survive_for_change_detection() {
    let (_temp, docs, _photos, dest) = setup_sources();
    let stamp = FileTime::from_unix_time(1_555_555_555, 0);
    filetime::set_file_mtime(docs.join("notes.txt"), stamp).unwrap();

    execute(&dest, vec![docs.clone()], MirrorOptions::default());

    let mirrored = dest.join("docs").join("notes.txt");
    let meta = fs::metadata(&mirrored).unwrap();
    assert_eq!(
        FileTime::from_last_modification_time(&meta).unix_seconds(),
        stamp.unix_seconds()
    );
}

#[test]
fn marker_names_match_the_library_convention() {
    let (_temp, docs, _photos, dest) = setup_sources();
    execute(&dest, vec![docs.clone()], MirrorOptions::default());

    fs::write(docs.join("notes.txt"), b"changed contents, new length").unwrap();
    execute(&dest, vec![docs], MirrorOptions::default());

    let expected = MarkerKind::Backup.apply("notes.txt");
    assert!(dest.join("docs").join(expected).exists());
}

#[test]
fn binary_and_library_agree_on_the_tree() {
    let (_temp, docs, photos, dest_lib) = setup_sources();
    let dest_bin = dest_lib.parent().unwrap().join("backup-bin");

    execute(
        &dest_lib,
        vec![docs.clone(), photos.clone()],
        MirrorOptions::default(),
    );

    assert_cmd::Command::cargo_bin("mirror")
        .expect("Failed to find mirror binary")
        .args([
            dest_bin.to_str().unwrap(),
            docs.to_str().unwrap(),
            photos.to_str().unwrap(),
        ])
        .assert()
        .success();

    for rel in [
        Path::new("docs").join("notes.txt"),
        Path::new("docs").join("projects").join("plan.md"),
        Path::new("photos").join("trip.jpg"),
    ] {
        assert_eq!(
            fs::read(dest_lib.join(&rel)).unwrap(),
            fs::read(dest_bin.join(&rel)).unwrap(),
            "library and binary disagree on {}",
            rel.display()
        );
    }
}

#[test]
fn json_report_from_binary_matches_the_run() {
    let (_temp, docs, _photos, dest) = setup_sources();

    let output = assert_cmd::Command::cargo_bin("mirror")
        .expect("Failed to find mirror binary")
        .args(["--json", dest.to_str().unwrap(), docs.to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["copied"], 2);
    assert_eq!(report["updated"], 0);
    assert_eq!(report["skipped"], 0);
}

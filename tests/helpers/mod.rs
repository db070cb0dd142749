//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path of a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Load a fixture split into lines
pub fn fixture_lines(name: &str) -> Vec<String> {
    text_divider::reader::read_lines(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}

/// Create a temporary directory with a copy of a fixture
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path().join(name);
    fs::write(&temp_path, load_fixture(name)).expect("Failed to write temp fixture");
    (temp_dir, temp_path)
}

/// Transcript with speakers A (3 lines), B (1 line) and no speaker (2 lines)
pub fn three_speaker_lines() -> Vec<&'static str> {
    vec!["/A\"one\"", "/A\"two\"", "", "/B\"three\"", "", "/A\"four\""]
}

/// The novel fixture as the TSV rows text-divider should produce
pub fn novel_table() -> String {
    [
        "SECTION\tSPEAKER\tTEXT",
        "Chapter One\t\tChapter One",
        "Chapter One\t\tIt was a cold morning in the village.",
        "Chapter One\tAlice\tIs anyone there?",
        "Chapter One\tAlice\tShe waited by the door.",
        "Chapter One\t\t",
        "Chapter One\tReporting clause\tsaid the innkeeper, without looking up.",
        "Chapter One\tBob\tOnly me.",
        "Chapter One\t\t",
        "Chapter One - The Road\t\tThe Road",
        "Chapter One - The Road\tAlice\tWe should leave",
        "Chapter One - The Road\tAlice\tbefore the rain comes.",
        "Chapter One - The Road\t\t",
        "Chapter One - The Road\t\tThe road was empty.",
        "Chapter Two\t\tChapter Two",
        "Chapter Two\tBob\tDid you hear that?",
    ]
    .iter()
    .map(|row| format!("{}\n", row))
    .collect()
}

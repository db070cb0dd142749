//! End-to-end tests for the text-divider binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixture_path, novel_table, temp_fixture};

/// Command isolated from any real user configuration.
fn text_divider(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_text-divider"));
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        let home = TempDir::new().unwrap();
        text_divider(home.path())
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"))
            .stdout(predicate::str::contains("--speakers"))
            .stdout(predicate::str::contains("--sections"));
    }

    #[test]
    fn shows_version_with_flag() {
        let home = TempDir::new().unwrap();
        text_divider(home.path())
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn fails_without_input() {
        let home = TempDir::new().unwrap();
        text_divider(home.path()).assert().failure();
    }
}

mod table_output {
    use super::*;

    #[test]
    fn writes_table_to_stdout_by_default() {
        let home = TempDir::new().unwrap();
        text_divider(home.path())
            .arg(fixture_path("novel.txt"))
            .assert()
            .success()
            .stdout(predicate::str::diff(novel_table()))
            .stderr("");
    }

    #[test]
    fn dash_output_means_stdout() {
        let home = TempDir::new().unwrap();
        text_divider(home.path())
            .arg(fixture_path("novel.txt"))
            .arg("-")
            .assert()
            .success()
            .stdout(predicate::str::diff(novel_table()));
    }

    #[test]
    fn writes_table_to_output_file() {
        let (temp, input) = temp_fixture("novel.txt");
        let output = temp.path().join("out").join("novel.tsv");

        text_divider(temp.path())
            .arg(&input)
            .arg(&output)
            .assert()
            .success()
            .stdout("");

        assert_eq!(fs::read_to_string(&output).unwrap(), novel_table());
    }

    #[test]
    fn reads_standard_input() {
        let home = TempDir::new().unwrap();
        text_divider(home.path())
            .arg("-")
            .write_stdin("/Alice\"Hi\"\n\nThe end.\n")
            .assert()
            .success()
            .stdout("SPEAKER\tTEXT\nAlice\tHi\n\t\n\tThe end.\n");
    }

    #[test]
    fn layout_flag_overrides_detection() {
        let home = TempDir::new().unwrap();
        text_divider(home.path())
            .arg(fixture_path("novel.txt"))
            .args(["--layout", "chapters"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with(
                "CHAPTER\tSPEAKER\tTEXT\nChapter One\t\tChapter One\n",
            ));
    }

    #[test]
    fn json_format_writes_one_object_per_line() {
        let home = TempDir::new().unwrap();
        let assert = text_divider(home.path())
            .arg(fixture_path("novel.txt"))
            .args(["--format", "json"])
            .assert()
            .success();

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        let rows: Vec<serde_json::Value> = stdout
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(rows.len(), 15);
        assert_eq!(rows[2]["speaker"], "Alice");
        assert_eq!(rows[2]["text"], "Is anyone there?");
        assert_eq!(rows[8]["section"], "Chapter One - The Road");
        assert!(rows[0]["speaker"].is_null());
    }

    #[test]
    fn missing_input_reports_path() {
        let home = TempDir::new().unwrap();
        text_divider(home.path())
            .arg(home.path().join("missing.txt"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("missing.txt"));
    }

    #[test]
    fn verbose_logs_to_stderr_only() {
        let home = TempDir::new().unwrap();
        text_divider(home.path())
            .arg(fixture_path("novel.txt"))
            .arg("--verbose")
            .assert()
            .success()
            .stdout(predicate::str::diff(novel_table()))
            .stderr(predicate::str::contains("Parsed transcript"));
    }
}

mod exports {
    use super::*;

    #[test]
    fn speakers_flag_exports_one_file_per_speaker() {
        let (temp, input) = temp_fixture("novel.txt");
        let dir = temp.path().join("speakers");

        text_divider(temp.path())
            .arg(&input)
            .arg("--speakers")
            .arg(&dir)
            .assert()
            .success()
            .stdout(predicate::str::diff(novel_table()));

        let read = |name: &str| fs::read_to_string(dir.join(name)).unwrap();
        assert_eq!(
            read("alice.txt"),
            "Is anyone there? She waited by the door. We should leave before the rain comes."
        );
        assert_eq!(read("bob.txt"), "Only me. Did you hear that?");
        assert_eq!(
            read("reportingclause.txt"),
            "said the innkeeper, without looking up."
        );
        assert!(dir.join("none.txt").exists());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 4);
    }

    #[test]
    fn top_flag_merges_minor_speakers() {
        let (temp, input) = temp_fixture("novel.txt");
        let dir = temp.path().join("speakers");

        text_divider(temp.path())
            .arg(&input)
            .arg("--speakers")
            .arg(&dir)
            .args(["--top", "2"])
            .assert()
            .success();

        let mut names: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["alice.txt", "minorspeakers.txt", "none.txt"]);
        assert_eq!(
            fs::read_to_string(dir.join("minorspeakers.txt")).unwrap(),
            "Only me. Did you hear that? said the innkeeper, without looking up."
        );
    }

    #[test]
    fn sections_flag_exports_one_file_per_section() {
        let (temp, input) = temp_fixture("novel.txt");
        let dir = temp.path().join("nested").join("sections");

        text_divider(temp.path())
            .arg(&input)
            .arg("--sections")
            .arg(&dir)
            .assert()
            .success();

        assert_eq!(
            fs::read_to_string(dir.join("chapteronetheroad.txt")).unwrap(),
            "The Road We should leave before the rain comes.  The road was empty."
        );
        assert_eq!(
            fs::read_to_string(dir.join("chaptertwo.txt")).unwrap(),
            "Chapter Two Did you hear that?"
        );
        assert!(dir.join("chapterone.txt").exists());
    }

    #[test]
    fn config_file_changes_suffix_and_labels() {
        let (temp, input) = temp_fixture("novel.txt");
        let config = temp.path().join("divider.toml");
        fs::write(
            &config,
            "[export]\nsuffix = \".md\"\nminor_speakers_label = \"Others\"\ntop_speakers = 1\n",
        )
        .unwrap();
        let dir = temp.path().join("speakers");

        text_divider(temp.path())
            .arg(&input)
            .arg("--config")
            .arg(&config)
            .arg("--speakers")
            .arg(&dir)
            .assert()
            .success();

        assert!(dir.join("none.md").exists());
        assert!(dir.join("others.md").exists());
        assert!(!dir.join("alice.md").exists());
    }

    #[test]
    fn default_config_location_is_used() {
        let (temp, input) = temp_fixture("novel.txt");
        let config_dir = temp.path().join(".config").join("text-divider");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(
            config_dir.join("config.toml"),
            "[output]\nlayout = \"speakers\"\n",
        )
        .unwrap();

        text_divider(temp.path())
            .arg(&input)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("SPEAKER\tTEXT\n"));
    }

    #[test]
    fn invalid_config_fails() {
        let (temp, input) = temp_fixture("novel.txt");
        let config = temp.path().join("bad.toml");
        fs::write(&config, "[export]\nsuffix = \"\"\n").unwrap();

        text_divider(temp.path())
            .arg(&input)
            .arg("--config")
            .arg(&config)
            .assert()
            .failure()
            .stderr(predicate::str::contains("suffix"));
    }

    #[cfg(unix)]
    #[test]
    fn export_directory_failure_is_fatal() {
        let (temp, input) = temp_fixture("novel.txt");
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();

        text_divider(temp.path())
            .arg(&input)
            .arg("--sections")
            .arg(blocker.join("sections"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to export section files"));
    }
}

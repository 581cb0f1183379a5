//! End-to-end CLI tests for slackpack.
//!
//! These tests run the real binary inside a temporary working directory, so
//! `./output` lands next to the fixture archive and is cleaned up afterwards.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a working directory holding an export under `export/`.
fn setup_workspace() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    let export = dir.path().join("export");

    fs::create_dir_all(export.join("general")).unwrap();
    fs::create_dir_all(export.join("random")).unwrap();

    let users = r#"[
  {"id": "U1", "profile": {"display_name": "alice", "real_name": "Alice Anderson"}},
  {"id": "U2", "profile": {"display_name": "", "real_name": "Bob Brown"}}
]"#;
    fs::write(export.join("users.json"), users).unwrap();

    let general = r#"[
  {"type": "message", "subtype": "channel_join", "user": "U2", "ts": "1609459100.000100", "text": "<@U2> has joined the channel"},
  {"type": "message", "user": "U1", "ts": "1609459200.000200", "text": "hi <@U2>, see <#C2|random>"},
  {"type": "message", "user": "U2", "ts": "1609459260.000300", "text": "on it", "parent_user_id": "U1"}
]"#;
    fs::write(export.join("general/2021-01-01.json"), general).unwrap();

    let random = r#"[
  {"type": "message", "user": "U2", "ts": "1609462800", "text": "<!subteam^S1|@design> lunch?"}
]"#;
    fs::write(export.join("random/2021-01-01.json"), random).unwrap();

    dir
}

fn slackpack_cmd(workdir: &Path) -> Command {
    let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_slackpack"));
    cmd.current_dir(workdir).env("TZ", "UTC").env_remove("RUST_LOG");
    Command::from_std(cmd)
}

// ============================================================================
// Successful Runs
// ============================================================================

mod conversion {
    use super::*;

    #[test]
    fn test_writes_both_outputs_per_channel() {
        let ws = setup_workspace();

        slackpack_cmd(ws.path())
            .arg("export")
            .assert()
            .success()
            .stdout(predicate::str::contains("Done"));

        let out = ws.path().join("output");
        for name in ["general", "random"] {
            assert!(out.join("debug").join(format!("{name}.json")).exists());
            assert!(out.join("formatted").join(format!("{name}.txt")).exists());
        }
        assert!(!out.join("debug/users.json").exists());
    }

    #[test]
    fn test_transcript_content() {
        let ws = setup_workspace();

        slackpack_cmd(ws.path()).arg("export").assert().success();

        let general = fs::read_to_string(ws.path().join("output/formatted/general.txt")).unwrap();
        assert_eq!(general, "01/1 00:00 alice: hi @Bob Brown, see #random\n\n");

        let random = fs::read_to_string(ws.path().join("output/formatted/random.txt")).unwrap();
        assert_eq!(random, "01/1 01:00 Bob Brown: @design lunch?\n\n");
    }

    #[test]
    fn test_structured_output_is_tab_indented() {
        let ws = setup_workspace();

        slackpack_cmd(ws.path()).arg("export").assert().success();

        let json = fs::read_to_string(ws.path().join("output/debug/general.json")).unwrap();
        assert!(json.starts_with("[\n\t{\n\t\t\"user\": \"alice\""));

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
        assert_eq!(parsed[0]["time"], "2021-01-01T00:00:00Z");
    }

    #[test]
    fn test_absolute_archive_path() {
        let ws = setup_workspace();
        let export = ws.path().join("export");

        slackpack_cmd(ws.path())
            .arg(export.to_str().unwrap())
            .assert()
            .success();

        assert!(ws.path().join("output/debug/general.json").exists());
    }

    #[test]
    fn test_overwrites_previous_run() {
        let ws = setup_workspace();
        let stale = ws.path().join("output/formatted");
        fs::create_dir_all(&stale).unwrap();
        fs::write(stale.join("general.txt"), "stale contents").unwrap();

        slackpack_cmd(ws.path()).arg("export").assert().success();

        let general = fs::read_to_string(stale.join("general.txt")).unwrap();
        assert!(!general.contains("stale"));
    }
}

// ============================================================================
// Usage Errors
// ============================================================================

mod usage {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let ws = tempdir().unwrap();

        slackpack_cmd(ws.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Usage"));

        assert!(!ws.path().join("output").exists());
    }

    #[test]
    fn test_two_arguments() {
        let ws = setup_workspace();

        slackpack_cmd(ws.path())
            .args(["export", "export"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Usage"));

        assert!(!ws.path().join("output").exists());
    }

    #[test]
    fn test_help() {
        let ws = tempdir().unwrap();

        slackpack_cmd(ws.path())
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("users.json"));
    }
}

// ============================================================================
// Fatal Errors
// ============================================================================

mod fatal {
    use super::*;

    #[test]
    fn test_bad_timestamp_leaves_no_output() {
        let ws = setup_workspace();
        fs::write(
            ws.path().join("export/random/2021-01-02.json"),
            r#"[{"type": "message", "user": "U1", "ts": "not-a-number", "text": "x"}]"#,
        )
        .unwrap();

        slackpack_cmd(ws.path())
            .arg("export")
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid timestamp"))
            .stderr(predicate::str::contains("not-a-number"));

        assert!(!ws.path().join("output").exists());
    }

    #[test]
    fn test_missing_archive() {
        let ws = tempdir().unwrap();

        slackpack_cmd(ws.path())
            .arg("nope")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"));
    }

    #[test]
    fn test_malformed_roster() {
        let ws = setup_workspace();
        fs::write(ws.path().join("export/users.json"), "{not json").unwrap();

        slackpack_cmd(ws.path())
            .arg("export")
            .assert()
            .failure()
            .stderr(predicate::str::contains("users.json"));

        assert!(!ws.path().join("output").exists());
    }
}

//! Integration tests for the `roomstatus` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the evaluate, upcoming,
//! and check subcommands through the actual binary, including stdin piping,
//! file input, malformed-record handling, and exit codes. Every invocation
//! pins `--at` and `--timezone` so the output is reproducible.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the events.json fixture (four meetings on 2026-03-16 UTC).
fn events_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/events.json")
}

/// Helper: path to the malformed.json fixture (one good record, three bad).
fn malformed_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/malformed.json")
}

/// Helper: path to the config.json fixture.
fn config_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/config.json")
}

/// Helper: read the events.json fixture as a string.
fn events_json() -> String {
    std::fs::read_to_string(events_path()).expect("events.json fixture must exist")
}

// 2026-03-16, between the standup (ends 09:30) and the design review (10:00).
const FREE_INSTANT: &str = "1773654300";
// 2026-03-16 10:30, during the design review.
const BUSY_INSTANT: &str = "1773657000";
// 2026-03-16 17:00, after the last meeting of the day.
const EVENING_INSTANT: &str = "1773680400";

// ─────────────────────────────────────────────────────────────────────────────
// Evaluate subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn evaluate_stdin_to_stdout() {
    Command::cargo_bin("roomstatus")
        .unwrap()
        .args(["evaluate", "--at", FREE_INSTANT, "--timezone", "UTC"])
        .write_stdin(events_json())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"isFree\":true"))
        .stdout(predicate::str::contains("\"styleClass\":\"free\""))
        .stdout(predicate::str::contains("\"quickBook\":[15,30,60]"));
}

#[test]
fn evaluate_reports_occupied_during_a_meeting() {
    Command::cargo_bin("roomstatus")
        .unwrap()
        .args([
            "evaluate",
            "-i",
            events_path(),
            "--at",
            BUSY_INSTANT,
            "--timezone",
            "UTC",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"isFree\":false"))
        .stdout(predicate::str::contains("\"styleClass\":\"occupied\""))
        .stdout(predicate::str::contains("\"quickBook\":[]"));
}

#[test]
fn evaluate_lists_the_remaining_meetings_in_order() {
    Command::cargo_bin("roomstatus")
        .unwrap()
        .args([
            "evaluate",
            "-i",
            events_path(),
            "--at",
            FREE_INSTANT,
            "--timezone",
            "UTC",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("design-review"))
        .stdout(predicate::str::contains("customer-demo"))
        .stdout(predicate::str::contains("retro"))
        // The standup ended at 09:30 and must be gone.
        .stdout(predicate::str::contains("morning-standup").not());
}

#[test]
fn evaluate_pretty_prints_on_request() {
    Command::cargo_bin("roomstatus")
        .unwrap()
        .args([
            "evaluate",
            "-i",
            events_path(),
            "--at",
            FREE_INSTANT,
            "--timezone",
            "UTC",
            "--pretty",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("{\n"))
        .stdout(predicate::str::contains("\"isFree\": true"));
}

#[test]
fn evaluate_applies_configured_status_text() {
    Command::cargo_bin("roomstatus")
        .unwrap()
        .args([
            "evaluate",
            "-i",
            events_path(),
            "-c",
            config_path(),
            "--at",
            BUSY_INSTANT,
            "--timezone",
            "UTC",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"label\":\"In use\""));
}

#[test]
fn evaluate_drops_malformed_records_with_a_note() {
    Command::cargo_bin("roomstatus")
        .unwrap()
        .args([
            "evaluate",
            "-i",
            malformed_path(),
            "--at",
            FREE_INSTANT,
            "--timezone",
            "UTC",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid-1"))
        .stdout(predicate::str::contains("backwards").not())
        .stderr(predicate::str::contains("dropped 3 malformed event record(s)"));
}

#[test]
fn evaluate_rejects_non_array_input() {
    Command::cargo_bin("roomstatus")
        .unwrap()
        .args(["evaluate", "--at", FREE_INSTANT])
        .write_stdin(r#"{"id": "not-a-list"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a JSON array"));
}

#[test]
fn evaluate_rejects_unknown_timezone() {
    Command::cargo_bin("roomstatus")
        .unwrap()
        .args([
            "evaluate",
            "-i",
            events_path(),
            "--timezone",
            "Mars/Olympus_Mons",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown timezone"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Upcoming subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn upcoming_prints_time_ranges_and_titles() {
    Command::cargo_bin("roomstatus")
        .unwrap()
        .args([
            "upcoming",
            "-i",
            events_path(),
            "--at",
            FREE_INSTANT,
            "--timezone",
            "UTC",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("10:00 - 11:00  Design review"))
        .stdout(predicate::str::contains("12:30 - 13:45  Customer demo"))
        .stdout(predicate::str::contains("15:00 - 16:00  Team retrospective"));
}

#[test]
fn upcoming_after_the_last_meeting_says_so() {
    Command::cargo_bin("roomstatus")
        .unwrap()
        .args([
            "upcoming",
            "-i",
            events_path(),
            "--at",
            EVENING_INSTANT,
            "--timezone",
            "UTC",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No upcoming events today."));
}

// ─────────────────────────────────────────────────────────────────────────────
// Check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_exits_zero_when_free() {
    Command::cargo_bin("roomstatus")
        .unwrap()
        .args([
            "check",
            "-i",
            events_path(),
            "--at",
            FREE_INSTANT,
            "--timezone",
            "UTC",
        ])
        .assert()
        .success()
        .stdout("free\n");
}

#[test]
fn check_exits_two_when_occupied() {
    Command::cargo_bin("roomstatus")
        .unwrap()
        .args([
            "check",
            "-i",
            events_path(),
            "--at",
            BUSY_INSTANT,
            "--timezone",
            "UTC",
        ])
        .assert()
        .code(2)
        .stdout("occupied\n");
}

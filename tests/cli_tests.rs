use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{book_script, rbb, setup_test_config, temp_out};

#[test]
fn test_layout_lists_valid_seats() {
    let cfg = setup_test_config("cli_layout");

    rbb()
        .args(["--config", &cfg, "layout"])
        .assert()
        .success()
        .stdout(contains("Valid seats (40)"))
        .stdout(contains("11, 12, 13"))
        .stdout(contains("58"))
        .stdout(contains("Available: 40 | Booked: 0"));
}

#[test]
fn test_init_writes_config_file() {
    let cfg = setup_test_config("cli_init");

    rbb()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let content = fs::read_to_string(&cfg).expect("config written");
    assert!(content.contains("default_format: csv"));
    assert!(content.contains("show_legend: true"));
}

#[test]
fn test_init_test_mode_writes_nothing() {
    let cfg = setup_test_config("cli_init_test");

    rbb()
        .args(["--config", &cfg, "--test", "init"])
        .assert()
        .success();

    assert!(!std::path::Path::new(&cfg).exists());
}

#[test]
fn test_config_print_and_check() {
    let cfg = setup_test_config("cli_config");
    fs::write(&cfg, "default_format: json\n").unwrap();

    rbb()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_format: json"))
        .stdout(contains("export_dir"));

    rbb()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields"))
        .stdout(contains("separator_char"));

    rbb()
        .args(["--config", &cfg, "config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Added fields"));

    rbb()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration is complete"));
}

#[test]
fn test_session_books_a_seat() {
    let cfg = setup_test_config("cli_session_book");
    let script = format!("{}list\nquit\n", book_script(11, "Alice"));

    rbb()
        .args(["--config", &cfg, "session"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Selected Seat: 11 (Column 1, Row 1)"))
        .stdout(contains("Booking Confirmed!"))
        .stdout(contains("All Bookings (this session)"))
        .stdout(contains("Alice@mail.test"))
        .stdout(contains("Session ended with 1 booking(s)"));
}

#[test]
fn test_session_rejects_double_booking_and_bad_seats() {
    let cfg = setup_test_config("cli_session_reject");
    let script = format!(
        "{}select 11\nselect 99\nbook\nstatus\n",
        book_script(11, "Alice")
    );

    rbb()
        .args(["--config", &cfg, "session"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Seat 11 is already occupied!"))
        .stdout(contains("Seat 99 does not exist!"))
        .stdout(contains("Please select a seat first."))
        .stdout(contains("Available: 39 | Booked: 1 | Bookings: 1"));
}

#[test]
fn test_session_incomplete_form() {
    let cfg = setup_test_config("cli_session_incomplete");

    rbb()
        .args(["--config", &cfg, "session"])
        .write_stdin("select 21\nbook --name Bob --phone 1 --from P --to Q\n\nstatus\n")
        .assert()
        .success()
        .stdout(contains("missing: email"))
        .stdout(contains("Selected Seat: 21 (Column 2, Row 1)"))
        .stdout(contains("Session ended with 0 booking(s)"));
}

#[test]
fn test_session_unknown_command_keeps_running() {
    let cfg = setup_test_config("cli_session_unknown");

    rbb()
        .args(["--config", &cfg, "session"])
        .write_stdin("fly away\nhelp\ncheck 55\nlog\n")
        .assert()
        .success()
        .stdout(contains("select"))
        .stdout(contains("Seat available"))
        .stdout(contains("Internal log"));
}

#[test]
fn test_session_export_command_csv() {
    let cfg = setup_test_config("cli_session_export");
    let out = temp_out("cli_session_export", "csv");
    let script = format!(
        "{}{}export --file {} --format csv\nquit\n",
        book_script(11, "Alice"),
        book_script(58, "Bruno"),
        out
    );

    rbb()
        .args(["--config", &cfg, "session"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "Name,phone_number,email_id,location,destination,seat_number,Column,Row"
    );
    assert_eq!(lines[1], "Alice,555-0101,Alice@mail.test,Torino,Genova,11,1,1");
    assert_eq!(lines[2], "Bruno,555-0101,Bruno@mail.test,Torino,Genova,58,5,8");
}

#[test]
fn test_session_export_on_exit_json() {
    let cfg = setup_test_config("cli_session_exit_export");
    let out = temp_out("cli_session_exit_export", "json");

    rbb()
        .args([
            "--config", &cfg, "session", "--export", &out, "--format", "json",
        ])
        .write_stdin(book_script(34, "Carla"))
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"seat_number\": 34"));
    assert!(content.contains("\"Column\": 3"));
}

#[test]
fn test_session_export_on_exit_keeps_existing_file() {
    let cfg = setup_test_config("cli_session_exit_existing");
    let out = temp_out("cli_session_exit_existing", "csv");
    let fallback = out.replace(".csv", "-1.csv");
    fs::write(&out, "old").unwrap();
    fs::remove_file(&fallback).ok();

    // stdin is exhausted by the session, nobody can answer the overwrite prompt
    rbb()
        .args(["--config", &cfg, "session", "--export", &out])
        .write_stdin(book_script(11, "Dario"))
        .assert()
        .success()
        .stdout(contains("use --force").and(contains("CSV export completed")));

    assert_eq!(fs::read_to_string(&out).unwrap(), "old");
    let content = fs::read_to_string(&fallback).expect("read fallback csv");
    assert!(content.starts_with("Name,phone_number,email_id"));
    assert!(content.contains("Dario,555-0101"));
}

#[test]
fn test_session_export_declined_overwrite_is_reported() {
    let cfg = setup_test_config("cli_session_declined");
    let out = temp_out("cli_session_declined", "csv");
    fs::write(&out, "old").unwrap();

    rbb()
        .args(["--config", &cfg, "session"])
        .write_stdin(format!(
            "{}export --file {}
n
quit
",
            book_script(12, "Elena"),
            out
        ))
        .assert()
        .success()
        .stdout(contains("Export error: Export cancelled").and(contains("I/O error").not()));

    assert_eq!(fs::read_to_string(&out).unwrap(), "old");
}

#[test]
fn test_session_export_nothing_booked() {
    let cfg = setup_test_config("cli_session_export_empty");
    let out = temp_out("cli_session_export_empty", "csv");

    rbb()
        .args(["--config", &cfg, "session", "--export", &out])
        .write_stdin("seats\nquit\n")
        .assert()
        .success()
        .stdout(contains("No bookings to export.").and(contains("export completed").not()));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_bad_config_fails() {
    let cfg = setup_test_config("cli_bad_config");
    fs::write(&cfg, "show_legend: [oops\n").unwrap();

    rbb()
        .args(["--config", &cfg, "layout"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

mod common;
use common::{details, details_for};
use rbusbooker::cli::session::{SessionCommand, parse_line, split_words};
use rbusbooker::core::log::LogLogic;
use rbusbooker::core::session::{
    SessionState, check_seat, clear_selection, select_seat, submit_booking,
};
use rbusbooker::core::view::{CellStatus, seat_grid};
use rbusbooker::errors::BookingError;
use rbusbooker::export::ExportFormat;
use rbusbooker::models::passenger::PassengerDetails;
use rbusbooker::models::seat::SeatNumber;
use rbusbooker::ui::grid::render_grid;

fn seat(id: i64) -> SeatNumber {
    SeatNumber::from_id(id).expect("valid seat")
}

#[test]
fn test_select_valid_seat() {
    let mut state = SessionState::new();
    let out = select_seat(&mut state, 23);
    assert!(out.ok);
    assert_eq!(out.message, "Selected Seat: 23 (Column 2, Row 3)");
    assert_eq!(state.selected_seat(), Some(seat(23)));
}

#[test]
fn test_select_invalid_seat_keeps_previous_selection() {
    let mut state = SessionState::new();
    select_seat(&mut state, 23);

    let out = select_seat(&mut state, 99);
    assert!(!out.ok);
    assert_eq!(out.error, Some(BookingError::SeatDoesNotExist(99)));
    assert_eq!(out.message, "Seat 99 does not exist!");
    assert_eq!(state.selected_seat(), Some(seat(23)));
}

#[test]
fn test_select_booked_seat_is_rejected() {
    let mut state = SessionState::new();
    select_seat(&mut state, 11);
    assert!(submit_booking(&mut state, &details()).ok);

    let out = select_seat(&mut state, 11);
    assert!(!out.ok);
    assert_eq!(out.error, Some(BookingError::SeatAlreadyOccupied(seat(11))));
    assert_eq!(state.selected_seat(), None);
}

#[test]
fn test_submit_without_selection() {
    let mut state = SessionState::new();
    let out = submit_booking(&mut state, &details());
    assert!(!out.ok);
    assert_eq!(out.error, Some(BookingError::NoSeatSelected));
    assert!(state.bookings().is_empty());
    assert_eq!(state.service().inventory().booked_count(), 0);
}

#[test]
fn test_submit_books_and_clears_selection() {
    let mut state = SessionState::new();
    select_seat(&mut state, 11);

    let out = submit_booking(&mut state, &details());
    assert!(out.ok);
    let record = out.record.expect("record");
    assert_eq!((record.seat_number, record.column, record.row), (11, 1, 1));

    assert_eq!(state.selected_seat(), None);
    assert_eq!(state.bookings().len(), 1);
    assert!(state.service().inventory().is_occupied(seat(11)));
}

#[test]
fn test_submit_incomplete_form_keeps_selection() {
    let mut state = SessionState::new();
    select_seat(&mut state, 45);

    let incomplete = PassengerDetails {
        email: String::new(),
        ..details()
    };
    let out = submit_booking(&mut state, &incomplete);
    assert!(!out.ok);
    assert_eq!(
        out.error,
        Some(BookingError::IncompletePassengerDetails {
            missing: vec!["email"]
        })
    );
    assert_eq!(state.selected_seat(), Some(seat(45)));
    assert!(state.bookings().is_empty());

    // user fixes the form and resubmits
    assert!(submit_booking(&mut state, &details()).ok);
}

#[test]
fn test_clear_selection_has_no_core_effect() {
    let mut state = SessionState::new();
    select_seat(&mut state, 37);
    assert!(clear_selection(&mut state).ok);
    assert_eq!(state.selected_seat(), None);
    assert_eq!(state.service().inventory().available_count(), 40);

    let again = clear_selection(&mut state);
    assert!(again.ok);
    assert_eq!(again.message, "No seat selected.");
}

#[test]
fn test_check_seat_does_not_select() {
    let mut state = SessionState::new();
    let out = check_seat(&mut state, 52);
    assert!(out.ok);
    assert_eq!(out.message, "Seat available");
    assert_eq!(state.selected_seat(), None);

    assert!(!check_seat(&mut state, 59).ok);
}

#[test]
fn test_seat_grid_view() {
    let mut state = SessionState::new();
    select_seat(&mut state, 11);
    submit_booking(&mut state, &details());
    select_seat(&mut state, 48);

    let grid = seat_grid(&state);
    assert_eq!(grid.rows.len(), 8);
    assert!(grid.rows.iter().all(|r| r.len() == 5));
    assert_eq!(grid.available, 39);
    assert_eq!(grid.booked, 1);

    assert_eq!(grid.cell(seat(11)).map(|c| c.status), Some(CellStatus::Booked));
    assert_eq!(grid.cell(seat(48)).map(|c| c.status), Some(CellStatus::Selected));
    assert_eq!(grid.cell(seat(25)).map(|c| c.status), Some(CellStatus::Available));

    // first row holds row 1 of every column
    let first: Vec<u8> = grid.rows[0].iter().map(|c| c.seat.value()).collect();
    assert_eq!(first, vec![11, 21, 31, 41, 51]);

    let text = render_grid(&grid, true);
    assert!(text.contains("Available: 39 | Booked: 1"));
    assert!(text.contains("Selected"));
    assert!(text.contains("58"));
}

#[test]
fn test_activity_log_records_each_action() {
    let mut state = SessionState::new();
    clear_selection(&mut state);
    select_seat(&mut state, 99);
    select_seat(&mut state, 12);
    submit_booking(&mut state, &details_for("Ada"));
    check_seat(&mut state, 12);

    let ops: Vec<&str> = state
        .activity()
        .entries()
        .iter()
        .map(|e| e.operation.as_str())
        .collect();
    assert_eq!(ops, vec!["clear", "reject", "select", "book", "check"]);

    let lines = LogLogic::format_log(state.activity());
    assert_eq!(lines.len(), 5);
    assert!(lines[0].contains("No seat selected."));
    assert!(lines[3].contains("Ada (Milano -> Roma)"));
    assert!(lines[1].contains("Seat 99 does not exist!"));
}

#[test]
fn test_outcome_serializes_for_presentation() {
    let mut state = SessionState::new();
    select_seat(&mut state, 11);
    let out = submit_booking(&mut state, &details());

    let json = serde_json::to_value(&out).expect("json");
    assert_eq!(json["ok"], true);
    assert_eq!(json["record"]["seat_number"], 11);
    assert_eq!(json["record"]["Column"], 1);
    assert_eq!(json["record"]["Row"], 1);
    assert_eq!(json["record"]["email_id"], "a@x.com");

    let fail = serde_json::to_value(select_seat(&mut state, 11)).expect("json");
    assert_eq!(fail["ok"], false);
    assert!(fail.get("record").is_none());
}

#[test]
fn test_split_words_handles_quotes() {
    assert_eq!(
        split_words(r#"book --name "Mario Rossi" --to Roma"#),
        vec!["book", "--name", "Mario Rossi", "--to", "Roma"]
    );
    assert!(split_words("   ").is_empty());
}

#[test]
fn test_parse_session_lines() {
    assert_eq!(parse_line("").unwrap(), None);
    assert_eq!(
        parse_line("select 11").unwrap(),
        Some(SessionCommand::Select { seat: 11 })
    );
    assert_eq!(
        parse_line("check -5").unwrap(),
        Some(SessionCommand::Check { seat: -5 })
    );
    assert_eq!(parse_line("grid").unwrap(), Some(SessionCommand::Seats));
    assert_eq!(parse_line("exit").unwrap(), Some(SessionCommand::Quit));
    assert_eq!(
        parse_line("export --format json --file out.json -f").unwrap(),
        Some(SessionCommand::Export {
            format: Some(ExportFormat::Json),
            file: Some("out.json".into()),
            force: true,
        })
    );
    assert!(parse_line("select abc").is_err());
    assert!(parse_line("fly 11").is_err());
}

//! Interactive booking session.
//!
//! Each input line is parsed with clap (multicall: the first word is the
//! command) and dispatched to one of the session handlers in
//! `core::session`. The passenger form is a sequence of prompts.

use crate::config::Config;
use crate::core::log::LogLogic;
use crate::core::session::{
    SessionState, check_seat, clear_selection, select_seat, submit_booking,
};
use crate::core::view::seat_grid;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic, booking_to_row, get_headers};
use crate::models::passenger::PassengerDetails;
use crate::ui::grid::render_grid;
use crate::ui::messages::{self, error, header, info, success, warning};
use crate::ui::prompt::ask;
use crate::utils::table::Table;
use clap::{CommandFactory, Parser, Subcommand};
use std::io::BufRead;

const PROMPT: &str = "rbusbooker> ";

#[derive(Parser, Debug)]
#[command(multicall = true, disable_help_subcommand = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Show the seat layout
    #[command(alias = "grid")]
    Seats,

    /// Select the seat to book
    Select {
        #[arg(allow_negative_numbers = true)]
        seat: i64,
    },

    /// Drop the current selection
    Clear,

    /// Check whether a seat is available
    Check {
        #[arg(allow_negative_numbers = true)]
        seat: i64,
    },

    /// Fill the passenger form and confirm the selected seat
    Book {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Location (From)
        #[arg(long = "from")]
        location: Option<String>,
        /// Destination (To)
        #[arg(long = "to")]
        destination: Option<String>,
    },

    /// List all bookings of this session
    List,

    /// Export the bookings (csv, json, xlsx)
    Export {
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,
        /// Output file, relative paths go under `export_dir`
        #[arg(long)]
        file: Option<String>,
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the session activity log
    Log,

    /// Show selection and seat counts
    Status,

    /// Show the available commands
    Help,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

enum Flow {
    Continue,
    Quit,
}

/// Split a line into words; double quotes group words with spaces.
pub fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut pending = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                pending = true;
            }
            c if c.is_whitespace() && !quoted => {
                if pending {
                    words.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }
    if pending {
        words.push(current);
    }

    words
}

/// Parse one input line. `Ok(None)` for a blank line.
pub fn parse_line(line: &str) -> Result<Option<SessionCommand>, clap::Error> {
    let words = split_words(line);
    if words.is_empty() {
        return Ok(None);
    }
    SessionLine::try_parse_from(words).map(|l| Some(l.command))
}

fn print_help() {
    header("Commands");
    for sub in SessionLine::command().get_subcommands() {
        let about = sub.get_about().map(|a| a.to_string()).unwrap_or_default();
        println!("  {:<8} {}", sub.get_name(), about);
    }
}

fn print_bookings(state: &SessionState, cfg: &Config) {
    if state.bookings().is_empty() {
        info("No bookings yet.");
        return;
    }

    header("All Bookings (this session)");
    let mut table = Table::new(&get_headers(), cfg.separator());
    for b in state.bookings() {
        table.add_row(booking_to_row(b));
    }
    print!("{}", table.render());
}

fn print_status(state: &SessionState) {
    let inventory = state.service().inventory();
    match state.selected_seat() {
        Some(seat) => info(format!(
            "Selected Seat: {} (Column {}, Row {})",
            seat,
            seat.column(),
            seat.row()
        )),
        None => info("Selected Seat: None"),
    }
    info(format!(
        "Available: {} | Booked: {} | Bookings: {}",
        inventory.available_count(),
        inventory.booked_count(),
        state.bookings().len()
    ));
}

/// Prompt for the passenger fields not given on the command line.
/// End of input leaves the remaining fields empty.
fn collect_details(
    input: &mut dyn BufRead,
    given: [Option<String>; 5],
) -> AppResult<PassengerDetails> {
    const LABELS: [&str; 5] = [
        "Name: ",
        "Phone Number: ",
        "Email: ",
        "Location (From): ",
        "Destination (To): ",
    ];

    let mut values: [String; 5] = Default::default();
    let mut eof = false;

    for ((slot, label), value) in values.iter_mut().zip(LABELS).zip(given) {
        *slot = match value {
            Some(v) => v,
            None if eof => String::new(),
            None => match ask(input, label)? {
                Some(line) => line,
                None => {
                    eof = true;
                    String::new()
                }
            },
        };
    }

    let [name, phone, email, location, destination] = values;
    Ok(PassengerDetails::new(name, phone, email, location, destination))
}

/// Export the session's bookings and record it in the activity log.
pub fn export_bookings(
    state: &mut SessionState,
    cfg: &Config,
    format: Option<ExportFormat>,
    file: Option<&str>,
    force: bool,
    input: &mut dyn BufRead,
) -> AppResult<()> {
    let format = match format {
        Some(f) => f,
        None => cfg.export_format()?,
    };
    let path = ExportLogic::target_path(&cfg.export_dir(), file, &format);

    if let Some(written) = ExportLogic::export(state.bookings(), &format, &path, force, input)? {
        let message = format!(
            "{} booking(s) exported as {}",
            state.bookings().len(),
            format.as_str()
        );
        state.note("export", &written.display().to_string(), &message);
    }

    Ok(())
}

fn execute(
    state: &mut SessionState,
    cfg: &Config,
    command: SessionCommand,
    input: &mut dyn BufRead,
) -> AppResult<Flow> {
    match command {
        SessionCommand::Seats => print!("{}", render_grid(&seat_grid(state), cfg.show_legend)),
        SessionCommand::Select { seat } => messages::outcome(&select_seat(state, seat)),
        SessionCommand::Clear => messages::outcome(&clear_selection(state)),
        SessionCommand::Check { seat } => messages::outcome(&check_seat(state, seat)),
        SessionCommand::Book {
            name,
            phone,
            email,
            location,
            destination,
        } => {
            // no form without a seat
            if state.selected_seat().is_none() {
                messages::outcome(&submit_booking(state, &PassengerDetails::default()));
                return Ok(Flow::Continue);
            }

            let details = collect_details(input, [name, phone, email, location, destination])?;
            let outcome = submit_booking(state, &details);
            match &outcome.record {
                Some(record) => messages::booking_confirmed(record),
                None => messages::outcome(&outcome),
            }
        }
        SessionCommand::List => print_bookings(state, cfg),
        SessionCommand::Export {
            format,
            file,
            force,
        } => export_bookings(state, cfg, format, file.as_deref(), force, input)?,
        SessionCommand::Log => LogLogic::print_log(state.activity()),
        SessionCommand::Status => print_status(state),
        SessionCommand::Help => print_help(),
        SessionCommand::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

/// Run the read-eval loop until `quit` or end of input.
pub fn run(input: &mut dyn BufRead, cfg: &Config) -> AppResult<SessionState> {
    let mut state = SessionState::new();
    state.note("start", "", "Session started");

    header("🚌 Seat Booking System");
    print!("{}", render_grid(&seat_grid(&state), cfg.show_legend));
    info("Type 'help' for the list of commands.");

    loop {
        let Some(line) = ask(input, PROMPT)? else {
            break;
        };

        let command = match parse_line(&line) {
            Ok(Some(c)) => c,
            Ok(None) => continue,
            Err(e) => {
                match e.kind() {
                    clap::error::ErrorKind::DisplayHelp => print!("{e}"),
                    _ => error(e.to_string().trim_end()),
                }
                continue;
            }
        };

        match execute(&mut state, cfg, command, input) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            // a failed command never ends the session
            Err(e) => error(e),
        }
    }

    let summary = format!("Session ended with {} booking(s)", state.bookings().len());
    state.note("end", "", &summary);
    if state.bookings().is_empty() {
        warning(&summary);
    } else {
        success(&summary);
    }

    Ok(state)
}

use crate::config::Config;
use crate::core::session::SessionState;
use crate::core::view::seat_grid;
use crate::errors::AppResult;
use crate::models::seat::SeatNumber;
use crate::ui::grid::render_grid;

/// Handle the `layout` command: empty coach plus the valid seat numbers.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let state = SessionState::new();
    print!("{}", render_grid(&seat_grid(&state), cfg.show_legend));

    let seats: Vec<String> = SeatNumber::all().map(|s| s.to_string()).collect();
    println!("Valid seats ({}): {}", seats.len(), seats.join(", "));
    Ok(())
}

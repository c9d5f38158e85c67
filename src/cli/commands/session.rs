use crate::cli::parser::Commands;
use crate::cli::session::{export_bookings, run};
use crate::config::Config;
use crate::errors::AppResult;
use std::io;

/// Handle the `session` command: run the interactive session on stdin,
/// then export the bookings when `--export` was given.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session {
        export,
        format,
        force,
    } = cmd
    {
        let stdin = io::stdin();
        let mut input = stdin.lock();

        let mut state = run(&mut input, cfg)?;

        if let Some(file) = export {
            export_bookings(
                &mut state,
                cfg,
                format.clone(),
                Some(file.as_str()),
                *force,
                &mut input,
            )?;
        }
    }

    Ok(())
}

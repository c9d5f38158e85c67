use std::io::{self, BufRead, Write};

/// Print `label` and read one line from `input`.
///
/// Returns `Ok(None)` at end of input; the trailing newline is removed.
pub fn ask(input: &mut dyn BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush().ok();

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// `[y/N]` confirmation; anything but y/yes (or end of input) is a no.
pub fn confirm(input: &mut dyn BufRead, label: &str) -> io::Result<bool> {
    let answer = ask(input, &format!("{label} [y/N]: "))?.unwrap_or_default();
    let ans = answer.trim().to_ascii_lowercase();
    Ok(ans == "y" || ans == "yes")
}

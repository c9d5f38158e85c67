use ansi_term::Colour;
use chrono::{DateTime, Local};
use regex::Regex;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern")
});

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// One line of the session's internal log.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: usize,
    pub date: DateTime<Local>,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// In-memory, append-only record of what happened during a session.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry stamped with the local time.
    pub fn record(&mut self, operation: &str, target: &str, message: &str) {
        let id = self.entries.len() + 1;
        self.entries.push(LogEntry {
            id,
            date: Local::now(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// ANSI colour for each logged operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "book" => Colour::Green,
        "reject" => Colour::Red,
        "select" => Colour::Blue,
        "clear" => Colour::Yellow,
        "check" => Colour::Cyan,
        "export" => Colour::Purple,
        "start" | "end" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the activity log, one entry per line.
    pub fn format_log(log: &ActivityLog) -> Vec<String> {
        let entries: Vec<(usize, String, &str, String, &str)> = log
            .entries()
            .iter()
            .map(|e| {
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                (
                    e.id,
                    e.date.format("%FT%T%:z").to_string(),
                    e.operation.as_str(),
                    op_target,
                    e.message.as_str(),
                )
            })
            .collect();

        let op_w = entries
            .iter()
            .map(|(_, _, _, op_target, _)| op_target.len())
            .max()
            .unwrap_or(10)
            .min(60);
        let id_w = entries
            .iter()
            .map(|(id, _, _, _, _)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, _, _, _)| date.len())
            .max()
            .unwrap_or(0);

        entries
            .into_iter()
            .map(|(id, date, operation, op_target, message)| {
                let color = color_for_operation(operation);

                let visible = if op_target.chars().count() > 60 {
                    let mut s = op_target.chars().take(57).collect::<String>();
                    s.push_str("...");
                    s
                } else {
                    op_target
                };

                // only the operation word is coloured
                let colored = match visible.split_once(' ') {
                    Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                    None => color.paint(visible.as_str()).to_string(),
                };

                let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).len()));

                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    id,
                    date,
                    colored,
                    padding,
                    message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }

    pub fn print_log(log: &ActivityLog) {
        if log.is_empty() {
            println!("📜 Internal log is empty.");
            return;
        }

        println!("📜 Internal log:\n");
        for line in Self::format_log(log) {
            println!("{line}");
        }
    }
}

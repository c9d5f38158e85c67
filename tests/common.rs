#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rbusbooker::models::passenger::PassengerDetails;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rbb() -> Command {
    cargo_bin_cmd!("rbusbooker")
}

/// Create a unique config path inside the system temp dir and remove any existing file
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rbusbooker.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rbusbooker_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn details() -> PassengerDetails {
    PassengerDetails::new("A", "1", "a@x.com", "P", "Q")
}

pub fn details_for(name: &str) -> PassengerDetails {
    PassengerDetails::new(
        name,
        "3331234567",
        format!("{}@example.com", name.to_lowercase()),
        "Milano",
        "Roma",
    )
}

/// Stdin script: select a seat and fill the form for it.
pub fn book_script(seat: u8, name: &str) -> String {
    format!("select {seat}\nbook\n{name}\n555-0101\n{name}@mail.test\nTorino\nGenova\n")
}

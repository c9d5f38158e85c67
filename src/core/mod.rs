pub mod booking;
pub mod config;
pub mod inventory;
pub mod log;
pub mod session;
pub mod view;

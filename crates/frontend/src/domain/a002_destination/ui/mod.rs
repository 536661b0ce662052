pub mod booking;
pub mod details;
pub mod list;

pub mod application;
pub mod details;
pub mod list;

pub mod catalog;
pub mod config;
pub mod contact;
pub mod form;
pub mod load_state;
pub mod testimonial;

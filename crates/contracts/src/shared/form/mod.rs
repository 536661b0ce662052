//! Booking / contact form state machine
//!
//! Idle -> Submitting -> Success | Error -> Idle (on the next edit)

pub mod controller;
pub mod schema;

pub use controller::{FormController, SubmitBlocked, SubmitOutcome, SubmitStatus};
pub use schema::{FieldRule, FieldSpec, FormSchema, APPLICATION_FORM, BOOKING_FORM, CONTACT_FORM};

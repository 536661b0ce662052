pub mod u501_contact;
pub mod u502_testimonials;

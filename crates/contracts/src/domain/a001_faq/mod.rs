pub mod aggregate;
pub mod seed;

pub use aggregate::{Faq, FaqId};
pub use seed::seed;

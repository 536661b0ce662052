pub mod aggregate;
pub mod seed;

pub use aggregate::{Destination, DestinationId};
pub use seed::seed;

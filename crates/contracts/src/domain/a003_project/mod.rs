pub mod aggregate;
pub mod seed;

pub use aggregate::{Project, ProjectId};
pub use seed::seed;

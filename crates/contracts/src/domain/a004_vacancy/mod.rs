pub mod aggregate;
pub mod seed;

pub use aggregate::{Vacancy, VacancyId, VacancyRef};
pub use seed::seed;

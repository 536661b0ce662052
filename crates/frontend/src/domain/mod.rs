pub mod a001_faq;
pub mod a002_destination;
pub mod a003_project;
pub mod a004_vacancy;

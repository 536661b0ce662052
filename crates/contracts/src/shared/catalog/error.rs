use thiserror::Error;

/// Outcomes of catalog interactions that the page reports to the visitor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A vote for this record was already cast during the page view
    #[error("ya has votado esta pregunta")]
    AlreadyVoted,

    #[error("registro desconocido: {0}")]
    UnknownRecord(String),
}

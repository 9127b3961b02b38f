use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("required field `{0}` missing from catalog record")]
    MissingField(&'static str),

    #[error("expected exactly {expected} movies to compare, got {got}")]
    Arity { expected: usize, got: usize },

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("no movie titled `{0}` in the store")]
    NotFound(String),

    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

pub type AppResult<T> = Result<T, AppError>;

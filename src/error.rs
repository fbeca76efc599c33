use thiserror::Error;
use warp::http::StatusCode;
use warp::reject::Reject;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Request body could not be decoded into the expected row type.
    #[error("Invalid request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    /// Admin path named a table we don't manage.
    #[error("Invalid table name: {0}")]
    UnknownTable(String),
    #[error("Missing {0}")]
    MissingParameter(&'static str),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::MalformedBody(_) | Error::UnknownTable(_) | Error::MissingParameter(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Reject for Error {}

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The remote service answered with a status other than the one the
    /// operation expects.
    #[error("HTTP {status} for url: {url}")]
    Http { status: StatusCode, url: String },

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Post not found")]
    PostNotFound(i64),
}

pub type Result<T> = std::result::Result<T, Error>;

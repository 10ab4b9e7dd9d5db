use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("request to '{url}' returned status {status}")]
    RequestNotOk { url: String, status: StatusCode },
    #[error("giving up on page after {attempts} attempts: {source}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: Box<Error>,
    },
    #[error("missing configuration: environment variable '{0}' is not set")]
    MissingConfig(&'static str),
}

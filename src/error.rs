use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("communication with GitHub failed: {0}")]
    Communication(#[from] reqwest::Error),

    #[error("GitHub responded with broken JSON: {0}")]
    MalformedResponse(String),

    #[error("gone ({status}): {message}")]
    Gone { status: u16, message: String },

    #[error("error from GitHub ({status}): {message}")]
    Remote { status: u16, message: String },

    #[error("postcondition failed: {0}")]
    Postcondition(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

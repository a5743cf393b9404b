use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("malformed line {0:?}: expected exactly one '=' separator")]
    MalformedLine(String),

    #[error("invalid hexadecimal value {0:?}")]
    InvalidHex(String),

    #[error("value {0:?} does not fit in 32 bits")]
    OutOfRange(String),
}

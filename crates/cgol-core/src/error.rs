//! Error types for the simulation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed coordinate pair `{0}`: expected `x,y`")]
    MalformedPair(String),

    #[error("invalid integer `{0}` in coordinate list")]
    InvalidInteger(String),
}

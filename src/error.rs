//! Errors raised at the command-line boundary. The prime tests themselves never fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("not an integer: `{input}`")]
    NonNumeric { input: String },

    #[error("fractional values are not accepted: `{input}`")]
    Fractional { input: String },

    #[error("integer out of range (must fit in 64 bits): `{input}`")]
    OutOfRange { input: String },

    #[error("failed to write output")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent warpper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent warpper for [`zip::result::ZipError`]
    #[error(transparent)]
    ZipError(#[from] zip::result::ZipError),

    /// stream is not a valid project archive
    #[error("stream is not a valid project archive")]
    #[diagnostic(help("project archives are zip files, usually with a .dmz extension"))]
    InvalidArchive(#[source] zip::result::ZipError),

    /// unable to find requested file
    #[error("unable to find requested file")]
    FileNotFound(#[from] FileNotFoundError),

    /// checksum file has an unreadable line
    #[error("checksum file line {line} is invalid: {content:?}")]
    InvalidChecksumLine { line: usize, content: String },
}

/// Error type to provide further information when a file has not been found
#[derive(Error, Diagnostic, Debug)]
#[error("unable to find requested file")]
pub enum FileNotFoundError {
    /// by name {0}
    #[error("by name {0}")]
    Name(String),
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;

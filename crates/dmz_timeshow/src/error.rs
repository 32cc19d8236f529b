//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;
use uuid::Uuid;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent warpper for [`dmz_archive::error::Error`]
    #[error(transparent)]
    #[diagnostic(transparent)]
    Archive(#[from] dmz_archive::error::Error),

    /// a file that has to be parsed is not a valid tree
    #[error("unable to parse {path}")]
    Format {
        path: String,
        #[source]
        #[diagnostic_source]
        source: dmz_tree::error::Error,
    },

    /// unable to find a required file, section or node
    #[error("unable to find {0}")]
    NotFound(#[from] NotFoundError),

    /// the destination already contains the timeshow
    #[error("a timeshow with id {0} already exists")]
    #[diagnostic(help("timeshows can only be added once, remove the existing one first"))]
    Conflict(Uuid),

    /// {0}
    #[error("{0}")]
    Validation(String),
}

/// Error type to provide further information when something required is missing
#[derive(Error, Diagnostic, Debug)]
pub enum NotFoundError {
    /// file {0}
    #[error("file {0}")]
    File(String),

    /// the per show file of a timeshow
    #[error("the file of timeshow {0}")]
    TimeshowFile(Uuid),

    /// section {section} in {file}
    #[error("section {section} in {file}")]
    Section { file: String, section: String },

    /// node {node} in {file}
    #[error("node {node} in {file}")]
    Node { file: String, node: String },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;

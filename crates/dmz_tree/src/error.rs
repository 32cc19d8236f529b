//! Error types that can be emitted from this library
//!

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent warpper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent warpper for [`std::str::Utf8Error`]
    #[error(transparent)]
    Utf8Error(#[from] std::str::Utf8Error),

    /// Transparent warpper for [`quick_xml::Error`]
    #[error(transparent)]
    XmlError(#[from] quick_xml::Error),

    /// Transparent warpper for [`quick_xml::events::attributes::AttrError`]
    #[error(transparent)]
    AttributeError(#[from] quick_xml::events::attributes::AttrError),

    /// Transparent warpper for [`quick_xml::escape::EscapeError`]
    #[error(transparent)]
    EscapeError(#[from] quick_xml::escape::EscapeError),

    /// Document does not contain a root element
    #[error("document has no root element")]
    MissingRoot,

    /// An element was left open at the end of the document, or closed without being opened
    #[error("unbalanced element <{0}>")]
    Unbalanced(String),
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;

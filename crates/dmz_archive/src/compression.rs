//! Compression handling for archive entries.

/// Identifies the storage format used for entries when writing a container
///
/// When writing containers, you may choose the method via [`crate::write::ContainerWriterOptions`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum CompressionMethod {
    /// Stores the data as it is
    Stored,

    /// Compress the data using Deflate
    #[default]
    Deflated,
}

impl CompressionMethod {
    /// Whether the method accepts a compression level
    pub fn has_level(&self) -> bool {
        matches!(self, CompressionMethod::Deflated)
    }
}

impl From<CompressionMethod> for zip::CompressionMethod {
    fn from(value: CompressionMethod) -> Self {
        match value {
            CompressionMethod::Stored => zip::CompressionMethod::Stored,
            CompressionMethod::Deflated => zip::CompressionMethod::Deflated,
        }
    }
}

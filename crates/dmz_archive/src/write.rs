//! Types for writing project archives
//!

use std::io::{Cursor, Seek, Write};

use bon::Builder;
use tracing::{debug, instrument};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::compression::CompressionMethod;
use crate::error::Result;
use crate::types::{Container, ContainerFile, CHECKSUM_FILE};

/// Highest level supported by the deflate backend
pub const MAX_COMPRESSION_LEVEL: i64 = 9;

/// Options for how the archive should be written
#[derive(Debug, Clone, Copy, Builder)]
pub struct ContainerWriterOptions {
    /// The compression method to use for every entry
    #[builder(default)]
    pub compression: CompressionMethod,

    /// The compression level, only used by methods that support one
    #[builder(default = MAX_COMPRESSION_LEVEL)]
    pub compression_level: i64,
}

impl Default for ContainerWriterOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ContainerWriterOptions {
    fn file_options(&self) -> SimpleFileOptions {
        let options = SimpleFileOptions::default().compression_method(self.compression.into());
        if self.compression.has_level() {
            options.compression_level(Some(self.compression_level))
        } else {
            options
        }
    }
}

/// Project archive generator
///
/// ```
/// # fn doit() -> dmz_archive::error::Result<()>
/// # {
/// use dmz_archive::write::{ContainerWriter, ContainerWriterOptions};
/// use dmz_archive::{CompressionMethod, Container, ContainerFile};
///
/// let mut container = Container::new("show.dmz");
/// container.insert(ContainerFile::new("Config/TimecodeShows.xml", b"<TreeItem />".to_vec()));
///
/// // We use a buffer here, though you'd normally use a `File`
/// let mut writer = ContainerWriter::new(
///     std::io::Cursor::new(Vec::new()),
///     ContainerWriterOptions::builder()
///         .compression(CompressionMethod::Stored)
///         .build(),
/// );
/// writer.write_container(&container)?;
///
/// let bytes = writer.finish()?.into_inner();
/// assert_eq!(Container::from_bytes(&bytes, "show.dmz")?, container);
/// # Ok(())
/// # }
/// # doit().unwrap();
/// ```
pub struct ContainerWriter<W: Write + Seek> {
    inner: ZipWriter<W>,
    options: ContainerWriterOptions,
    written: usize,
}

impl<W: Write + Seek> ContainerWriter<W> {
    /// Initializes the archive.
    pub fn new(inner: W, options: ContainerWriterOptions) -> ContainerWriter<W> {
        ContainerWriter {
            inner: ZipWriter::new(inner),
            options,
            written: 0,
        }
    }

    /// Number of files written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Add a single file, returning `false` if it was skipped
    ///
    /// The [`CHECKSUM_FILE`] is never written, its content would not match the new archive.
    #[instrument(skip(self, file), fields(name = file.name()), err)]
    pub fn write_file(&mut self, file: &ContainerFile) -> Result<bool> {
        if file.is_checksum() {
            debug!("skipping {CHECKSUM_FILE}");
            return Ok(false);
        }

        self.inner
            .start_file(file.name(), self.options.file_options())?;
        self.inner.write_all(file.data())?;
        self.written += 1;

        Ok(true)
    }

    /// Add every file of a container, in its enumeration order
    #[instrument(skip_all, fields(container = container.name()), err)]
    pub fn write_container(&mut self, container: &Container) -> Result<()> {
        for file in container.files() {
            self.write_file(file)?;
        }

        Ok(())
    }

    /// Write the central directory and return the inner writer
    #[instrument(skip(self), fields(written = self.written), err)]
    pub fn finish(self) -> Result<W> {
        Ok(self.inner.finish()?)
    }
}

impl Container {
    /// Write the container as a zip stream using the given options
    pub fn write<W: Write + Seek>(&self, writer: W, options: ContainerWriterOptions) -> Result<W> {
        let mut writer = ContainerWriter::new(writer, options);
        writer.write_container(self)?;
        writer.finish()
    }

    /// Encode the container into a buffer with the default options
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self
            .write(Cursor::new(Vec::new()), ContainerWriterOptions::default())?
            .into_inner())
    }
}

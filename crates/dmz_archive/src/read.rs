//! Types for reading project archives
//!

use std::io::{Cursor, Read, Seek};

use tracing::{debug, instrument, trace};
use zip::ZipArchive;

use crate::error::{Error, Result};
use crate::types::{Container, ContainerFile};

/// Upper bound for buffer space reserved up front from a size an entry header declares
const MAX_PREALLOCATION: u64 = 16 * 1024 * 1024;

/// Buffer capacity to reserve for an entry declaring `size` bytes
///
/// Headers are not trusted, larger entries still grow their buffer while being read.
fn capacity_hint(size: u64) -> usize {
    usize::try_from(size.min(MAX_PREALLOCATION)).unwrap_or(0)
}

impl Container {
    /// Read a zip stream, holding every file it contains in memory
    ///
    /// Directory entries are not files and are skipped.
    ///
    /// ```no_run
    /// fn list_contents(path: &std::path::Path) -> dmz_archive::error::Result<()> {
    ///     let file = std::fs::File::open(path)?;
    ///     let container = dmz_archive::Container::read(file, "project.dmz")?;
    ///
    ///     for file in container.files() {
    ///         println!("{}: {} bytes", file.name(), file.size());
    ///     }
    ///
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(reader), err)]
    pub fn read<R: Read + Seek>(reader: R, name: &str) -> Result<Container> {
        let mut archive = ZipArchive::new(reader).map_err(Error::InvalidArchive)?;
        let mut container = Container::new(name);

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            if entry.is_dir() {
                trace!(entry = entry.name(), "skipping directory");
                continue;
            }

            let mut data = Vec::with_capacity(capacity_hint(entry.size()));
            entry.read_to_end(&mut data)?;

            if let Some(previous) = container.insert(ContainerFile::new(entry.name(), data)) {
                debug!(entry = previous.name(), "duplicate entry replaced");
            }
        }

        debug!(files = container.len(), "read container");

        Ok(container)
    }

    /// Read a zip stream held in a byte buffer
    pub fn from_bytes(bytes: &[u8], name: &str) -> Result<Container> {
        Self::read(Cursor::new(bytes), name)
    }
}

#[cfg(test)]
mod test {
    use std::io::{Cursor, Write};

    use pretty_assertions::assert_eq;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    use crate::error::{Error, Result};
    use crate::read::{capacity_hint, MAX_PREALLOCATION};
    use crate::types::Container;

    fn zip_with(entries: &[(&str, &[u8])]) -> Result<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer.add_directory("Config/", SimpleFileOptions::default())?;
        for (name, data) in entries {
            writer.start_file(*name, SimpleFileOptions::default())?;
            writer.write_all(data)?;
        }
        Ok(writer.finish()?.into_inner())
    }

    #[test]
    fn read_invalid_stream() {
        let result = Container::from_bytes(b"definitely not a zip file", "broken.dmz");
        assert!(matches!(result, Err(Error::InvalidArchive(_))));
    }

    #[test]
    fn read_skips_directories() -> Result<()> {
        let bytes = zip_with(&[
            ("Config/TimecodeShows.xml", &b"<TreeItem />"[..]),
            ("Config/Sounds/intro.mp3", &[1u8, 2, 3][..]),
        ])?;

        let container = Container::from_bytes(&bytes, "test.dmz")?;
        assert_eq!(container.name(), "test.dmz");
        assert_eq!(
            container.file_names().collect::<Vec<_>>(),
            vec!["Config/TimecodeShows.xml", "Config/Sounds/intro.mp3"]
        );
        assert_eq!(container.by_name("Config/Sounds/intro.mp3")?.data(), &[1, 2, 3]);

        Ok(())
    }

    #[test]
    fn read_empty_archive() -> Result<()> {
        let bytes = zip_with(&[])?;
        let container = Container::from_bytes(&bytes, "empty.dmz")?;
        assert!(container.is_empty());

        Ok(())
    }

    #[test]
    fn declared_sizes_are_capped() {
        assert_eq!(capacity_hint(0), 0);
        assert_eq!(capacity_hint(1234), 1234);
        assert_eq!(capacity_hint(u64::MAX), MAX_PREALLOCATION as usize);
        assert_eq!(
            capacity_hint(MAX_PREALLOCATION + 1),
            MAX_PREALLOCATION as usize
        );
    }
}

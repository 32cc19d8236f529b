//! Base types for the in-memory form of a project archive.

use indexmap::IndexMap;

use crate::error::{Error, FileNotFoundError, Result};

/// Name of the integrity file some archives carry
///
/// The file is only ever valid for the archive it was read from, it is never written back.
pub const CHECKSUM_FILE: &str = "checksum.sfv";

/// A single named entry of a [`Container`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerFile {
    /// Forward slash delimited path of the entry inside the archive
    pub name: Box<str>,

    /// The uncompressed content
    pub data: Vec<u8>,
}

impl ContainerFile {
    pub fn new(name: impl Into<Box<str>>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Get the name of the file
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the content of the file
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the size of the file, in bytes
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Whether this is the archive's [`CHECKSUM_FILE`]
    pub fn is_checksum(&self) -> bool {
        self.name.eq_ignore_ascii_case(CHECKSUM_FILE)
    }
}

/// The decoded form of a project archive
///
/// Files keep the order they were read or inserted in. Inserting a file under a name that is
/// already present replaces the old entry in place.
///
/// ```
/// use dmz_archive::{Container, ContainerFile};
///
/// let mut container = Container::new("show.dmz");
/// container.insert(ContainerFile::new("Config/TimecodeShows.xml", b"<TreeItem />".to_vec()));
/// container.insert(ContainerFile::new("Config/Sounds/intro.mp3", vec![0u8; 16]));
///
/// assert_eq!(container.len(), 2);
/// assert_eq!(
///     container.file_names().collect::<Vec<_>>(),
///     vec!["Config/TimecodeShows.xml", "Config/Sounds/intro.mp3"]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    name: String,
    files: IndexMap<Box<str>, ContainerFile>,
}

impl Container {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: IndexMap::new(),
        }
    }

    /// The name the container was created with, usually the archive's file name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of files contained in this container
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether this container holds no files
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over all the file names in this container
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(|s| s.as_ref())
    }

    /// Returns an iterator over all files in enumeration order
    pub fn files(&self) -> impl Iterator<Item = &ContainerFile> {
        self.files.values()
    }

    /// Whether a file with exactly this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    /// Get a file by its exact name
    pub fn get(&self, name: &str) -> Option<&ContainerFile> {
        self.files.get(name)
    }

    /// Search for a file by name, failing if it is not present
    pub fn by_name(&self, name: &str) -> Result<&ContainerFile> {
        self.get(name)
            .ok_or_else(|| Error::FileNotFound(FileNotFoundError::Name(name.to_owned())))
    }

    /// Get the index of a file entry by name, if it's present
    pub fn index_for_name(&self, name: &str) -> Option<usize> {
        self.files.get_index_of(name)
    }

    /// Add a file, returning the entry it replaced if the name was already taken
    pub fn insert(&mut self, file: ContainerFile) -> Option<ContainerFile> {
        self.files.insert(file.name.clone(), file)
    }

    /// Replace the content of an existing file
    pub fn replace_data(&mut self, name: &str, data: Vec<u8>) -> Result<()> {
        let file = self
            .files
            .get_mut(name)
            .ok_or_else(|| Error::FileNotFound(FileNotFoundError::Name(name.to_owned())))?;
        file.data = data;

        Ok(())
    }

    /// Remove a file, keeping the order of the remaining ones
    pub fn remove(&mut self, name: &str) -> Option<ContainerFile> {
        self.files.shift_remove(name)
    }
}

impl Extend<ContainerFile> for Container {
    fn extend<T: IntoIterator<Item = ContainerFile>>(&mut self, iter: T) {
        for file in iter {
            self.insert(file);
        }
    }
}

//! # Project Archive Documentation
//!
//! This crate reads and writes the **project archives** (`.dmz`) used by the lighting control
//! software *DMXControl*. An archive is a regular zip file holding the XML configuration of a
//! project alongside the resource files it uses, such as sound files for timecode shows.
//!
//! ## Archive Layout
//!
//! Entries are forward slash delimited paths relative to the archive root.
//!
//! | Path                                   | Description                                           |
//! |----------------------------------------|-------------------------------------------------------|
//! | `Config/ProjectExplorer.xml`           | Navigation tree with `Cuelists`, `TimecodeShows` and `Files` branches |
//! | `Config/TimecodeShows.xml`             | Index of all timecode shows                           |
//! | `Config/TimecodeShows/<id>.xml`        | Content of a single timecode show                     |
//! | `Config/SceneLists*.xml`               | Scene list definitions, possibly split over files     |
//! | `Config/Presets*.xml`                  | Preset definitions, possibly split over files         |
//! | `Config/ProjectResourceMetadata.xml`   | Metadata for every resource file of the project       |
//! | `Config/...`                           | Resource files, e.g. sounds                           |
//! | `checksum.sfv`                         | CRC-32 list of the entries, see [`checksum`]          |
//!
//! ## Reading and Writing
//!
//! [`Container::read`] decodes the whole archive into memory. Directory entries are dropped, every
//! other entry becomes a [`ContainerFile`] in the order it appears in the archive.
//!
//! [`ContainerWriter`] encodes a [`Container`] back into a zip stream, keeping the order and the
//! paths of the files. The `checksum.sfv` entry is never written since it would describe the
//! archive it was read from.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.dmz`
//! - **Compression Methods**:
//!   - `Stored`: No compression
//!   - `Deflated`: Deflate, written at level 9 by default
//!

pub mod checksum;
pub mod compression;
pub mod error;
pub mod read;
pub mod types;
pub mod write;

pub use compression::CompressionMethod;
pub use types::{Container, ContainerFile, CHECKSUM_FILE};
pub use write::ContainerWriter;

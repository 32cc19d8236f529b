//! # Timecode Show Transfer
//!
//! Lists, extracts and merges **timecode shows** between DMXControl project archives. A timecode
//! show is spread over several files of a [`Container`](dmz_archive::Container):
//!
//! | File                                  | Holds                                                    |
//! |---------------------------------------|----------------------------------------------------------|
//! | `Config/TimecodeShows/<id>.xml`       | The show itself, including its sound file references     |
//! | `Config/TimecodeShows.xml`            | One index entry per show with `Number` and `File`        |
//! | `Config/ProjectExplorer.xml`          | A `Node` per show, scene list and resource file          |
//! | `Config/SceneLists*.xml`              | Scene lists the show references                          |
//! | `Config/Presets*.xml`                 | Presets, shared by the whole project                     |
//! | `Config/ProjectResourceMetadata.xml`  | An entry per resource file                               |
//!
//! [`extract_timeshow`] collects all of these into a self contained [`Timeshow`] and
//! [`add_timeshow`] merges such a bundle into another container, renumbering what has to stay
//! unique and skipping what the destination already has.
//!
//! ```no_run
//! use dmz_archive::Container;
//! use dmz_timeshow::{add_timeshow, extract_timeshow, get_timeshows};
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let source = Container::from_bytes(&std::fs::read("source.dmz").into_diagnostic()?, "source.dmz")?;
//! let mut destination = Container::from_bytes(
//!     &std::fs::read("destination.dmz").into_diagnostic()?,
//!     "destination.dmz",
//! )?;
//!
//! for meta in get_timeshows(&source) {
//!     let timeshow = extract_timeshow(&source, &meta)?;
//!     let report = add_timeshow(&mut destination, &timeshow)?;
//!     println!("{} changes for {}", report.len(), meta.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod access;
pub mod error;
pub mod extract;
pub mod listing;
pub mod merge;
#[cfg(feature = "serde")]
mod serde;
pub mod types;

pub use error::{Error, NotFoundError, Result};
pub use extract::extract_timeshow;
pub use listing::{get_presets, get_scene_lists, get_timeshows};
pub use merge::{add_timeshow, MergeEvent, MergeReport};
pub use types::{Preset, SceneList, Timeshow, TimeshowMeta};

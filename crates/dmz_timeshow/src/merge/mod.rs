//! Merging an extracted [`Timeshow`] into a destination container.
//!
//! Every step rewrites the files it touches on its own and derives its counters from what the
//! destination currently holds. A failure in a later step leaves the changes of earlier steps in
//! place, merge into a clone of the destination when the result has to be all or nothing.

mod families;
mod project_explorer;
mod report;
mod resources;
mod timecode_shows;

use dmz_archive::{Container, ContainerFile};
use tracing::instrument;

use crate::access::{contains_ignore_case, TIMECODE_SHOW_DIR};
use crate::error::{Error, Result};
use crate::types::Timeshow;

pub use families::{PRESET, SCENE_LIST};
pub use report::{MergeEvent, MergeReport};

/// Add a timecode show to a destination container
///
/// Fails with [`Error::Conflict`] before touching anything when the destination already has a
/// show file for the same id.
#[instrument(skip_all, fields(container = destination.name(), id = %timeshow.id), err)]
pub fn add_timeshow(destination: &mut Container, timeshow: &Timeshow) -> Result<MergeReport> {
    validate(timeshow)?;

    let id = timeshow.id.to_string();
    if destination.file_names().any(|name| {
        contains_ignore_case(name, TIMECODE_SHOW_DIR) && contains_ignore_case(name, &id)
    }) {
        return Err(Error::Conflict(timeshow.id));
    }

    let mut report = MergeReport::default();

    insert_file(
        destination,
        ContainerFile::new(timeshow.path.as_str(), timeshow.xml.clone()),
        &mut report,
    );
    project_explorer::update(destination, timeshow, &mut report)?;
    families::SCENE_LISTS.merge(
        destination,
        timeshow.scene_lists.iter().map(|s| (s.id, &s.node)),
        &mut report,
    )?;
    timecode_shows::update(destination, timeshow, &mut report)?;
    resources::update(destination, timeshow, &mut report)?;
    families::PRESETS.merge(
        destination,
        timeshow.presets.iter().map(|p| (p.id, &p.node)),
        &mut report,
    )?;
    for file in &timeshow.files {
        insert_file(destination, file.clone(), &mut report);
    }

    Ok(report)
}

fn validate(timeshow: &Timeshow) -> Result<()> {
    if !contains_ignore_case(&timeshow.path, TIMECODE_SHOW_DIR) {
        return Err(Error::Validation(format!(
            "timeshow file {} is not inside {TIMECODE_SHOW_DIR}",
            timeshow.path
        )));
    }
    if !contains_ignore_case(&timeshow.path, &timeshow.id.to_string()) {
        return Err(Error::Validation(format!(
            "timeshow file {} is not named after id {}",
            timeshow.path, timeshow.id
        )));
    }
    if timeshow.name.trim().is_empty() {
        return Err(Error::Validation(format!(
            "timeshow {} has no name",
            timeshow.id
        )));
    }

    Ok(())
}

fn insert_file(destination: &mut Container, file: ContainerFile, report: &mut MergeReport) {
    let path = file.name().to_owned();
    let replaced = destination.insert(file).is_some();
    report.push(MergeEvent::FileInserted { path, replaced });
}

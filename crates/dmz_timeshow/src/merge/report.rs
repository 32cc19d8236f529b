//! Structured account of what a merge changed.

use std::fmt;

use tracing::{info, warn};
use uuid::Uuid;

/// A single change, or a notable non-change, made while merging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeEvent {
    /// A file was added to the container, or replaced an existing one
    FileInserted { path: String, replaced: bool },

    /// A `Node` was appended to a project explorer branch
    NodeAppended {
        branch: String,
        id: String,
        index: usize,
    },

    /// A scene list was already part of the project explorer
    NodeSkipped { branch: String, id: String },

    /// An item was appended to a scene list or preset file
    ItemAdded {
        family: &'static str,
        file: String,
        id: Uuid,
        number: Option<u32>,
        save_index: usize,
    },

    /// An item with the same id already exists in its family
    ItemSkipped { family: &'static str, id: Uuid },

    /// The container has no file of a family, nothing of it was merged
    FamilyMissing { family: &'static str },

    /// The timecode show was added to the show index
    ShowIndexed {
        id: Uuid,
        number: usize,
        save_index: usize,
    },

    /// A resource metadata entry was registered
    ResourceRegistered {
        name: String,
        user_imported: bool,
        replaced: usize,
    },
}

impl fmt::Display for MergeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeEvent::FileInserted { path, replaced } if *replaced => {
                write!(f, "replaced file {path}")
            }
            MergeEvent::FileInserted { path, .. } => write!(f, "added file {path}"),
            MergeEvent::NodeAppended { branch, id, index } => {
                write!(f, "added {id} to {branch} branch at index {index}")
            }
            MergeEvent::NodeSkipped { branch, id } => {
                write!(f, "{id} already in {branch} branch")
            }
            MergeEvent::ItemAdded {
                family,
                file,
                id,
                number,
                save_index,
            } => {
                write!(f, "added {family} {id} to {file} at save index {save_index}")?;
                if let Some(number) = number {
                    write!(f, " as number {number}")?;
                }
                Ok(())
            }
            MergeEvent::ItemSkipped { family, id } => write!(f, "{family} {id} already present"),
            MergeEvent::FamilyMissing { family } => write!(f, "no {family} file, skipped"),
            MergeEvent::ShowIndexed {
                id,
                number,
                save_index,
            } => write!(
                f,
                "indexed timecode show {id} as number {number} at save index {save_index}"
            ),
            MergeEvent::ResourceRegistered {
                name,
                user_imported,
                replaced,
            } => {
                write!(f, "registered resource {name} (user imported: {user_imported})")?;
                if *replaced > 0 {
                    write!(f, ", replacing {replaced} entries")?;
                }
                Ok(())
            }
        }
    }
}

/// Ordered list of [`MergeEvent`]s produced by a merge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    events: Vec<MergeEvent>,
}

impl MergeReport {
    pub(crate) fn push(&mut self, event: MergeEvent) {
        match &event {
            MergeEvent::FamilyMissing { .. } => warn!(%event),
            _ => info!(%event),
        }
        self.events.push(event);
    }

    pub fn events(&self) -> &[MergeEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Items added to the given family, in insertion order
    pub fn added(&self, family: &str) -> impl Iterator<Item = Uuid> + '_ {
        let family = family.to_owned();
        self.events.iter().filter_map(move |event| match event {
            MergeEvent::ItemAdded { family: f, id, .. } if *f == family => Some(*id),
            _ => None,
        })
    }
}

impl IntoIterator for MergeReport {
    type Item = MergeEvent;
    type IntoIter = std::vec::IntoIter<MergeEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    use super::{MergeEvent, MergeReport};

    #[test]
    fn display_events() {
        let event = MergeEvent::ItemAdded {
            family: "scene list",
            file: "Config/SceneLists.xml".into(),
            id: Uuid::nil(),
            number: Some(4),
            save_index: 2,
        };
        assert_eq!(
            event.to_string(),
            "added scene list 00000000-0000-0000-0000-000000000000 to Config/SceneLists.xml at save index 2 as number 4"
        );

        let event = MergeEvent::FamilyMissing { family: "preset" };
        assert_eq!(event.to_string(), "no preset file, skipped");
    }

    #[test]
    fn filter_added_items() {
        let mut report = MergeReport::default();
        let id = Uuid::from_u128(7);
        report.push(MergeEvent::ItemSkipped {
            family: "preset",
            id: Uuid::nil(),
        });
        report.push(MergeEvent::ItemAdded {
            family: "preset",
            file: "Config/Presets.xml".into(),
            id,
            number: None,
            save_index: 0,
        });

        assert_eq!(report.len(), 2);
        assert_eq!(report.added("preset").collect::<Vec<_>>(), vec![id]);
        assert_eq!(report.added("scene list").count(), 0);
    }
}

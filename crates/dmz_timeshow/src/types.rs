//! Value types passed between listing, extraction and merging.

use dmz_archive::ContainerFile;
use dmz_tree::TreeNode;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lightweight listing record of a timecode show
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeshowMeta {
    pub id: Uuid,
    pub name: String,

    /// Display number as stored, empty when the show has none
    pub number: String,
}

/// A scene list together with its complete tree fragment
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneList {
    pub id: Uuid,
    pub name: String,

    /// The `SceneList` node, only `Number` and `ZZ_SAVE_INDEX` are touched when merging
    #[cfg_attr(feature = "serde", serde(with = "crate::serde::fragment"))]
    pub node: TreeNode,
}

impl SceneList {
    /// Serialized XML of the fragment
    pub fn xml(&self) -> Result<String> {
        fragment_xml(&self.node)
    }
}

/// A preset together with its complete tree fragment
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Preset {
    pub id: Uuid,

    /// The `Preset` node, only `ZZ_SAVE_INDEX` is touched when merging
    #[cfg_attr(feature = "serde", serde(with = "crate::serde::fragment"))]
    pub node: TreeNode,
}

impl Preset {
    /// Display name of the preset, if it has one
    pub fn name(&self) -> Option<&str> {
        self.node.attribute_value("Name").filter(|n| !n.trim().is_empty())
    }

    /// Serialized XML of the fragment
    pub fn xml(&self) -> Result<String> {
        fragment_xml(&self.node)
    }
}

/// A self contained timecode show, ready to be added to another container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeshow {
    pub id: Uuid,
    pub name: String,
    pub number: String,

    /// Content of the per show file, byte for byte
    pub xml: Vec<u8>,

    /// Path of the per show file in the source container
    pub path: String,

    /// The show's `Node` from the `TimecodeShows` branch of the project explorer
    pub project_explorer: TreeNode,

    /// Resource files used by the show, e.g. sounds
    pub files: Vec<ContainerFile>,

    /// Scene lists referenced by the show
    pub scene_lists: Vec<SceneList>,

    /// Every preset of the source container
    pub presets: Vec<Preset>,
}

impl Timeshow {
    /// The listing record of this show
    pub fn meta(&self) -> TimeshowMeta {
        TimeshowMeta {
            id: self.id,
            name: self.name.clone(),
            number: self.number.clone(),
        }
    }
}

fn fragment_xml(node: &TreeNode) -> Result<String> {
    node.to_xml_string().map_err(|source| Error::Format {
        path: node.name().to_owned(),
        source,
    })
}

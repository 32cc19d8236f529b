//! Catalogs of the timecode shows, presets and scene lists inside a container.
//!
//! Listing is best effort: files that fail to parse and entries without a valid identifier are
//! skipped, they never fail the whole listing.

use dmz_archive::Container;
use tracing::{debug, instrument};

use crate::access::{
    parse_id, parse_tree, select_family, select_files, PRESETS_PREFIX, SCENE_LISTS_PREFIX,
};
use crate::types::{Preset, SceneList, TimeshowMeta};

/// List the timecode shows from the index files under `Config/TimecodeShows`
#[instrument(skip_all, fields(container = container.name()))]
pub fn get_timeshows(container: &Container) -> Vec<TimeshowMeta> {
    let mut timeshows = Vec::new();

    for file in select_files(container, "Config/TimecodeShows", Some("/TimecodeShows/")) {
        let Some(document) = parse_tree(file) else {
            continue;
        };

        for node in document.find_nodes("TimecodeShow") {
            let name = node.attribute_value("Name").unwrap_or_default();
            let Some(id) = parse_id(node.attribute_value("ID")) else {
                debug!(file = file.name(), name, "skipping timecode show without valid id");
                continue;
            };
            if name.trim().is_empty() {
                debug!(file = file.name(), %id, "skipping timecode show without name");
                continue;
            }

            timeshows.push(TimeshowMeta {
                id,
                name: name.to_owned(),
                number: node.attribute_value("Number").unwrap_or_default().to_owned(),
            });
        }
    }

    debug!(count = timeshows.len(), "listed timecode shows");
    timeshows
}

/// List the presets from the files under `Config/Presets`
#[instrument(skip_all, fields(container = container.name()))]
pub fn get_presets(container: &Container) -> Vec<Preset> {
    let mut presets = Vec::new();

    for file in select_files(container, PRESETS_PREFIX, Some("/Presets/")) {
        let Some(document) = parse_tree(file) else {
            continue;
        };

        presets.extend(document.find_nodes("Preset").filter_map(|node| {
            let id = parse_id(node.attribute_value("ID"))?;
            Some(Preset {
                id,
                node: node.clone(),
            })
        }));
    }

    debug!(count = presets.len(), "listed presets");
    presets
}

/// List the scene lists from every `Config/SceneLists*.xml` file
#[instrument(skip_all, fields(container = container.name()))]
pub fn get_scene_lists(container: &Container) -> Vec<SceneList> {
    let mut scene_lists = Vec::new();

    for file in select_family(container, SCENE_LISTS_PREFIX) {
        let Some(document) = parse_tree(file) else {
            continue;
        };
        let Some(section) = document.find_node("SceneLists") else {
            debug!(file = file.name(), "no SceneLists section");
            continue;
        };

        scene_lists.extend(section.children_named("SceneList").filter_map(|node| {
            let id = parse_id(node.attribute_value("ID"))?;
            let name = node.attribute_value("Name").filter(|n| !n.trim().is_empty())?;
            Some(SceneList {
                id,
                name: name.to_owned(),
                node: node.clone(),
            })
        }));
    }

    debug!(count = scene_lists.len(), "listed scene lists");
    scene_lists
}

//! Assembly of a self contained [`Timeshow`] from a source container.

use dmz_archive::{Container, ContainerFile};
use itertools::Itertools;
use tracing::{debug, info, instrument};

use crate::access::{
    contains_ignore_case, ends_with_ignore_case, find_file, load_required, load_tree, parse_id,
    CONFIG_PREFIX, PROJECT_EXPLORER, TIMECODE_SHOW_DIR,
};
use crate::error::{NotFoundError, Result};
use crate::listing::{get_presets, get_scene_lists};
use crate::types::{SceneList, Timeshow, TimeshowMeta};

/// Extract a timecode show with everything it depends on
///
/// Missing sound files and unknown scene list references are dropped. Every other missing piece
/// is an error, a partial bundle is never returned.
#[instrument(skip_all, fields(container = container.name(), id = %meta.id), err)]
pub fn extract_timeshow(container: &Container, meta: &TimeshowMeta) -> Result<Timeshow> {
    let id = meta.id.to_string();

    let show_file = container
        .files()
        .find(|file| {
            contains_ignore_case(file.name(), TIMECODE_SHOW_DIR)
                && contains_ignore_case(file.name(), &id)
        })
        .ok_or(NotFoundError::TimeshowFile(meta.id))?;

    let (explorer_path, explorer) = load_required(container, PROJECT_EXPLORER)?;
    let project_explorer = explorer
        .find_nodes("Node")
        .find(|node| parse_id(node.attribute("ID").map(|a| a.value.as_str())) == Some(meta.id))
        .ok_or_else(|| NotFoundError::Node {
            file: explorer_path,
            node: format!("Node {id}"),
        })?
        .clone();

    let show = load_tree(show_file)?;

    let files = sound_files(container, &show);
    let scene_lists = referenced_scene_lists(container, &show);
    let presets = get_presets(container);

    info!(
        path = show_file.name(),
        files = files.len(),
        scene_lists = scene_lists.len(),
        presets = presets.len(),
        "extracted timeshow"
    );

    Ok(Timeshow {
        id: meta.id,
        name: meta.name.clone(),
        number: meta.number.clone(),
        xml: show_file.data().to_vec(),
        path: show_file.name().to_owned(),
        project_explorer,
        files,
        scene_lists,
        presets,
    })
}

/// Resource files named by the `SoundFile` nodes of a show
fn sound_files(container: &Container, show: &dmz_tree::Document) -> Vec<ContainerFile> {
    let mut files: Vec<ContainerFile> = Vec::new();

    let names = show
        .find_nodes("SoundFile")
        .filter_map(|node| node.attribute_value("SoundFileName"))
        .map(|name| name.trim().replace('\\', "/"))
        .filter(|name| !name.is_empty())
        .unique_by(|name| name.to_ascii_lowercase());

    for name in names {
        let config_path = format!("{CONFIG_PREFIX}{name}");
        let found = find_file(container, &config_path).or_else(|| {
            container
                .files()
                .find(|file| ends_with_ignore_case(file.name(), &name))
        });

        match found {
            Some(file) if !files.iter().any(|f| f.name == file.name) => files.push(file.clone()),
            Some(_) => {}
            None => debug!(%name, "sound file not part of the container"),
        }
    }

    files
}

/// Scene lists referenced from the `ScenelistIDs` sections of a show
fn referenced_scene_lists(container: &Container, show: &dmz_tree::Document) -> Vec<SceneList> {
    let catalog = get_scene_lists(container);
    let mut scene_lists: Vec<SceneList> = Vec::new();

    let references = show
        .find_nodes("ScenelistIDs")
        .flat_map(|section| section.descendants())
        .filter(|node| node.is("Scenelist"))
        .filter_map(|node| parse_id(node.attribute_value("SceneListID")));

    for id in references {
        if scene_lists.iter().any(|s| s.id == id) {
            continue;
        }

        match catalog.iter().find(|s| s.id == id) {
            Some(scene_list) => scene_lists.push(scene_list.clone()),
            None => debug!(%id, "scene list not part of the container"),
        }
    }

    scene_lists
}

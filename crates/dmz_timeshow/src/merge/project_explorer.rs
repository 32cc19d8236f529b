use std::collections::HashSet;

use dmz_archive::Container;
use dmz_tree::{Attribute, Document, TreeNode};
use uuid::Uuid;

use crate::access::{file_name, load_required, parse_id, store_tree, PROJECT_EXPLORER};
use crate::error::{NotFoundError, Result};
use crate::merge::report::{MergeEvent, MergeReport};
use crate::types::Timeshow;

const CUELISTS: &str = "Cuelists";
const TIMECODE_SHOWS: &str = "TimecodeShows";
const FILES: &str = "Files";

/// Branch of the project explorer whose `ID` attribute is `id`
fn branch_mut<'a>(document: &'a mut Document, id: &str, file: &str) -> Result<&'a mut TreeNode> {
    let is_branch = |node: &TreeNode| {
        node.is("Branch")
            && node
                .attribute("ID")
                .is_some_and(|a| a.value.eq_ignore_ascii_case(id))
    };

    Ok(document
        .root
        .find_node_mut_by(&is_branch)
        .ok_or_else(|| NotFoundError::Node {
            file: file.to_owned(),
            node: format!("Branch {id}"),
        })?)
}

fn node_count(branch: &TreeNode) -> usize {
    branch.children_named("Node").count()
}

fn entry(id: &str, index: usize) -> TreeNode {
    TreeNode::item("Node")
        .with_attribute(Attribute::primitive("ID", "String", id))
        .with_attribute(Attribute::primitive("Index", "Int32", index))
}

/// Register scene lists, the show itself and its resource files in the project explorer
pub(crate) fn update(
    container: &mut Container,
    timeshow: &Timeshow,
    report: &mut MergeReport,
) -> Result<()> {
    let (path, mut document) = load_required(container, PROJECT_EXPLORER)?;

    let cuelists = branch_mut(&mut document, CUELISTS, &path)?;
    let present = cuelists
        .children_named("Node")
        .filter_map(|node| parse_id(node.attribute_value("ID")))
        .collect::<HashSet<Uuid>>();
    let mut index = node_count(cuelists);
    for scene_list in &timeshow.scene_lists {
        let id = scene_list.id.to_string();
        if present.contains(&scene_list.id) {
            report.push(MergeEvent::NodeSkipped {
                branch: CUELISTS.into(),
                id,
            });
            continue;
        }

        cuelists.push_child(entry(&id, index));
        report.push(MergeEvent::NodeAppended {
            branch: CUELISTS.into(),
            id,
            index,
        });
        index += 1;
    }

    let shows = branch_mut(&mut document, TIMECODE_SHOWS, &path)?;
    let index = node_count(shows);
    let mut node = timeshow.project_explorer.clone();
    node.set_attribute_value("Index", index);
    shows.push_child(node);
    report.push(MergeEvent::NodeAppended {
        branch: TIMECODE_SHOWS.into(),
        id: timeshow.id.to_string(),
        index,
    });

    let files = branch_mut(&mut document, FILES, &path)?;
    let mut present = files
        .children_named("Node")
        .filter_map(|node| node.attribute_value("ID"))
        .map(|id| id.trim().to_ascii_lowercase())
        .collect::<HashSet<String>>();
    let mut index = node_count(files);
    for file in &timeshow.files {
        let id = file_name(file.name());
        if !present.insert(id.to_ascii_lowercase()) {
            report.push(MergeEvent::NodeSkipped {
                branch: FILES.into(),
                id: id.to_owned(),
            });
            continue;
        }

        files.push_child(entry(id, index));
        report.push(MergeEvent::NodeAppended {
            branch: FILES.into(),
            id: id.to_owned(),
            index,
        });
        index += 1;
    }

    store_tree(container, &path, &document)
}

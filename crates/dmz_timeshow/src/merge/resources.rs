use dmz_archive::Container;
use dmz_tree::{Attribute, TreeNode};

use crate::access::{config_reference, load_required, store_tree, RESOURCE_METADATA};
use crate::error::{NotFoundError, Result};
use crate::merge::report::{MergeEvent, MergeReport};
use crate::types::Timeshow;

const SECTION: &str = "Resources";

/// Register the show file and its resource files in the resource metadata
///
/// Entries are keyed by their path relative to `Config`, an existing entry for the same path is
/// replaced rather than duplicated.
pub(crate) fn update(
    container: &mut Container,
    timeshow: &Timeshow,
    report: &mut MergeReport,
) -> Result<()> {
    let (path, mut document) = load_required(container, RESOURCE_METADATA)?;

    let section = document
        .root
        .find_node_mut(SECTION)
        .ok_or_else(|| NotFoundError::Section {
            file: path.clone(),
            section: SECTION.to_owned(),
        })?;

    let entries = std::iter::once((timeshow.path.as_str(), false))
        .chain(timeshow.files.iter().map(|file| (file.name(), true)));

    for (resource, user_imported) in entries {
        let name = config_reference(resource);
        let replaced = section.remove_nodes(&name);

        section.push_child(TreeNode::item(&name).with_attribute(Attribute::primitive(
            "UserImported",
            "Boolean",
            user_imported,
        )));
        report.push(MergeEvent::ResourceRegistered {
            name,
            user_imported,
            replaced,
        });
    }

    store_tree(container, &path, &document)
}

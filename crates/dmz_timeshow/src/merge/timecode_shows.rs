use dmz_archive::Container;
use dmz_tree::{Attribute, TreeNode};

use crate::access::{config_reference, load_required, store_tree, TIMECODE_SHOWS};
use crate::error::{NotFoundError, Result};
use crate::merge::report::{MergeEvent, MergeReport};
use crate::types::Timeshow;

const SECTION: &str = "TimecodeShows";
const ITEM: &str = "TimecodeShow";

/// Append the show to the show index, numbered after every show already listed
pub(crate) fn update(
    container: &mut Container,
    timeshow: &Timeshow,
    report: &mut MergeReport,
) -> Result<()> {
    let (path, mut document) = load_required(container, TIMECODE_SHOWS)?;

    let count = document.find_nodes(ITEM).count();
    let section = document
        .root
        .find_node_mut(SECTION)
        .ok_or_else(|| NotFoundError::Section {
            file: path.clone(),
            section: SECTION.to_owned(),
        })?;

    let number = count + 1;
    section.push_child(
        TreeNode::item(ITEM)
            .with_attribute(Attribute::primitive("Name", "String", &timeshow.name))
            .with_attribute(Attribute::primitive("ID", "String", timeshow.id))
            .with_attribute(Attribute::primitive("Number", "UInt32", number))
            .with_attribute(Attribute::primitive(
                "File",
                "String",
                config_reference(&timeshow.path),
            ))
            .with_attribute(Attribute::primitive("ZZ_SAVE_INDEX", "Int32", count)),
    );

    store_tree(container, &path, &document)?;
    report.push(MergeEvent::ShowIndexed {
        id: timeshow.id,
        number,
        save_index: count,
    });

    Ok(())
}

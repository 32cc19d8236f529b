use std::collections::HashSet;

use dmz_archive::Container;
use dmz_tree::TreeNode;
use tracing::debug;
use uuid::Uuid;

use crate::access::{id_key, load_tree, parse_tree, select_family, store_tree};
use crate::access::{PRESETS_PREFIX, SCENE_LISTS_PREFIX};
use crate::error::{Error, NotFoundError, Result};
use crate::merge::report::{MergeEvent, MergeReport};

/// Label of the scene list family in [`MergeEvent`]s
pub const SCENE_LIST: &str = "scene list";

/// Label of the preset family in [`MergeEvent`]s
pub const PRESET: &str = "preset";

/// A group of files sharing one id space, such as `Config/SceneLists*.xml`
pub(crate) struct Family {
    label: &'static str,
    prefix: &'static str,
    section: &'static str,
    item: &'static str,

    /// Whether items carry a user facing `Number` that has to stay unique
    numbered: bool,
}

pub(crate) const SCENE_LISTS: Family = Family {
    label: SCENE_LIST,
    prefix: SCENE_LISTS_PREFIX,
    section: "SceneLists",
    item: "SceneList",
    numbered: true,
};

pub(crate) const PRESETS: Family = Family {
    label: PRESET,
    prefix: PRESETS_PREFIX,
    section: "Presets",
    item: "Preset",
    numbered: false,
};

/// Ids and the highest `Number` already used across a family
#[derive(Debug, Default)]
struct Existing {
    ids: HashSet<String>,
    max_number: u32,
}

impl Family {
    /// Paths of the family, sorted descending so the first one receives new items
    fn paths(&self, container: &Container) -> Vec<String> {
        let mut paths = select_family(container, self.prefix)
            .map(|file| file.name().to_owned())
            .collect::<Vec<_>>();
        paths.sort_by(|a, b| b.cmp(a));
        paths
    }

    /// Collect what every readable file of the family already contains
    fn existing(&self, container: &Container, paths: &[String]) -> Existing {
        let mut existing = Existing::default();

        for path in paths {
            let Some(document) = container.get(path).and_then(parse_tree) else {
                continue;
            };
            let Some(section) = document.find_node(self.section) else {
                debug!(%path, section = self.section, "file has no section");
                continue;
            };

            for item in section.children_named(self.item) {
                if let Some(id) = item.attribute("ID").filter(|a| !a.value.trim().is_empty()) {
                    existing.ids.insert(id_key(&id.value));
                }
                if let Some(number) = item.attribute("Number") {
                    let number = number.value.trim().parse::<u32>().unwrap_or(0);
                    existing.max_number = existing.max_number.max(number);
                }
            }
        }

        existing
    }

    /// Append the items whose id is new to the family to its first file
    ///
    /// New items get `ZZ_SAVE_INDEX` set to the number of ids in the family and, for numbered
    /// families, the next free `Number`. Attributes an item does not carry are not added.
    pub(crate) fn merge<'a>(
        &self,
        container: &mut Container,
        incoming: impl IntoIterator<Item = (Uuid, &'a TreeNode)>,
        report: &mut MergeReport,
    ) -> Result<()> {
        let paths = self.paths(container);
        let Some(target) = paths.first().cloned() else {
            report.push(MergeEvent::FamilyMissing { family: self.label });
            return Ok(());
        };

        let mut existing = self.existing(container, &paths);

        let mut document = load_tree(container.by_name(&target)?)?;
        let section = document
            .root
            .find_node_mut(self.section)
            .ok_or_else(|| NotFoundError::Section {
                file: target.clone(),
                section: self.section.to_owned(),
            })?;

        let mut added = 0;
        for (id, node) in incoming {
            let key = id.to_string();
            if existing.ids.contains(&key) {
                report.push(MergeEvent::ItemSkipped {
                    family: self.label,
                    id,
                });
                continue;
            }

            let mut node = node.clone();
            let save_index = existing.ids.len();
            let number = if self.numbered {
                let next = existing.max_number.checked_add(1).ok_or_else(|| {
                    Error::Validation(format!(
                        "no {} number left after {} in {target}",
                        self.label, existing.max_number
                    ))
                })?;
                existing.max_number = next;
                node.set_attribute_value("Number", next);
                Some(next)
            } else {
                None
            };
            node.set_attribute_value("ZZ_SAVE_INDEX", save_index);

            section.push_child(node);
            existing.ids.insert(key);
            added += 1;

            report.push(MergeEvent::ItemAdded {
                family: self.label,
                file: target.clone(),
                id,
                number,
                save_index,
            });
        }

        if added > 0 {
            store_tree(container, &target, &document)?;
        }

        Ok(())
    }
}

#![allow(dead_code)]

use std::path::PathBuf;

use dmz_archive::{Container, ContainerFile};
use dmz_timeshow::error::{Error, Result};
use dmz_tree::{Attribute, Document, TreeNode};
use walkdir::WalkDir;

pub const NEW_SHOW: &str = "5b037e3b-7dc1-4300-8a4c-b4b167fdb412";

pub fn resources() -> PathBuf {
    PathBuf::from(format!("{}/resources/", env!("CARGO_MANIFEST_DIR")))
}

/// Build a container from an extracted project directory below `resources/`
pub fn load(dir: &str) -> Result<Container> {
    let root = resources().join(dir);
    let mut container = Container::new(format!("{dir}.dmz"));

    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = entry.map_err(|e| dmz_archive::error::Error::from(std::io::Error::from(e)))?;
        if entry.file_type().is_dir() {
            continue;
        }

        let name = entry
            .path()
            .strip_prefix(&root)
            .map_err(|e| Error::Validation(e.to_string()))?
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let data = std::fs::read(entry.path()).map_err(dmz_archive::error::Error::from)?;
        container.insert(ContainerFile::new(name, data));
    }

    Ok(container)
}

pub fn parse(container: &Container, path: &str) -> Result<Document> {
    let file = container.by_name(path)?;
    Document::parse(file.data()).map_err(|source| Error::Format {
        path: path.to_owned(),
        source,
    })
}

fn section(name: &str, children: Vec<TreeNode>) -> TreeNode {
    let mut node = TreeNode::item(name);
    node.children = children;
    node
}

fn branch(id: &str) -> TreeNode {
    TreeNode::item("Branch")
        .with_attribute(Attribute::primitive("ID", "String", id))
        .with_attribute(Attribute::primitive("Name", "String", id))
}

fn file(path: &str, root: TreeNode) -> Result<ContainerFile> {
    let data = Document::new(root)
        .to_bytes()
        .map_err(|source| Error::Format {
            path: path.to_owned(),
            source,
        })?;
    Ok(ContainerFile::new(path, data))
}

/// A project as the application writes it before anything was added
pub fn empty_project() -> Result<Container> {
    let mut container = Container::new("empty.dmz");
    container.extend([
        file(
            "Config/ProjectExplorer.xml",
            section(
                "ProjectExplorer",
                vec![branch("Cuelists"), branch("TimecodeShows"), branch("Files")],
            ),
        )?,
        file("Config/TimecodeShows.xml", TreeNode::item("TimecodeShows"))?,
        file(
            "Config/SceneLists.xml",
            section("Project", vec![TreeNode::item("SceneLists")]),
        )?,
        file(
            "Config/Presets.xml",
            section("Project", vec![TreeNode::item("Presets")]),
        )?,
        file(
            "Config/ProjectResourceMetadata.xml",
            section("ProjectResourceMetadata", vec![TreeNode::item("Resources")]),
        )?,
    ]);

    Ok(container)
}

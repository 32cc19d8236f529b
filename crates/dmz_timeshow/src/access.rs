//! File selection and tree loading on top of a [`Container`].
//!
//! Paths inside an archive are compared ignoring ASCII case, the application itself is not
//! consistent about casing.

use dmz_archive::{Container, ContainerFile};
use dmz_tree::Document;
use tracing::debug;
use uuid::Uuid;

use crate::error::{Error, NotFoundError, Result};

/// Prefix of every configuration file inside an archive
pub const CONFIG_PREFIX: &str = "Config/";

pub const PROJECT_EXPLORER: &str = "Config/ProjectExplorer.xml";
pub const TIMECODE_SHOWS: &str = "Config/TimecodeShows.xml";
pub const RESOURCE_METADATA: &str = "Config/ProjectResourceMetadata.xml";

/// Directory holding one file per timecode show
pub const TIMECODE_SHOW_DIR: &str = "Config/TimecodeShows/";

pub const SCENE_LISTS_PREFIX: &str = "Config/SceneLists";
pub const PRESETS_PREFIX: &str = "Config/Presets";

pub(crate) fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

pub(crate) fn ends_with_ignore_case(value: &str, suffix: &str) -> bool {
    value.len() >= suffix.len()
        && value
            .get(value.len() - suffix.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
}

pub(crate) fn contains_ignore_case(value: &str, needle: &str) -> bool {
    value
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

/// Files whose path starts with `prefix` and, if given, does not contain `exclude`
///
/// `exclude` separates index files such as `Config/TimecodeShows.xml` from the per item files
/// nested one level deeper.
pub fn select_files<'a>(
    container: &'a Container,
    prefix: &'a str,
    exclude: Option<&'a str>,
) -> impl Iterator<Item = &'a ContainerFile> + 'a {
    container.files().filter(move |file| {
        starts_with_ignore_case(file.name(), prefix)
            && !exclude.is_some_and(|exclude| contains_ignore_case(file.name(), exclude))
    })
}

/// Files of a multi file family such as `Config/SceneLists*.xml`
pub fn select_family<'a>(
    container: &'a Container,
    prefix: &'a str,
) -> impl Iterator<Item = &'a ContainerFile> + 'a {
    select_files(container, prefix, None).filter(|file| ends_with_ignore_case(file.name(), ".xml"))
}

/// First file whose path contains `needle`
pub fn find_file<'a>(container: &'a Container, needle: &str) -> Option<&'a ContainerFile> {
    container
        .files()
        .find(|file| contains_ignore_case(file.name(), needle))
}

/// Parse a file as a tree, `None` if its content is malformed
pub fn parse_tree(file: &ContainerFile) -> Option<Document> {
    match Document::parse(file.data()) {
        Ok(document) => Some(document),
        Err(err) => {
            debug!(file = file.name(), %err, "skipping malformed file");
            None
        }
    }
}

/// Parse a file as a tree, failing if its content is malformed
pub(crate) fn load_tree(file: &ContainerFile) -> Result<Document> {
    Document::parse(file.data()).map_err(|source| Error::Format {
        path: file.name().to_owned(),
        source,
    })
}

/// Locate a required file by path and parse it
pub(crate) fn load_required(container: &Container, needle: &str) -> Result<(String, Document)> {
    let file = find_file(container, needle)
        .ok_or_else(|| NotFoundError::File(needle.to_owned()))?;

    Ok((file.name().to_owned(), load_tree(file)?))
}

/// Serialize a tree and make it the new content of `path`
pub(crate) fn store_tree(container: &mut Container, path: &str, document: &Document) -> Result<()> {
    let data = document.to_bytes().map_err(|source| Error::Format {
        path: path.to_owned(),
        source,
    })?;
    container.replace_data(path, data)?;

    Ok(())
}

/// Parse an identifier the way the application writes them
pub(crate) fn parse_id(value: Option<&str>) -> Option<Uuid> {
    value.and_then(|value| Uuid::parse_str(value.trim()).ok())
}

/// Key used to detect identifier collisions
///
/// Identifiers that are not valid GUIDs still take part, compared ignoring case.
pub(crate) fn id_key(value: &str) -> String {
    match Uuid::parse_str(value.trim()) {
        Ok(id) => id.to_string(),
        Err(_) => value.trim().to_ascii_lowercase(),
    }
}

/// Path relative to the configuration directory, with backslash separators
///
/// This is how the application refers to files from inside its XML documents.
pub(crate) fn config_reference(path: &str) -> String {
    let relative = if starts_with_ignore_case(path, CONFIG_PREFIX) {
        &path[CONFIG_PREFIX.len()..]
    } else {
        path
    };

    relative.replace('/', "\\")
}

/// The last component of a path
pub(crate) fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[cfg(test)]
mod test {
    use dmz_archive::{Container, ContainerFile};
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    use super::*;

    fn container() -> Container {
        let mut container = Container::new("test.dmz");
        container.extend(
            [
                "Config/TimecodeShows.xml",
                "Config/TimecodeShows/abc.xml",
                "config/timecodeshows2.xml",
                "Config/SceneLists.xml",
                "Config/SceneLists2.XML",
                "Config/SceneLists/readme.txt",
            ]
            .map(|name| ContainerFile::new(name, Vec::<u8>::new())),
        );
        container
    }

    #[test]
    fn select_index_files() {
        let container = container();
        let names = select_files(&container, "Config/TimecodeShows", Some("/TimecodeShows/"))
            .map(|f| f.name())
            .collect::<Vec<_>>();

        assert_eq!(names, vec!["Config/TimecodeShows.xml", "config/timecodeshows2.xml"]);
    }

    #[test]
    fn select_family_files() {
        let container = container();
        let names = select_family(&container, SCENE_LISTS_PREFIX)
            .map(|f| f.name())
            .collect::<Vec<_>>();

        assert_eq!(names, vec!["Config/SceneLists.xml", "Config/SceneLists2.XML"]);
    }

    #[test]
    fn malformed_tree_is_none() {
        let file = ContainerFile::new("Config/Broken.xml", b"<TreeItem Name=\"x\">".to_vec());
        assert!(parse_tree(&file).is_none());
        assert!(load_tree(&file).is_err());
    }

    #[test]
    fn ids() {
        let id = Uuid::parse_str("5b037e3b-7dc1-4300-8a4c-b4b167fdb412").expect("valid uuid");

        assert_eq!(parse_id(Some(" {5B037E3B-7DC1-4300-8A4C-B4B167FDB412} ")), Some(id));
        assert_eq!(parse_id(Some("garbage")), None);
        assert_eq!(parse_id(None), None);
        assert_eq!(id_key("5B037E3B-7DC1-4300-8A4C-B4B167FDB412"), id.to_string());
        assert_eq!(id_key("Custom"), "custom");
    }

    #[test]
    fn references() {
        assert_eq!(
            config_reference("Config/TimecodeShows/abc.xml"),
            "TimecodeShows\\abc.xml"
        );
        assert_eq!(config_reference("Sounds/a.mp3"), "Sounds\\a.mp3");
        assert_eq!(file_name("Config/Sounds/a.mp3"), "a.mp3");
        assert_eq!(file_name("a.mp3"), "a.mp3");
    }

    #[test]
    fn case_insensitive_matching() {
        assert!(starts_with_ignore_case("config/presets.xml", PRESETS_PREFIX));
        assert!(!starts_with_ignore_case("Config", PRESETS_PREFIX));
        assert!(ends_with_ignore_case("Config/a.XML", ".xml"));
        assert!(!ends_with_ignore_case("ml", ".xml"));
        assert!(contains_ignore_case("Config/TimecodeShows/ABC.xml", "abc"));
    }
}

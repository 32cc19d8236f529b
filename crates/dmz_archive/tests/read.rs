use std::fs::File;
use std::path::{Path, PathBuf};

use dmz_archive::checksum::ChecksumStatus;
use dmz_archive::error::Error;
use dmz_archive::Container;
use pretty_assertions::assert_eq;
use tracing::info;
use tracing_test::traced_test;
use walkdir::WalkDir;

fn resources() -> PathBuf {
    PathBuf::from(format!("{}/resources/", env!("CARGO_MANIFEST_DIR")))
}

fn validate_archive(path: &Path) -> Result<(), Error> {
    info!("testing {}", &path.display());

    let parent_dir = path.with_extension("");
    info!("comparing to files in {}", parent_dir.display());

    let expected_files = WalkDir::new(&parent_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| !e.file_type().is_dir())
        .collect::<Vec<_>>();

    let container = Container::read(File::open(path)?, "simple.dmz")?;
    assert_eq!(container.len(), expected_files.len());

    for file in container.files() {
        let p = parent_dir.join(file.name());
        info!("comparing to {}", p.display());

        let expected = std::fs::read(&p)?;
        assert_eq!(expected.len(), file.size());
        assert_eq!(expected, file.data());
    }

    Ok(())
}

#[traced_test]
#[test]
fn validate_archive_parsing() -> Result<(), Error> {
    let to_test = std::fs::read_dir(resources())?
        .filter_map(|res| res.ok())
        .map(|dir_entry| dir_entry.path())
        .filter(|e| e.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == "dmz"));

    for path in to_test {
        validate_archive(&path)?;
    }

    Ok(())
}

#[traced_test]
#[test]
fn verify_fixture_checksums() -> Result<(), Error> {
    let container = Container::read(File::open(resources().join("simple.dmz"))?, "simple.dmz")?;

    let report = container.verify_checksums()?.expect("fixture carries a checksum file");
    assert_eq!(report.entries.len(), 3);
    assert!(report
        .entries
        .iter()
        .all(|(_, status)| *status == ChecksumStatus::Ok));
    assert!(report.is_valid());

    Ok(())
}

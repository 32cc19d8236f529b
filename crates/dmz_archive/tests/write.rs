use std::fs::File;

use dmz_archive::write::ContainerWriterOptions;
use dmz_archive::{CompressionMethod, Container, ContainerFile, CHECKSUM_FILE};
use miette::{IntoDiagnostic, Result};
use pretty_assertions::assert_eq;
use tracing::info;
use tracing_test::traced_test;

fn fixture() -> Result<Container> {
    let path = format!("{}/resources/simple.dmz", env!("CARGO_MANIFEST_DIR"));
    let file = File::open(&path).into_diagnostic()?;
    Ok(Container::read(file, "simple.dmz")?)
}

#[traced_test]
#[test]
fn rewrite_fixture() -> Result<()> {
    let input = fixture()?;

    for compression in [CompressionMethod::Stored, CompressionMethod::Deflated] {
        info!("writing with {compression:?}");

        let options = ContainerWriterOptions::builder()
            .compression(compression)
            .build();
        let bytes = input
            .write(std::io::Cursor::new(Vec::new()), options)?
            .into_inner();
        let output = Container::from_bytes(&bytes, "simple.dmz")?;

        let mut expected = input.clone();
        expected.remove(CHECKSUM_FILE);

        assert_eq!(
            output.file_names().collect::<Vec<_>>(),
            expected.file_names().collect::<Vec<_>>()
        );
        assert_eq!(output, expected);
        assert!(output.verify_checksums()?.is_none());
    }

    Ok(())
}

#[test]
fn replaced_content_is_written() -> Result<()> {
    let mut container = fixture()?;
    container.replace_data(
        "Config/TimecodeShows.xml",
        br#"<TreeItem Name="TimecodeShows"><TreeItem Name="TimecodeShow" /></TreeItem>"#.to_vec(),
    )?;
    container.insert(ContainerFile::new("Config/Sounds/outro.mp3", vec![1u8; 64]));

    let output = Container::from_bytes(&container.to_bytes()?, "simple.dmz")?;

    assert_eq!(
        output.by_name("Config/TimecodeShows.xml")?.data(),
        container.by_name("Config/TimecodeShows.xml")?.data()
    );
    assert_eq!(output.file_names().last(), Some("Config/Sounds/outro.mp3"));

    Ok(())
}

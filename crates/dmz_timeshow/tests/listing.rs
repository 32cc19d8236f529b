mod common;

use dmz_timeshow::error::Result;
use dmz_timeshow::{get_presets, get_scene_lists, get_timeshows};
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

use crate::common::{empty_project, load, NEW_SHOW};

#[traced_test]
#[test]
fn list_source_timeshows() -> Result<()> {
    let container = load("source")?;

    let shows = get_timeshows(&container)
        .into_iter()
        .map(|meta| (meta.id.to_string(), meta.name, meta.number))
        .collect::<Vec<_>>();

    assert_eq!(
        shows,
        vec![
            (
                "0f4a1c2e-3b5d-4e6f-8a9b-0c1d2e3f4a5b".to_owned(),
                "Opening".to_owned(),
                "1".to_owned()
            ),
            (
                "1a2b3c4d-5e6f-4a8b-9c0d-1e2f3a4b5c6d".to_owned(),
                "Interlude".to_owned(),
                "2".to_owned()
            ),
            (NEW_SHOW.to_owned(), "New Ts Show".to_owned(), "3".to_owned()),
        ]
    );

    Ok(())
}

#[traced_test]
#[test]
fn list_source_scene_lists_and_presets() -> Result<()> {
    let container = load("source")?;

    let scene_lists = get_scene_lists(&container)
        .into_iter()
        .map(|s| s.name)
        .collect::<Vec<_>>();
    assert_eq!(scene_lists, vec!["Intro Looks", "Strobe", "Ballad"]);

    let presets = get_presets(&container);
    assert_eq!(
        presets.iter().filter_map(|p| p.name()).collect::<Vec<_>>(),
        vec!["Warm White", "Blue Wash"]
    );

    Ok(())
}

#[traced_test]
#[test]
fn fresh_project_lists_nothing() -> Result<()> {
    let container = empty_project()?;

    assert!(get_timeshows(&container).is_empty());
    assert!(get_scene_lists(&container).is_empty());
    assert!(get_presets(&container).is_empty());

    Ok(())
}

use divan::AllocProfiler;

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

fn main() {
    divan::main();
}

fn load(dir: &str) -> dmz_archive::Container {
    let root = format!("{}/resources/{dir}", env!("CARGO_MANIFEST_DIR"));
    let mut container = dmz_archive::Container::new(format!("{dir}.dmz"));

    for entry in walkdir::WalkDir::new(&root).sort_by_file_name() {
        let entry = entry.unwrap();
        if entry.file_type().is_dir() {
            continue;
        }

        let name = entry
            .path()
            .strip_prefix(&root)
            .unwrap()
            .to_string_lossy()
            .replace('\\', "/");
        let data = std::fs::read(entry.path()).unwrap();
        container.insert(dmz_archive::ContainerFile::new(name, data));
    }

    container
}

pub mod listing {
    use divan::Bencher;
    use dmz_timeshow::{get_presets, get_scene_lists, get_timeshows};

    #[divan::bench]
    fn timeshows(bencher: Bencher) {
        bencher
            .with_inputs(|| super::load("source"))
            .bench_refs(|container| divan::black_box(get_timeshows(container)));
    }

    #[divan::bench]
    fn scene_lists(bencher: Bencher) {
        bencher
            .with_inputs(|| super::load("source"))
            .bench_refs(|container| divan::black_box(get_scene_lists(container)));
    }

    #[divan::bench]
    fn presets(bencher: Bencher) {
        bencher
            .with_inputs(|| super::load("source"))
            .bench_refs(|container| divan::black_box(get_presets(container)));
    }
}

pub mod merge {
    use divan::Bencher;
    use dmz_timeshow::{add_timeshow, extract_timeshow, get_timeshows};

    #[divan::bench]
    fn extract(bencher: Bencher) {
        let source = super::load("source");
        let shows = get_timeshows(&source);

        bencher.bench_local(|| {
            for meta in &shows {
                divan::black_box(extract_timeshow(&source, meta).unwrap());
            }
        });
    }

    #[divan::bench]
    fn extract_and_add(bencher: Bencher) {
        let source = super::load("source");
        let shows = get_timeshows(&source);

        bencher
            .with_inputs(|| super::load("destination"))
            .bench_refs(|destination| {
                for meta in &shows {
                    let timeshow = extract_timeshow(&source, meta).unwrap();
                    divan::black_box(add_timeshow(destination, &timeshow).unwrap());
                }
            });
    }
}

use std::fs;

use image::GenericImageView;

use flavor_assets::convert;
use flavor_assets::report::RunLog;

const SAMPLE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="120" height="80">
  <rect width="120" height="80" fill="#d2691e"/>
  <circle cx="60" cy="40" r="24" fill="#fff8dc"/>
</svg>"##;

#[test]
fn converts_svg_and_removes_intermediate_png() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("garlic_pasta.svg"), SAMPLE_SVG).unwrap();

    let mut log = RunLog::console();
    let outcomes = convert::convert_directory(dir.path(), &mut log).unwrap();

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].id, "garlic_pasta");
    assert!(outcomes[0].result.is_ok());

    let jpg = dir.path().join("garlic_pasta.jpg");
    let bytes = fs::read(&jpg).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Jpeg);

    let img = image::open(&jpg).unwrap();
    assert_eq!(
        img.dimensions(),
        (convert::TARGET_WIDTH, convert::TARGET_HEIGHT)
    );

    assert!(!dir.path().join("garlic_pasta.png").exists());
    assert!(!dir.path().join("garlic_pasta.jpg.tmp").exists());
}

#[test]
fn keeps_converting_after_a_bad_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("aaa_broken.svg"), "this is not an svg").unwrap();
    fs::write(dir.path().join("zzz_good.svg"), SAMPLE_SVG).unwrap();

    let mut log = RunLog::console();
    let outcomes = convert::convert_directory(dir.path(), &mut log).unwrap();

    // Lexical order: the broken file comes first and must not stop the batch.
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].id, "aaa_broken");
    assert!(outcomes[0].result.is_err());
    assert_eq!(outcomes[1].id, "zzz_good");
    assert!(outcomes[1].result.is_ok());

    assert!(!dir.path().join("aaa_broken.jpg").exists());
    assert!(dir.path().join("zzz_good.jpg").exists());
}

#[test]
fn empty_directory_yields_no_outcomes() {
    let dir = tempfile::tempdir().unwrap();

    let mut log = RunLog::console();
    let outcomes = convert::convert_directory(dir.path(), &mut log).unwrap();

    assert!(outcomes.is_empty());
}

#[test]
fn run_log_gains_one_section_per_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("caprese_salad.svg"), SAMPLE_SVG).unwrap();
    let log_path = dir.path().join("convert.log");

    for _ in 0..2 {
        let mut log = RunLog::with_file(&log_path, "convert").unwrap();
        convert::convert_directory(dir.path(), &mut log).unwrap();
    }

    let contents = fs::read_to_string(&log_path).unwrap();
    let sections = contents
        .lines()
        .filter(|line| line.starts_with("----- convert run at "))
        .count();
    assert_eq!(sections, 2);
    assert!(contents.contains("Processing:"));
    assert!(contents.contains("Done run"));
}

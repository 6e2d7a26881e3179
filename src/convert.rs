use std::fs;
use std::io;
use std::path::Path;

use resvg::{tiny_skia, usvg};

use crate::error::AssetError;
use crate::report::{ItemOutcome, RunLog};
use crate::utils::{files, images};

/// Rasterization target shared by all recipe illustrations.
pub const TARGET_WIDTH: u32 = 1200;
pub const TARGET_HEIGHT: u32 = 800;

const JPEG_QUALITY: u8 = 85;

/// Convert every SVG in the directory to a JPEG with the same file stem.
///
/// Each file is rasterized to an intermediate PNG, reloaded, flattened to
/// RGB and re-encoded as JPEG next to the source. A failure on one file is
/// recorded in its outcome and the batch moves on to the next file.
pub fn convert_directory(dir: &Path, log: &mut RunLog) -> io::Result<Vec<ItemOutcome>> {
    let svg_files = files::list_svg_files(dir)?;
    log.line(&format!(
        "Found {} SVG files in {}",
        svg_files.len(),
        dir.display()
    ));

    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();
    let options = usvg::Options {
        fontdb: std::sync::Arc::new(fontdb),
        ..usvg::Options::default()
    };

    let mut outcomes = Vec::with_capacity(svg_files.len());
    for svg_path in &svg_files {
        let stem = svg_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        log.line(&format!("Processing: {}", svg_path.display()));

        match convert_one(svg_path, &options, log) {
            Ok(()) => {
                let jpg_path = svg_path.with_extension("jpg");
                log.line(&format!("  -> Created {}", jpg_path.display()));
                outcomes.push(ItemOutcome::ok(stem, jpg_path));
            }
            Err(e) => {
                log.error(&format!(
                    "  Failed processing {}: {}",
                    svg_path.display(),
                    e
                ));
                outcomes.push(ItemOutcome::failed(stem, e));
            }
        }
    }

    log.line("Done run");
    Ok(outcomes)
}

/// Rasterize one SVG and re-encode it as JPEG next to the source.
fn convert_one(svg_path: &Path, options: &usvg::Options, log: &mut RunLog) -> Result<(), AssetError> {
    let png_path = svg_path.with_extension("png");
    let jpg_path = svg_path.with_extension("jpg");

    let svg_data = fs::read(svg_path)?;
    let tree = usvg::Tree::from_data(&svg_data, options)?;

    let mut pixmap =
        tiny_skia::Pixmap::new(TARGET_WIDTH, TARGET_HEIGHT).ok_or(AssetError::Pixmap {
            width: TARGET_WIDTH,
            height: TARGET_HEIGHT,
        })?;

    // Stretch the document to exactly fill the target, scaling each axis
    // independently.
    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        TARGET_WIDTH as f32 / size.width(),
        TARGET_HEIGHT as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let png_bytes = pixmap
        .encode_png()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    fs::write(&png_path, &png_bytes)?;
    log.line(&format!(
        "  rasterized {} ({} bytes)",
        png_path.display(),
        png_bytes.len()
    ));

    images::reencode_jpeg(&png_path, &jpg_path, JPEG_QUALITY)?;
    log.line(&format!("  saved jpg {}", jpg_path.display()));

    // Best-effort; a stuck intermediate does not fail the item.
    match fs::remove_file(&png_path) {
        Ok(()) => log.line("  removed temp png"),
        Err(e) => log.error(&format!("  failed to remove temp png: {}", e)),
    }

    Ok(())
}

use std::io;
use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use image::{DynamicImage, Pixel, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_ellipse_mut, draw_filled_rect_mut, draw_text_mut, Blend};
use imageproc::rect::Rect;
use indicatif::{ProgressBar, ProgressStyle};
use resvg::usvg::fontdb;

use crate::error::AssetError;
use crate::recipes::Recipe;
use crate::report::ItemOutcome;
use crate::utils::{files, images};

pub const CANVAS_WIDTH: u32 = 1200;
pub const CANVAS_HEIGHT: u32 = 800;

const JPEG_QUALITY: u8 = 88;
const GRADIENT_STEPS: u32 = 200;
const SHELF_TILES: i32 = 6;
const TILE_RADIUS: i32 = 18;
const BLUR_SIGMA: f32 = 8.0;
const PHOTO_MIX: f32 = 0.35;
const BANNER_MARGIN: i32 = 60;
const BANNER_HEIGHT: i32 = 120;
const TITLE_SCALE: f32 = 56.0;
const SUBTITLE_SCALE: f32 = 28.0;
const SUBTITLE: &str = "Try with: fresh ingredients • quick";

/// Draw one placeholder thumbnail per recipe into `<dir>/<id>.jpg`.
///
/// Thumbnails stand in for real photos: a tinted radial glow over the base
/// color, a row of shelf tiles, a blur pass for softness and a title
/// banner. A failed recipe is recorded in its outcome and the loop
/// continues.
pub fn synthesize_all(recipes: &[Recipe], dir: &Path) -> io::Result<Vec<ItemOutcome>> {
    files::ensure_directory(dir)?;

    let font = load_banner_font();
    if font.is_none() {
        eprintln!("No usable system font found, drawing banners without text");
    }

    let pb = ProgressBar::new(recipes.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            )
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut outcomes = Vec::with_capacity(recipes.len());
    for recipe in recipes {
        pb.set_message(recipe.id.clone());
        let out_path = dir.join(format!("{}.jpg", recipe.id));

        match synthesize_one(recipe, &out_path, font.as_ref()) {
            Ok(()) => {
                pb.println(format!("Wrote {}", out_path.display()));
                outcomes.push(ItemOutcome::ok(recipe.id.as_str(), out_path));
            }
            Err(e) => {
                pb.println(format!("Failed {}: {}", recipe.id, e));
                outcomes.push(ItemOutcome::failed(recipe.id.as_str(), e));
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Thumbnails complete");
    Ok(outcomes)
}

fn synthesize_one(
    recipe: &Recipe,
    out_path: &Path,
    font: Option<&FontVec>,
) -> Result<(), AssetError> {
    let base = Rgba([recipe.base[0], recipe.base[1], recipe.base[2], 255]);

    let mut canvas = Blend(RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, base));
    paint_radial_glow(&mut canvas, recipe.accent);

    let mut img = canvas.0;
    paint_shelf_tiles(&mut img);

    let img = soften(img);
    let img = paint_banner(img, &recipe.title, font);

    let rgb = DynamicImage::ImageRgba8(img).to_rgb8();
    let buf = images::encode_jpeg(&rgb, JPEG_QUALITY)?;
    files::write_atomic(out_path, &buf)?;
    Ok(())
}

/// Approximate a radial gradient with concentric translucent ellipses,
/// fading the accent color towards the rim.
fn paint_radial_glow(canvas: &mut Blend<RgbaImage>, accent: [u8; 3]) {
    let cx = (CANVAS_WIDTH / 2) as i32;
    let cy = (CANVAS_HEIGHT / 2) as i32;

    for i in 0..GRADIENT_STEPS {
        let fade = 1.0 - i as f32 / GRADIENT_STEPS as f32;
        let color = Rgba([
            (accent[0] as f32 * fade) as u8,
            (accent[1] as f32 * fade) as u8,
            (accent[2] as f32 * fade) as u8,
            (30.0 * fade) as u8,
        ]);
        draw_filled_ellipse_mut(canvas, (cx, cy), (i * 6) as i32, (i * 4) as i32, color);
    }
}

/// Six faint rounded tiles staggered along the lower portion.
fn paint_shelf_tiles(img: &mut RgbaImage) {
    let h = CANVAS_HEIGHT as i32;
    for j in 0..SHELF_TILES {
        let lift = (j % 3) * 10;
        fill_rounded_rect(
            img,
            50 + j * 170,
            h - 180 - lift,
            200 + j * 170,
            h - 40 - lift,
            TILE_RADIUS,
            Rgba([255, 255, 255, 10]),
        );
    }
}

/// Alpha-blend a filled rounded rectangle onto the image, clipped to its
/// bounds.
fn fill_rounded_rect(
    img: &mut RgbaImage,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    radius: i32,
    color: Rgba<u8>,
) {
    let (w, h) = img.dimensions();
    let r = radius.max(0);
    let r2 = r * r;

    for y in y0.max(0)..=y1.min(h as i32 - 1) {
        for x in x0.max(0)..=x1.min(w as i32 - 1) {
            // Distance past the straight edges; nonzero on both axes only
            // inside a corner square.
            let dx = (x0 + r - x).max(x - (x1 - r)).max(0);
            let dy = (y0 + r - y).max(y - (y1 - r)).max(0);
            if dx * dx + dy * dy > r2 {
                continue;
            }
            img.get_pixel_mut(x as u32, y as u32).blend(&color);
        }
    }
}

/// Blend a Gaussian-blurred copy back over the canvas to fake the softness
/// of a photograph.
fn soften(img: RgbaImage) -> RgbaImage {
    let blurred = image::imageops::blur(&img, BLUR_SIGMA);
    let mut out = img;
    for (dst, src) in out.pixels_mut().zip(blurred.pixels()) {
        for c in 0..4 {
            dst.0[c] = (dst.0[c] as f32 * (1.0 - PHOTO_MIX) + src.0[c] as f32 * PHOTO_MIX)
                .round() as u8;
        }
    }
    out
}

/// Semi-transparent banner near the bottom holding the title and subtitle.
fn paint_banner(img: RgbaImage, title: &str, font: Option<&FontVec>) -> RgbaImage {
    let banner_w = CANVAS_WIDTH - 2 * BANNER_MARGIN as u32;
    let banner_y = CANVAS_HEIGHT as i32 - BANNER_HEIGHT - 40;

    let mut canvas = Blend(img);
    draw_filled_rect_mut(
        &mut canvas,
        Rect::at(BANNER_MARGIN, banner_y).of_size(banner_w, BANNER_HEIGHT as u32),
        Rgba([0, 0, 0, 140]),
    );

    let mut img = canvas.0;
    if let Some(font) = font {
        draw_text_mut(
            &mut img,
            Rgba([255, 255, 255, 255]),
            80,
            banner_y + 20,
            PxScale::from(TITLE_SCALE),
            font,
            title,
        );
        draw_text_mut(
            &mut img,
            Rgba([230, 230, 230, 255]),
            80,
            banner_y + 70,
            PxScale::from(SUBTITLE_SCALE),
            font,
            SUBTITLE,
        );
    }
    img
}

/// Locate a system sans-serif face through fontdb and load it for drawing.
/// Returns `None` when the host has no usable face; the banner is then
/// drawn without text.
fn load_banner_font() -> Option<FontVec> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let query = fontdb::Query {
        families: &[fontdb::Family::SansSerif, fontdb::Family::Serif],
        weight: fontdb::Weight::NORMAL,
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    };
    let id = db.query(&query)?;
    db.with_face_data(id, |data, index| {
        FontVec::try_from_vec_and_index(data.to_vec(), index).ok()
    })
    .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_rect_cuts_corners_and_fills_center() {
        let black = Rgba([0, 0, 0, 255]);
        let white = Rgba([255, 255, 255, 255]);
        let mut img = RgbaImage::from_pixel(100, 100, black);

        fill_rounded_rect(&mut img, 10, 10, 89, 89, 18, white);

        assert_eq!(img.get_pixel(10, 10), &black);
        assert_eq!(img.get_pixel(50, 50), &white);
        assert_eq!(img.get_pixel(50, 10), &white);
        assert_eq!(img.get_pixel(0, 0), &black);
    }

    #[test]
    fn rounded_rect_is_clipped_to_the_image() {
        let mut img = RgbaImage::from_pixel(40, 40, Rgba([0, 0, 0, 255]));
        fill_rounded_rect(&mut img, 20, 20, 120, 120, 18, Rgba([255, 255, 255, 255]));
        assert_eq!(img.get_pixel(30, 30), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn soften_preserves_dimensions() {
        let img = RgbaImage::from_pixel(64, 32, Rgba([200, 60, 60, 255]));
        let out = soften(img);
        assert_eq!(out.dimensions(), (64, 32));
    }
}

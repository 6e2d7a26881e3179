use std::io;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::AssetError;
use crate::recipes::Recipe;
use crate::report::ItemOutcome;
use crate::utils::{files, http, images};

/// Stock-photo redirect endpoint serving a random photo per search query.
pub const DEFAULT_ENDPOINT: &str = "https://source.unsplash.com";

/// Build the search URL for one recipe query at the requested size.
pub fn build_photo_url(endpoint: &str, width: u32, height: u32, query: &str) -> String {
    format!(
        "{}/{}x{}/?{}",
        endpoint.trim_end_matches('/'),
        width,
        height,
        urlencoding::encode(query)
    )
}

/// Download one stock photo per recipe into `<dir>/<id>.jpg`.
///
/// Every entry is attempted exactly once; a failed download is recorded in
/// its outcome and the loop continues. A rerun re-fetches and overwrites.
pub async fn fetch_photos(
    recipes: &[Recipe],
    dir: &Path,
    endpoint: &str,
    width: u32,
    height: u32,
) -> io::Result<Vec<ItemOutcome>> {
    files::ensure_directory(dir)?;

    let client = reqwest::Client::new();

    let pb = ProgressBar::new(recipes.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut outcomes = Vec::with_capacity(recipes.len());
    for recipe in recipes {
        let url = build_photo_url(endpoint, width, height, &recipe.query);
        let out_path = dir.join(format!("{}.jpg", recipe.id));

        match fetch_one(&client, &url, &out_path).await {
            Ok(()) => {
                pb.println(format!("Saved {} -> {}", recipe.id, out_path.display()));
                outcomes.push(ItemOutcome::ok(recipe.id.as_str(), out_path));
            }
            Err(e) => {
                pb.println(format!("Failed {}: {}", recipe.id, e));
                outcomes.push(ItemOutcome::failed(recipe.id.as_str(), e));
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Download complete");
    Ok(outcomes)
}

async fn fetch_one(
    client: &reqwest::Client,
    url: &str,
    out_path: &Path,
) -> Result<(), AssetError> {
    let bytes = http::fetch_image_bytes(client, url).await?;
    images::validate_image_bytes(&bytes)?;
    files::write_atomic(out_path, &bytes)?;
    Ok(())
}

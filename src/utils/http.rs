use crate::error::AssetError;

/// Get standard user agent string
pub fn get_user_agent() -> &'static str {
    "FlavorAssets"
}

/// Fetch a URL and return the response body, treating non-2xx as an error.
pub async fn fetch_image_bytes(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<u8>, AssetError> {
    let response = client
        .get(url)
        .header("User-Agent", get_user_agent())
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(AssetError::HttpStatus {
            status: response.status(),
            url: url.to_string(),
        });
    }

    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

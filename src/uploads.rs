use std::path::Path;

use anyhow::anyhow;
use uuid::Uuid;

use crate::AppResult;

pub const PLACEHOLDER_FILENAME: &str = "listingimage";
pub const PLACEHOLDER_URL: &str = "https://share.google/images/DYSSlhUDv7rUdK8ai";

const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

#[derive(Debug, Clone)]
pub struct StoredImage {
    pub filename: String,
    pub url: String,
}

pub fn placeholder() -> StoredImage {
    StoredImage {
        filename: PLACEHOLDER_FILENAME.to_string(),
        url: PLACEHOLDER_URL.to_string(),
    }
}

fn image_ext(original_name: &str) -> Option<String> {
    let ext = original_name.rsplit_once('.')?.1.to_ascii_lowercase();
    ALLOWED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

pub async fn store_image(
    uploads_dir: &Path,
    original_name: &str,
    bytes: &[u8],
) -> AppResult<StoredImage> {
    let ext = image_ext(original_name)
        .ok_or_else(|| anyhow!("unsupported image type: {original_name}"))?;

    let filename = format!("{}.{ext}", Uuid::now_v7().simple());
    tokio::fs::write(uploads_dir.join(&filename), bytes).await?;

    let url = format!("/uploads/{filename}");
    Ok(StoredImage { filename, url })
}

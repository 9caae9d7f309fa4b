//! Result naming and persistence.

use std::path::{Path, PathBuf};

use crate::data_url::DataUrl;
use crate::error::Result;

/// Download file name for the result at `index` (0-based).
#[must_use]
pub fn download_file_name(index: usize) -> String {
    format!("product_ai_gen_{}.png", index + 1)
}

/// Write a generated image into `dir` under its download file name.
///
/// # Errors
/// Returns an error when the file cannot be written.
pub async fn save_image(dir: impl AsRef<Path>, index: usize, image: &DataUrl) -> Result<PathBuf> {
    let path = dir.as_ref().join(download_file_name(index));
    tokio::fs::write(&path, &image.data).await?;
    Ok(path)
}

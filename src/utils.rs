//! Utility functions

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

// ============================================================================
// Image Cache
// ============================================================================

/// Common image file extensions for cache lookup
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "png", "gif", "webp", "bmp"];

/// Find an existing cached image file with any common extension
///
/// # Arguments
/// * `dir` - The directory to search in
/// * `stem` - The filename without extension (e.g., "slide_3")
pub fn find_cached_image(dir: &Path, stem: &str) -> Option<PathBuf> {
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", stem, ext)))
        .find(|p| p.exists())
}

/// Get the base cache directory for bazaar
pub fn cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bazaar")
}

/// Get the slide images cache directory
pub fn slides_cache_dir() -> PathBuf {
    cache_dir().join("slides")
}

/// Detect image format from magic bytes
/// Returns the file extension (without dot)
pub fn detect_image_format(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return "png";
    }
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return "jpg";
    }
    if bytes.starts_with(b"GIF8") {
        return "gif";
    }
    if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
        return "webp";
    }
    if bytes.starts_with(b"BM") {
        return "bmp";
    }

    "jpg"
}

/// A slide image on disk with its pixel dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Download an image into `dir` as `<stem>.<ext>`, reusing a cached copy
///
/// The extension comes from the downloaded bytes, not from the URL.
pub async fn download_img(
    client: &reqwest::Client,
    url: &str,
    dir: &Path,
    stem: &str,
) -> Result<PathBuf> {
    if let Some(existing) = find_cached_image(dir, stem) {
        debug!("Image cache hit: {:?}", existing);
        return Ok(existing);
    }

    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("creating cache directory {:?}", dir))?;

    let bytes = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("requesting {}", url))?
        .bytes()
        .await
        .with_context(|| format!("reading body of {}", url))?;

    let path = dir.join(format!("{}.{}", stem, detect_image_format(&bytes)));
    tokio::fs::write(&path, &bytes)
        .await
        .with_context(|| format!("writing {:?}", path))?;

    debug!("Downloaded {} bytes to {:?}", bytes.len(), path);
    Ok(path)
}

/// Download a slide image and read its dimensions
pub async fn download_slide_image(
    client: reqwest::Client,
    slide_id: u64,
    image_ref: String,
) -> Result<CachedImage> {
    if image_ref.is_empty() {
        anyhow::bail!("slide {} has no image", slide_id);
    }

    let path = download_img(
        &client,
        &image_ref,
        &slides_cache_dir(),
        &format!("slide_{}", slide_id),
    )
    .await?;

    let (width, height) = image::ImageReader::open(&path)
        .and_then(|r| r.with_guessed_format())
        .with_context(|| format!("opening {:?}", path))?
        .into_dimensions()
        .with_context(|| format!("reading dimensions of {:?}", path))?;

    Ok(CachedImage {
        path,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_formats_from_magic_bytes() {
        assert_eq!(
            detect_image_format(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0]),
            "png"
        );
        assert_eq!(detect_image_format(&[0xFF, 0xD8, 0xFF, 0xE0]), "jpg");
        assert_eq!(detect_image_format(b"GIF89a.."), "gif");
        assert_eq!(detect_image_format(b"RIFF\0\0\0\0WEBPVP8 "), "webp");
        assert_eq!(detect_image_format(b"BM......"), "bmp");
        assert_eq!(detect_image_format(b"??"), "jpg");
    }

    #[test]
    fn cached_image_found_by_stem() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(find_cached_image(dir.path(), "slide_1"), None);

        let path = dir.path().join("slide_1.webp");
        std::fs::write(&path, b"x").unwrap();
        assert_eq!(find_cached_image(dir.path(), "slide_1"), Some(path));
        assert_eq!(find_cached_image(dir.path(), "slide_2"), None);
    }

    #[tokio::test]
    async fn cache_hit_skips_download() {
        let dir = tempfile::tempdir().unwrap();
        let cached = dir.path().join("slide_4.png");
        std::fs::write(&cached, b"x").unwrap();

        // Unroutable URL: any network access would fail the test
        let client = reqwest::Client::new();
        let path = download_img(&client, "http://0.0.0.0:1/none", dir.path(), "slide_4")
            .await
            .unwrap();
        assert_eq!(path, cached);
    }
}

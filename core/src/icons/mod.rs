//! On-disk icon thumbnail cache.
//!
//! One PNG per entry, written once when the entry is added and deleted when
//! the entry goes away. No eviction and no reconciliation of orphans beyond
//! that.

use error::IconError;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum IconError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Image error: {0}")]
        Image(#[from] image::ImageError),

        #[error("Resize error: {0}")]
        Resize(#[from] fast_image_resize::ResizeError),
    }
}

pub struct IconCache {
    dir: PathBuf,
}

impl IconCache {
    const ICON_SIZE: u32 = 64;
    const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "ico"];

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn is_supported_image(path: &Path) -> bool {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        Self::SUPPORTED_EXTENSIONS.contains(&ext.as_str())
    }

    /// Produces a cached thumbnail for `source`, returning its path.
    ///
    /// Any failure (unsupported format, decode, resize, write) is logged and
    /// yields `None`; the entry simply keeps no icon.
    pub fn extract(&self, source: &Path) -> Option<PathBuf> {
        if !Self::is_supported_image(source) {
            debug!(source = %source.display(), "no thumbnail, unsupported format");
            return None;
        }

        match self.generate_thumbnail(source) {
            Ok(path) => Some(path),
            Err(e) => {
                debug!(source = %source.display(), error = %e, "thumbnail extraction failed");
                None
            }
        }
    }

    fn generate_thumbnail(&self, source: &Path) -> Result<PathBuf, IconError> {
        let src_image = image::open(source)?;
        let (src_width, src_height) = (src_image.width(), src_image.height());

        // Target dimensions preserving aspect ratio, never upscaling
        let scale = (Self::ICON_SIZE as f32 / src_width.max(src_height) as f32).min(1.0);
        let dst_width = ((src_width as f32 * scale) as u32).max(1);
        let dst_height = ((src_height as f32 * scale) as u32).max(1);

        let mut dst_image = image::DynamicImage::new(dst_width, dst_height, src_image.color());

        let mut resizer = fast_image_resize::Resizer::new();
        resizer.resize(
            &src_image,
            &mut dst_image,
            Some(&fast_image_resize::ResizeOptions::new().resize_alg(
                fast_image_resize::ResizeAlg::Convolution(fast_image_resize::FilterType::Lanczos3),
            )),
        )?;

        std::fs::create_dir_all(&self.dir)?;

        let icon_path = self.dir.join(format!("{}.png", uuid::Uuid::new_v4()));
        dst_image.save_with_format(&icon_path, image::ImageFormat::Png)?;

        Ok(icon_path)
    }

    /// Best-effort deletion of one cached icon file.
    pub fn remove(icon_path: &Path) {
        if !icon_path.exists() {
            return;
        }
        if let Err(e) = std::fs::remove_file(icon_path) {
            debug!(icon = %icon_path.display(), error = %e, "failed to delete cached icon");
        }
    }
}

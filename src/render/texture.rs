use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use image::RgbaImage;

use crate::math::{Color, Point2, Rect};

/// A decoded image in straight RGBA8.
///
/// Cloning is cheap; clones share the same pixels, so one texture can back
/// any number of sprites.
#[derive(Clone, Debug)]
pub struct Texture {
    image: Arc<RgbaImage>,
}

impl Texture {
    /// Decode the image file at `path`. BMP is what the demo ships; anything
    /// the `image` crate recognises by its header works too.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TextureError> {
        let path = path.as_ref();

        let data = std::fs::read(path).map_err(|source| TextureError::Io {
            path: path.to_path_buf(),
            source: Arc::new(source),
        })?;

        let image = image::load_from_memory(&data).map_err(|source| TextureError::Decode {
            path: Some(path.to_path_buf()),
            source: Arc::new(source),
        })?;

        let texture = Self::from_image(image.to_rgba8());
        if texture.bounds().is_empty() {
            return Err(TextureError::Empty);
        }

        crate::dbg_log!(
            "Loaded texture {} ({}x{})",
            path.display(),
            texture.width(),
            texture.height()
        );

        Ok(texture)
    }

    /// Decode an in-memory encoded image.
    pub fn from_memory(data: &[u8]) -> Result<Self, TextureError> {
        let image = image::load_from_memory(data).map_err(|source| TextureError::Decode {
            path: None,
            source: Arc::new(source),
        })?;

        let texture = Self::from_image(image.to_rgba8());
        if texture.bounds().is_empty() {
            return Err(TextureError::Empty);
        }

        Ok(texture)
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            image: Arc::new(image),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> Point2 {
        Point2::new(self.width(), self.height())
    }

    pub fn bounds(&self) -> Rect {
        Rect::with_size(self.width() as i32, self.height() as i32)
    }

    /// Texel at `(x, y)`, clamped to the image edge. `None` for an empty
    /// texture.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let x = x.min(self.width().checked_sub(1)?);
        let y = y.min(self.height().checked_sub(1)?);

        Some(Color::from(*self.image.get_pixel(x, y)))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// True when both handles share the same pixel storage.
    pub fn ptr_eq(&self, other: &Texture) -> bool {
        Arc::ptr_eq(&self.image, &other.image)
    }
}

#[derive(Clone, Debug, thiserror::Error)]
pub enum TextureError {
    #[error("failed to read texture {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: Arc<std::io::Error>,
    },
    #[error("failed to decode texture: {source}")]
    Decode {
        path: Option<PathBuf>,
        source: Arc<image::ImageError>,
    },
    #[error("texture has no pixels")]
    Empty,
}

impl TextureError {
    /// True when the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TextureError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

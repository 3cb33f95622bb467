use crate::{math::Rect, software::Canvas};

use super::Texture;

/// A texture drawn into a destination box.
#[derive(Clone, Debug)]
pub struct Sprite {
    texture: Texture,
    position: Rect,
    source: Option<Rect>,
}

impl Sprite {
    /// Draw all of `texture`, scaled to fill `position`.
    pub fn new(texture: Texture, position: Rect) -> Self {
        Self {
            texture,
            position,
            source: None,
        }
    }

    /// Only draw the `source` region of the texture, e.g. one cell of an
    /// atlas.
    pub fn with_source(mut self, source: Rect) -> Self {
        self.source = Some(source);
        self
    }

    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    pub fn position(&self) -> Rect {
        self.position
    }

    pub fn source(&self) -> Option<Rect> {
        self.source
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        canvas.copy_texture(&self.texture, self.source, self.position);
    }
}

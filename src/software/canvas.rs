use crate::{
    math::{Color, Point2, Rect},
    render::Texture,
};

/// CPU drawing surface.
///
/// Pixels are stored row-major as `0x00RRGGBB` words, the layout softbuffer
/// presents directly. Every drawing call clips to the canvas bounds, so
/// callers may pass coordinates that lie partly or fully off-screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    draw_color: Color,
}

impl Canvas {
    /// Create a canvas filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK.to_u32(); width as usize * height as usize],
            draw_color: Color::WHITE,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Point2 {
        Point2::new(self.width, self.height)
    }

    pub fn bounds(&self) -> Rect {
        Rect::with_size(self.width as i32, self.height as i32)
    }

    /// Resize, discarding the previous content.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels
            .resize(width as usize * height as usize, Color::BLACK.to_u32());
    }

    pub fn draw_color(&self) -> Color {
        self.draw_color
    }

    pub fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    /// Fill the whole canvas with the draw colour.
    pub fn clear(&mut self) {
        self.pixels.fill(self.draw_color.to_u32());
    }

    /// Fill `rect` with the draw colour, replacing what was there.
    pub fn fill_rect(&mut self, rect: Rect) {
        let Some(area) = self.bounds().intersect(&rect) else {
            return;
        };

        let value = self.draw_color.to_u32();
        let stride = self.width as usize;

        for y in area.y..area.bottom() {
            let row = y as usize * stride;
            self.pixels[row + area.x as usize..row + area.right() as usize].fill(value);
        }
    }

    /// Set a single pixel to the draw colour. Off-canvas points are ignored.
    pub fn draw_point(&mut self, x: i32, y: i32) {
        if let Some(index) = self.index_of(x, y) {
            self.pixels[index] = self.draw_color.to_u32();
        }
    }

    pub fn draw_points<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Point2>,
    {
        for point in points {
            self.draw_point(point.x, point.y);
        }
    }

    /// Copy `src` of `texture` (the whole texture when `None`) into `dst`,
    /// scaling with nearest-neighbour sampling and alpha-blending each texel
    /// over the current content.
    pub fn copy_texture(&mut self, texture: &Texture, src: Option<Rect>, dst: Rect) {
        let src = match src {
            Some(src) => match texture.bounds().intersect(&src) {
                Some(src) => src,
                None => return,
            },
            None => texture.bounds(),
        };

        if src.is_empty() || dst.is_empty() {
            return;
        }

        let Some(visible) = self.bounds().intersect(&dst) else {
            return;
        };

        for y in visible.y..visible.bottom() {
            let ty = src.y as i64 + (y as i64 - dst.y as i64) * src.h as i64 / dst.h as i64;

            for x in visible.x..visible.right() {
                let tx = src.x as i64 + (x as i64 - dst.x as i64) * src.w as i64 / dst.w as i64;
                let Some(texel) = texture.pixel(tx as u32, ty as u32) else {
                    continue;
                };

                let index = y as usize * self.width as usize + x as usize;
                let below = Color::from_u32(self.pixels[index]);
                self.pixels[index] = texel.blend_over(below).to_u32();
            }
        }
    }

    /// Colour at `(x, y)`, or `None` outside the canvas. Always opaque.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index_of(x, y).map(|index| Color::from_u32(self.pixels[index]))
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Snapshot as an RGBA image, e.g. for saving a screenshot.
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let value = self.pixels[y as usize * self.width as usize + x as usize];
            Color::from_u32(value).into()
        })
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }

        Some(y as usize * self.width as usize + x as usize)
    }
}

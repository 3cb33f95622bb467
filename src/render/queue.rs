use std::path::Path;

use crate::{
    math::{Color, Point2},
    software::Canvas,
};

use super::{Present, RenderError, Shape, Sprite, Texture, TextureError};

/// Ordered list of shapes and sprites redrawn every frame.
///
/// A frame is painted back to front: clear to black, every shape in the
/// order it was added, then every sprite in the order it was added. There is
/// no z-index; to put something on top, add it later.
pub struct RenderQueue<P: Present> {
    presenter: P,
    canvas: Canvas,
    clear_color: Color,
    shapes: Vec<Shape>,
    sprites: Vec<Sprite>,
}

impl<P: Present> RenderQueue<P> {
    pub fn new(presenter: P) -> Self {
        let size = presenter.size();

        Self {
            canvas: Canvas::new(size.x.max(0) as u32, size.y.max(0) as u32),
            presenter,
            clear_color: Color::BLACK,
            shapes: Vec::new(),
            sprites: Vec::new(),
        }
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn add_sprite(&mut self, sprite: Sprite) {
        self.sprites.push(sprite);
    }

    /// Decode an image file into a texture for use in sprites.
    pub fn load_texture(&self, path: impl AsRef<Path>) -> Result<Texture, TextureError> {
        let path = path.as_ref();

        Texture::from_file(path).inspect_err(|e| {
            crate::warn_log!("Failed to load texture {}: {}", path.display(), e);
        })
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    /// Drop every queued shape and sprite.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.sprites.clear();
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    /// The frame painted by the last [`RenderQueue::paint`] or
    /// [`RenderQueue::render`].
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Paint the queue into the internal canvas without presenting it.
    pub fn paint(&mut self) {
        let size = self.presenter.size();
        if size != self.canvas.size() {
            crate::dbg_log!("Resizing canvas to {}x{}", size.x, size.y);
            self.canvas.resize(size.x.max(0) as u32, size.y.max(0) as u32);
        }

        self.canvas.set_draw_color(self.clear_color);
        self.canvas.clear();

        for shape in &self.shapes {
            shape.draw(&mut self.canvas);
        }

        for sprite in &self.sprites {
            sprite.draw(&mut self.canvas);
        }
    }

    /// Paint and present one frame.
    ///
    /// Does nothing while the presenter has no area, e.g. a minimised window.
    pub fn render(&mut self) -> Result<(), RenderError> {
        if self.presenter.size().is_empty() {
            return Ok(());
        }

        self.paint();
        self.presenter.present(&self.canvas)?;

        Ok(())
    }

    /// Size frames are currently painted at.
    pub fn size(&self) -> Point2 {
        self.canvas.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{math::Rect, software::Headless};

    fn queue() -> RenderQueue<Headless> {
        RenderQueue::new(Headless::new(Point2::new(800, 600)))
    }

    fn solid(color: Color, w: u32, h: u32) -> Texture {
        Texture::from_image(image::RgbaImage::from_pixel(w, h, color.into()))
    }

    #[test]
    fn red_rectangle_first_frame() {
        let mut queue = queue();
        let bounds = Rect::new(100, 100, 200, 100);
        queue.add_shape(Shape::rectangle(bounds, Color::RED));

        queue.render().unwrap();

        let frame = queue.presenter().last_frame().unwrap();
        for y in 0..600 {
            for x in 0..800 {
                let expected = if bounds.contains(Point2::new(x, y)) {
                    Color::RED
                } else {
                    Color::BLACK
                };
                assert_eq!(frame.pixel(x, y), Some(expected), "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn shapes_paint_in_insertion_order() {
        let mut queue = queue();
        queue.add_shape(Shape::rectangle(Rect::new(0, 0, 20, 20), Color::RED));
        queue.add_shape(Shape::rectangle(Rect::new(10, 10, 20, 20), Color::BLUE));

        queue.paint();

        assert_eq!(queue.canvas().pixel(5, 5), Some(Color::RED));
        assert_eq!(queue.canvas().pixel(15, 15), Some(Color::BLUE));
        assert_eq!(queue.canvas().pixel(25, 25), Some(Color::BLUE));
    }

    #[test]
    fn sprites_paint_over_shapes_regardless_of_add_order() {
        let mut queue = queue();
        queue.add_sprite(Sprite::new(solid(Color::GREEN, 2, 2), Rect::new(0, 0, 10, 10)));
        queue.add_shape(Shape::rectangle(Rect::new(0, 0, 20, 20), Color::RED));

        queue.paint();

        assert_eq!(queue.canvas().pixel(5, 5), Some(Color::GREEN));
        assert_eq!(queue.canvas().pixel(15, 15), Some(Color::RED));
    }

    #[test]
    fn sprites_paint_in_insertion_order() {
        let mut queue = queue();
        queue.add_sprite(Sprite::new(solid(Color::GREEN, 1, 1), Rect::new(300, 300, 64, 64)));
        queue.add_sprite(Sprite::new(solid(Color::YELLOW, 1, 1), Rect::new(332, 332, 64, 64)));

        queue.paint();

        assert_eq!(queue.canvas().pixel(310, 310), Some(Color::GREEN));
        assert_eq!(queue.canvas().pixel(340, 340), Some(Color::YELLOW));
        assert_eq!(queue.canvas().pixel(395, 395), Some(Color::YELLOW));
        assert_eq!(queue.canvas().pixel(396, 396), Some(Color::BLACK));
    }

    #[test]
    fn every_frame_starts_from_clear() {
        let mut queue = queue();
        queue.add_shape(Shape::rectangle(Rect::new(0, 0, 10, 10), Color::RED));
        queue.render().unwrap();

        queue.clear();
        queue.render().unwrap();

        let frame = queue.presenter().last_frame().unwrap();
        assert_eq!(frame.pixel(5, 5), Some(Color::BLACK));
        assert_eq!(queue.presenter().frames_presented(), 2);
    }

    #[test]
    fn clear_color_defaults_to_black_and_can_change() {
        let mut queue = queue();
        assert_eq!(queue.clear_color(), Color::BLACK);

        queue.set_clear_color(Color::CORNFLOWERBLUE);
        queue.add_shape(Shape::rectangle(Rect::new(0, 0, 10, 10), Color::RED));
        queue.render().unwrap();

        let frame = queue.presenter().last_frame().unwrap();
        assert_eq!(frame.pixel(5, 5), Some(Color::RED));
        assert_eq!(frame.pixel(10, 10), Some(Color::CORNFLOWERBLUE));
        assert_eq!(frame.pixel(799, 599), Some(Color::CORNFLOWERBLUE));
    }

    #[test]
    fn canvas_follows_presenter_size() {
        let mut queue = queue();
        queue.presenter_mut().set_size(Point2::new(320, 200));

        queue.render().unwrap();

        assert_eq!(queue.size(), Point2::new(320, 200));
        assert_eq!(
            queue.presenter().last_frame().map(Canvas::size),
            Some(Point2::new(320, 200))
        );
    }

    #[test]
    fn zero_sized_presenter_skips_frame() {
        let mut queue = queue();
        queue.presenter_mut().set_size(Point2::new(0, 600));

        queue.render().unwrap();

        assert_eq!(queue.presenter().frames_presented(), 0);
    }

    #[test]
    fn circle_far_off_canvas_is_clipped() {
        let mut queue = queue();
        queue.add_shape(Shape::circle(Rect::new(i32::MAX - 10, 0, 40, 40), Color::RED));
        queue.add_shape(Shape::circle(Rect::new(i32::MIN, i32::MIN, 40, 40), Color::RED));
        queue.add_shape(Shape::rectangle(Rect::new(i32::MAX - 10, 0, 40, 40), Color::RED));

        queue.render().unwrap();

        let frame = queue.presenter().last_frame().unwrap();
        assert!(frame.pixels().iter().all(|&p| p == Color::BLACK.to_u32()));
    }

    #[test]
    fn load_texture_reports_missing_file() {
        let queue = queue();
        let path = std::env::temp_dir().join("quadrant-queue-missing-player.bmp");

        let err = queue.load_texture(&path).unwrap_err();
        assert!(err.is_not_found());
    }
}

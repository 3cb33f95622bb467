use crate::{
    math::{Color, Point2, Rect},
    software::Canvas,
};

use super::MidpointCircle;

/// A solid-colour primitive placed by its bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Filled rectangle covering `bounds`.
    Rectangle { bounds: Rect, color: Color },
    /// Circle outline (not a filled disk) centred in `bounds`, with a radius
    /// of half the box width. The box height only moves the centre.
    Circle { bounds: Rect, color: Color },
}

impl Shape {
    pub fn rectangle(bounds: Rect, color: Color) -> Self {
        Shape::Rectangle { bounds, color }
    }

    pub fn circle(bounds: Rect, color: Color) -> Self {
        Shape::Circle { bounds, color }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rectangle { bounds, .. } | Shape::Circle { bounds, .. } => *bounds,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Shape::Rectangle { color, .. } | Shape::Circle { color, .. } => *color,
        }
    }

    /// Paint onto `canvas` with this shape's colour.
    pub fn draw(&self, canvas: &mut Canvas) {
        canvas.set_draw_color(self.color());

        match self {
            Shape::Rectangle { bounds, .. } => canvas.fill_rect(*bounds),
            Shape::Circle { bounds, .. } => {
                let center: Point2 = bounds.center();
                canvas.draw_points(MidpointCircle::new(center, bounds.w / 2));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let shape = Shape::circle(Rect::new(1, 2, 3, 4), Color::BLUE);

        assert_eq!(shape.bounds(), Rect::new(1, 2, 3, 4));
        assert_eq!(shape.color(), Color::BLUE);
    }

    #[test]
    fn circle_draws_outline_from_box() {
        let mut canvas = Canvas::new(40, 40);
        Shape::circle(Rect::new(10, 10, 20, 20), Color::GREEN).draw(&mut canvas);

        // Center (20, 20), radius 10: first octant starts at (cx + 9, cy).
        assert_eq!(canvas.pixel(29, 20), Some(Color::GREEN));
        assert_eq!(canvas.pixel(20, 29), Some(Color::GREEN));
        assert_eq!(canvas.pixel(11, 20), Some(Color::GREEN));
        assert_eq!(canvas.pixel(20, 11), Some(Color::GREEN));
        assert_eq!(canvas.pixel(20, 20), Some(Color::BLACK));
    }

    #[test]
    fn circle_partly_off_canvas_is_clipped() {
        let mut canvas = Canvas::new(10, 10);
        Shape::circle(Rect::new(-10, -10, 20, 20), Color::RED).draw(&mut canvas);

        // Only the lower-right quarter lands on the canvas.
        assert_eq!(canvas.pixel(9, 0), Some(Color::RED));
        assert_eq!(canvas.pixel(0, 9), Some(Color::RED));
        assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK));
    }
}
